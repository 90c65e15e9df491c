//! Terminal rendering surface
//!
//! [`TuiSurface`] draws the month pages into a ratatui buffer and interprets
//! crossterm events. Apart from the keyboard cursor and the mouse hover it
//! holds only what the controller last told it.

use chrono::{Datelike, Days, NaiveDate};
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, trace};

use crate::config::{PickerConfig, ThemeConfig};
use crate::picker::{
    classify_day, CalendarSurface, DateRange, DayMark, DisplayPeriod, Intent, Rules, Selection,
    WeekStart,
};

use super::keys::{calendar_key, CalendarKey};
use super::layout::{calendar_layout, required_width, CalendarLayout, HitTarget, PAGE_HEIGHT};
use super::widgets::{MonthPage, RenderableWidget};

/// Construction-time options of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub week_start: WeekStart,
    /// Draw previous/next arrows and allow paging
    pub show_navigation: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            show_navigation: true,
        }
    }
}

impl From<&PickerConfig> for SurfaceOptions {
    fn from(config: &PickerConfig) -> Self {
        Self {
            week_start: config.week_start,
            show_navigation: config.show_navigation,
        }
    }
}

/// Previous/next month controls; absent means paging is disabled for good
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls;

#[derive(Debug)]
pub struct TuiSurface {
    week_start: WeekStart,
    navigation: Option<NavControls>,
    rules: Rules,
    period: Option<DisplayPeriod>,
    selection: Selection,
    cursor: Option<NaiveDate>,
    hover: Option<NaiveDate>,
    area: Option<Rect>,
    finished: Option<DateRange>,
}

impl TuiSurface {
    pub fn new(options: SurfaceOptions) -> Self {
        Self {
            week_start: options.week_start,
            navigation: options.show_navigation.then_some(NavControls),
            rules: Rules::default(),
            period: None,
            selection: Selection::None,
            cursor: None,
            hover: None,
            area: None,
            finished: None,
        }
    }

    pub fn period(&self) -> Option<DisplayPeriod> {
        self.period
    }

    /// Selection as last rendered
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> Option<NaiveDate> {
        self.cursor
    }

    pub fn hover(&self) -> Option<NaiveDate> {
        self.hover
    }

    pub fn navigation(&self) -> Option<NavControls> {
        self.navigation
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Minimum (width, height) needed to draw every page
    pub fn required_size(&self) -> (u16, u16) {
        (required_width(self.rules.months_shown), PAGE_HEIGHT)
    }

    /// Range completed since the last call, if any
    pub fn take_finished(&mut self) -> Option<DateRange> {
        self.finished.take()
    }

    /// Place the keyboard cursor on `day` if it is shown
    pub fn set_cursor(&mut self, day: NaiveDate) {
        if self.is_visible(day) {
            self.cursor = Some(day);
        }
    }

    fn pages(&self) -> u8 {
        self.rules.months_shown
    }

    fn is_visible(&self, day: NaiveDate) -> bool {
        self.period.is_some_and(|period| period.contains(day, self.pages()))
    }

    /// End of the range preview while only a start is picked
    fn preview(&self) -> Option<NaiveDate> {
        self.hover.or(self.cursor)
    }

    /// Visual state of `day` as currently shown
    pub fn mark_of(&self, day: NaiveDate) -> DayMark {
        if !self.is_visible(day) {
            return DayMark::OutOfRange;
        }
        classify_day(
            day,
            DisplayPeriod::of(day),
            &self.selection,
            self.preview(),
            &self.rules.bounds,
        )
    }

    /// Layout of the last drawn frame
    pub fn layout(&self) -> Option<CalendarLayout> {
        let period = self.period?;
        calendar_layout(self.area?, period, self.pages(), self.navigation.is_some())
    }

    /// Draw all pages into `area`; nothing is drawn if the area is too small
    pub fn draw(&mut self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        self.area = Some(area);
        let Some(layout) = self.layout() else {
            trace!("VIEW: Area {:?} too small for {} page(s)", area, self.pages());
            return;
        };

        let last = layout.pages.len().saturating_sub(1);
        for (i, slot) in layout.pages.iter().enumerate() {
            let page = MonthPage {
                period: slot.period,
                week_start: self.week_start,
                selection: &self.selection,
                preview: self.preview(),
                cursor: self.cursor,
                bounds: &self.rules.bounds,
                show_prev: self.navigation.is_some() && i == 0,
                show_next: self.navigation.is_some() && i == last,
            };
            page.render(slot.area, buf, theme);
        }
    }

    /// Keep the cursor on screen after the period changed
    fn reseat_cursor(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        if self.cursor.is_some_and(|day| self.is_visible(day)) {
            return;
        }
        let same_day = self.cursor.and_then(|day| same_day_in(period, day));
        let endpoint = self
            .selection
            .endpoints()
            .into_iter()
            .find(|day| self.is_visible(*day));
        self.cursor = same_day.or(endpoint).or_else(|| period.first_day());
    }

    fn on_key(&mut self, key: CalendarKey) -> Option<Intent> {
        match key {
            CalendarKey::Move(days) => {
                let cursor = self.cursor?;
                let target = if days >= 0 {
                    cursor.checked_add_days(Days::new(days.unsigned_abs()))
                } else {
                    cursor.checked_sub_days(Days::new(days.unsigned_abs()))
                }?;
                if self.is_visible(target) {
                    self.cursor = Some(target);
                    return None;
                }
                // Leaving the shown pages turns the page, when paging is possible
                self.navigation?;
                self.cursor = Some(target);
                Some(if target > cursor { Intent::TurnNext } else { Intent::TurnPrev })
            }
            CalendarKey::Pick => {
                let cursor = self.cursor?;
                self.mark_of(cursor).is_pickable().then_some(Intent::Pick(cursor))
            }
            CalendarKey::TurnNext => self.navigation.map(|_| Intent::TurnNext),
            CalendarKey::TurnPrev => self.navigation.map(|_| Intent::TurnPrev),
        }
    }

    fn on_click(&mut self, x: u16, y: u16) -> Option<Intent> {
        let layout = self.layout()?;
        match layout.hit_test(x, y, self.week_start)? {
            HitTarget::Prev => Some(Intent::TurnPrev),
            HitTarget::Next => Some(Intent::TurnNext),
            HitTarget::Day(day) => {
                if !self.mark_of(day).is_pickable() {
                    trace!("VIEW: Ignoring click on {}", day);
                    return None;
                }
                self.cursor = Some(day);
                Some(Intent::Pick(day))
            }
        }
    }

    fn on_hover(&mut self, x: u16, y: u16) {
        let hovered = self
            .layout()
            .and_then(|layout| layout.hit_test(x, y, self.week_start))
            .and_then(|target| match target {
                HitTarget::Day(day) => Some(day),
                _ => None,
            });
        self.hover = hovered;
    }
}

/// The day with the same day-of-month in `period`, clamped to its length
fn same_day_in(period: DisplayPeriod, day: NaiveDate) -> Option<NaiveDate> {
    let last = period.last_day()?;
    period.first_day()?.with_day(day.day().min(last.day()))
}

impl CalendarSurface for TuiSurface {
    type Input = Event;

    fn apply_rules(&mut self, rules: &Rules) {
        self.rules = *rules;
    }

    fn render_period(&mut self, period: DisplayPeriod, selection: &Selection) {
        debug!("VIEW: Showing {} ({} page(s))", period, self.pages());
        self.period = Some(period);
        self.selection = *selection;
        self.hover = None;
        self.reseat_cursor();
    }

    fn render_selection(&mut self, selection: &Selection) {
        trace!("VIEW: Highlighting {}", selection);
        self.selection = *selection;
    }

    fn selection_ended(&mut self, range: DateRange) {
        debug!("VIEW: Selection ended at {}", range);
        self.finished = Some(range);
    }

    fn interpret(&mut self, input: Event) -> Option<Intent> {
        match input {
            Event::Key(key) => calendar_key(key).and_then(|key| self.on_key(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
                MouseEventKind::Moved => {
                    self.on_hover(mouse.column, mouse.row);
                    None
                }
                _ => None,
            },
            _ => None,
        }
    }
}
