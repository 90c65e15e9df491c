//! Rendering surface contract
//!
//! A surface draws month pages and turns raw user input into [`Intent`]s.
//! It never decides the period or the selection itself: it only shows what
//! the controller last told it, plus purely presentational state such as a
//! keyboard cursor or mouse hover.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Deserialize;

use super::model::Rules;
use super::types::{DateBounds, DateRange, DisplayPeriod, Selection};

/// Higher-level events raised by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TurnNext,
    TurnPrev,
    /// A day cell was activated (click or keyboard)
    Pick(NaiveDate),
    /// The surface resolved a whole selection itself
    SelectRange(Selection),
}

/// Rendering surface driven by the controller
pub trait CalendarSurface {
    /// Raw input the surface understands (terminal events, test intents, ...)
    type Input;

    /// Receive the picker's rules once, before the first render
    fn apply_rules(&mut self, _rules: &Rules) {}

    /// Redraw the day grid for a new period, selection included
    fn render_period(&mut self, period: DisplayPeriod, selection: &Selection);

    /// Repaint selection highlighting over the days currently shown
    fn render_selection(&mut self, selection: &Selection);

    /// A range was just completed by the user
    fn selection_ended(&mut self, _range: DateRange) {}

    /// Translate raw input into an intent, if it means anything
    fn interpret(&mut self, input: Self::Input) -> Option<Intent>;
}

/// Visual state of a single day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    /// Padding day from a neighbouring month, or outside the selectable window
    OutOfRange,
    Selectable,
    SelectedStart,
    SelectedEnd,
    InRange,
    /// Between the partial start and the hovered day
    Hovered,
}

impl DayMark {
    pub fn is_pickable(&self) -> bool {
        !matches!(self, Self::OutOfRange)
    }
}

/// First column of the week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn first_weekday(&self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Sunday => Weekday::Sun,
        }
    }

    /// Weekdays in column order
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut days = [self.first_weekday(); 7];
        for i in 1..7 {
            days[i] = days[i - 1].succ();
        }
        days
    }

    /// Column index of `weekday` in the grid
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.first_weekday().num_days_from_monday()) % 7
    }
}

/// Weeks covering `period`, padded with days of the neighbouring months
///
/// Returns an empty grid for periods chrono cannot represent.
pub fn month_grid(period: DisplayPeriod, week_start: WeekStart) -> Vec<[NaiveDate; 7]> {
    let (Some(first), Some(last)) = (period.first_day(), period.last_day()) else {
        return Vec::new();
    };
    let lead = week_start.column_of(first.weekday());
    let Some(mut cursor) = first.checked_sub_days(Days::new(u64::from(lead))) else {
        return Vec::new();
    };

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = [cursor; 7];
        for (slot, day) in week.iter_mut().zip(cursor.iter_days()) {
            *slot = day;
        }
        weeks.push(week);
        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    weeks
}

/// Classify a day cell on the page showing `page`
pub fn classify_day(
    day: NaiveDate,
    page: DisplayPeriod,
    selection: &Selection,
    hover: Option<NaiveDate>,
    bounds: &DateBounds,
) -> DayMark {
    if DisplayPeriod::of(day) != page || !bounds.contains(day) {
        return DayMark::OutOfRange;
    }

    match selection {
        Selection::None => DayMark::Selectable,
        Selection::PartialStart(start) => {
            if day == *start {
                DayMark::SelectedStart
            } else if hover.is_some_and(|h| DateRange::new(*start, h).contains(day)) {
                DayMark::Hovered
            } else {
                DayMark::Selectable
            }
        }
        Selection::Range(range) => {
            if day == range.start() {
                DayMark::SelectedStart
            } else if day == range.end() {
                DayMark::SelectedEnd
            } else if range.contains(day) {
                DayMark::InRange
            } else {
                DayMark::Selectable
            }
        }
    }
}
