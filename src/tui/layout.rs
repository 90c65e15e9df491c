//! Geometry of the calendar pages
//!
//! Layout is a pure function of the drawn area, the period and the page
//! count, so mouse hits can be resolved without keeping any render output.
//!
//! ```text
//! ‹     June 2024          July 2024     ›
//! Mo Tu We Th Fr Sa Su   Mo Tu We Th Fr Sa Su
//! 27 28 29 30 31  1  2    1  2  3  4  5  6  7
//! ```

use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};

use crate::picker::{month_grid, DisplayPeriod, WeekStart};

/// Columns per day cell ("10" plus a space)
pub const CELL_WIDTH: u16 = 3;

/// Columns of one month page
pub const PAGE_WIDTH: u16 = CELL_WIDTH * 7;

/// Columns between two pages
pub const PAGE_GAP: u16 = 3;

/// Title row + weekday header row
pub const PAGE_HEADER_ROWS: u16 = 2;

/// Header plus the tallest possible month (6 weeks)
pub const PAGE_HEIGHT: u16 = PAGE_HEADER_ROWS + 6;

/// Width needed to show `pages` month pages
pub fn required_width(pages: u8) -> u16 {
    let pages = u16::from(pages.max(1));
    pages * PAGE_WIDTH + (pages - 1) * PAGE_GAP
}

/// Where a page is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    pub period: DisplayPeriod,
    pub area: Rect,
}

/// Computed layout of all pages and navigation arrows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLayout {
    pub pages: Vec<PageSlot>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
}

/// What a screen position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Day(NaiveDate),
    Prev,
    Next,
}

/// Lay out `pages` months starting at `period` inside `area`
///
/// Returns `None` when the area is too small; the caller draws nothing and
/// every hit test misses.
pub fn calendar_layout(
    area: Rect,
    period: DisplayPeriod,
    pages: u8,
    with_navigation: bool,
) -> Option<CalendarLayout> {
    if area.width < required_width(pages) || area.height < PAGE_HEIGHT {
        return None;
    }

    let slots: Vec<PageSlot> = period
        .pages(pages)
        .enumerate()
        .map(|(i, period)| PageSlot {
            period,
            area: Rect::new(
                area.x + i as u16 * (PAGE_WIDTH + PAGE_GAP),
                area.y,
                PAGE_WIDTH,
                PAGE_HEIGHT,
            ),
        })
        .collect();

    let (prev, next) = match (with_navigation, slots.first(), slots.last()) {
        (true, Some(first), Some(last)) => (
            Some(Rect::new(first.area.x, first.area.y, 1, 1)),
            Some(Rect::new(last.area.x + PAGE_WIDTH - 2, last.area.y, 1, 1)),
        ),
        _ => (None, None),
    };

    Some(CalendarLayout {
        pages: slots,
        prev,
        next,
    })
}

impl CalendarLayout {
    /// Resolve a screen position to a navigation arrow or a day cell
    ///
    /// Padding cells of neighbouring months are drawn blank and never hit.
    pub fn hit_test(&self, x: u16, y: u16, week_start: WeekStart) -> Option<HitTarget> {
        let position = Position::new(x, y);
        if self.prev.is_some_and(|r| r.contains(position)) {
            return Some(HitTarget::Prev);
        }
        if self.next.is_some_and(|r| r.contains(position)) {
            return Some(HitTarget::Next);
        }

        let slot = self.pages.iter().find(|slot| slot.area.contains(position))?;
        let row = y - slot.area.y;
        if row < PAGE_HEADER_ROWS {
            return None;
        }
        let week = usize::from(row - PAGE_HEADER_ROWS);
        let column = usize::from((x - slot.area.x) / CELL_WIDTH);

        month_grid(slot.period, week_start)
            .get(week)
            .and_then(|days| days.get(column))
            .filter(|day| DisplayPeriod::of(**day) == slot.period)
            .map(|day| HitTarget::Day(*day))
    }

}
