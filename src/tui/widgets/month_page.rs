/// MonthPage widget - one month of the calendar grid
///
/// Renders the month title (with optional navigation arrows), the weekday
/// header and one row per week. Days of neighbouring months are left blank;
/// days outside the selectable window are dimmed.

use chrono::{Datelike, NaiveDate};
use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};

use crate::config::ThemeConfig;
use crate::formatting::{center, month_title, weekday_label};
use crate::picker::{classify_day, month_grid, DateBounds, DayMark, DisplayPeriod, Selection, WeekStart};
use crate::tui::layout::{CELL_WIDTH, PAGE_HEADER_ROWS, PAGE_WIDTH};
use crate::tui::widgets::RenderableWidget;

pub const PREV_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";

#[derive(Debug, Clone)]
pub struct MonthPage<'a> {
    pub period: DisplayPeriod,
    pub week_start: WeekStart,
    pub selection: &'a Selection,
    /// End of the hover preview while only a start is picked
    pub preview: Option<NaiveDate>,
    pub cursor: Option<NaiveDate>,
    pub bounds: &'a DateBounds,
    pub show_prev: bool,
    pub show_next: bool,
}

impl MonthPage<'_> {
    fn day_style(&self, mark: DayMark, theme: &ThemeConfig) -> Style {
        match mark {
            DayMark::OutOfRange => theme.muted_style(),
            DayMark::Selectable => theme.text_style(),
            DayMark::SelectedStart | DayMark::SelectedEnd => theme.selected_style(),
            DayMark::InRange => theme.range_style(),
            DayMark::Hovered => theme.hover_style(),
        }
    }
}

impl RenderableWidget for MonthPage<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let weeks = month_grid(self.period, self.week_start);
        if area.width < PAGE_WIDTH || area.height < PAGE_HEADER_ROWS + weeks.len() as u16 {
            return;
        }

        let title = center(&month_title(self.period), PAGE_WIDTH as usize);
        buf.set_string(area.x, area.y, &title, Style::default().add_modifier(Modifier::BOLD));
        if self.show_prev {
            buf.set_string(area.x, area.y, PREV_ARROW, theme.text_style());
        }
        if self.show_next {
            buf.set_string(area.x + PAGE_WIDTH - 2, area.y, NEXT_ARROW, theme.text_style());
        }

        for (column, weekday) in self.week_start.weekdays().iter().enumerate() {
            buf.set_string(
                area.x + column as u16 * CELL_WIDTH,
                area.y + 1,
                weekday_label(*weekday),
                theme.muted_style(),
            );
        }

        for (row, week) in weeks.iter().enumerate() {
            let y = area.y + PAGE_HEADER_ROWS + row as u16;
            for (column, day) in week.iter().enumerate() {
                if DisplayPeriod::of(*day) != self.period {
                    continue;
                }
                let mark = classify_day(*day, self.period, self.selection, self.preview, self.bounds);
                let mut style = self.day_style(mark, theme);
                if self.cursor == Some(*day) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                buf.set_string(
                    area.x + column as u16 * CELL_WIDTH,
                    y,
                    format!("{:>2}", day.day()),
                    style,
                );
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(PAGE_HEADER_ROWS + month_grid(self.period, self.week_start).len() as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(PAGE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SELECTION_STYLE_MODIFIER;
    use crate::tui::widgets::testing::*;
    use ratatui::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn page<'a>(selection: &'a Selection, bounds: &'a DateBounds) -> MonthPage<'a> {
        MonthPage {
            period: DisplayPeriod::new(2024, 6).unwrap(),
            week_start: WeekStart::Monday,
            selection,
            preview: None,
            cursor: None,
            bounds,
            show_prev: true,
            show_next: true,
        }
    }

    #[test]
    fn test_month_page_layout() {
        let selection = Selection::None;
        let bounds = DateBounds::unbounded();
        let buf = render_widget(&page(&selection, &bounds), 21, 7);

        assert_buffer_line(&buf, 0, "‹     June 2024    › ");
        assert_buffer_line(&buf, 1, "Mo Tu We Th Fr Sa Su ");
        assert_buffer_line(&buf, 2, "                1  2 ");
        assert_buffer_line(&buf, 3, " 3  4  5  6  7  8  9 ");
        assert_buffer_line(&buf, 6, "24 25 26 27 28 29 30 ");
    }

    #[test]
    fn test_month_page_sunday_start_without_arrows() {
        let selection = Selection::None;
        let bounds = DateBounds::unbounded();
        let mut widget = page(&selection, &bounds);
        widget.week_start = WeekStart::Sunday;
        widget.show_prev = false;
        widget.show_next = false;
        let buf = render_widget(&widget, 21, 8);

        assert_buffer_line(&buf, 0, "      June 2024      ");
        assert_buffer_line(&buf, 1, "Su Mo Tu We Th Fr Sa ");
        assert_buffer_line(&buf, 7, "30                   ");
        assert_eq!(widget.preferred_height(), Some(8));
    }

    #[test]
    fn test_month_page_range_styles() {
        let selection = Selection::range(date(2024, 6, 5), date(2024, 6, 10));
        let bounds = DateBounds::unbounded();
        let buf = render_widget(&page(&selection, &bounds), 21, 7);
        let theme = test_theme();

        // Wednesday June 5 is column 2 of the second week row
        let start = &buf[(7, 3)];
        assert_eq!(start.symbol(), "5");
        assert_eq!(start.fg, Color::Rgb(255, 200, 0));
        assert!(start.modifier.contains(SELECTION_STYLE_MODIFIER));

        // Friday June 7 is inside the range
        let inside = &buf[(13, 3)];
        assert_eq!(inside.symbol(), "7");
        assert_eq!(inside.fg, theme.range_fg());

        // Tuesday June 4 is outside
        assert_eq!(buf[(4, 3)].fg, Color::Reset);
    }

    #[test]
    fn test_month_page_dims_out_of_bounds_days() {
        let selection = Selection::None;
        let bounds = DateBounds::new(Some(date(2024, 6, 10)), None);
        let buf = render_widget(&page(&selection, &bounds), 21, 7);

        assert_eq!(buf[(1, 3)].fg, Color::DarkGray); // June 3
        assert_eq!(buf[(1, 4)].fg, Color::Reset); // June 10
    }

    #[test]
    fn test_month_page_cursor_and_preview() {
        let selection = Selection::PartialStart(date(2024, 6, 3));
        let bounds = DateBounds::unbounded();
        let mut widget = page(&selection, &bounds);
        widget.preview = Some(date(2024, 6, 5));
        widget.cursor = Some(date(2024, 6, 5));
        let buf = render_widget(&widget, 21, 7);

        assert_eq!(buf[(4, 3)].fg, Color::Cyan); // June 4 previewed
        assert!(buf[(7, 3)].modifier.contains(Modifier::BOLD)); // cursor on June 5
        assert_eq!(buf[(10, 3)].fg, Color::Reset); // June 6 untouched
    }

    #[test]
    fn test_month_page_too_small_draws_nothing() {
        let selection = Selection::None;
        let bounds = DateBounds::unbounded();
        let buf = render_widget(&page(&selection, &bounds), 20, 7);
        assert_buffer_line(&buf, 0, "                    ");
    }
}
