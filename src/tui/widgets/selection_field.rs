/// SelectionField widget - the one-line input showing the current selection
///
/// ```text
/// stay: Jun 05, 2024 – Jun 10, 2024 (6 days) ▾
/// ```

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::formatting::{format_selection, truncate};
use crate::picker::Selection;
use crate::tui::widgets::RenderableWidget;

const COLLAPSED_MARKER: &str = "▾";
const EXPANDED_MARKER: &str = "▴";

#[derive(Debug, Clone)]
pub struct SelectionField<'a> {
    pub label: &'a str,
    pub selection: &'a Selection,
    pub date_format: &'a str,
    pub expanded: bool,
}

impl RenderableWidget for SelectionField<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label = format!("{}: ", self.label);
        let text = format_selection(self.selection, self.date_format);
        let marker = if self.expanded { EXPANDED_MARKER } else { COLLAPSED_MARKER };
        let text_style = if self.selection.is_none() {
            theme.muted_style()
        } else {
            theme.text_style()
        };

        let width = area.width as usize;
        let label = truncate(&label, width);
        buf.set_string(area.x, area.y, &label, Style::default().add_modifier(Modifier::BOLD));

        let mut x = area.x + label.width() as u16;
        let remaining = width.saturating_sub(label.width());
        let text = truncate(&text, remaining.saturating_sub(2));
        buf.set_string(x, area.y, &text, text_style);
        x += text.width() as u16;

        if remaining >= 2 {
            buf.set_string(x + 1, area.y, marker, theme.text_style());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
