/// Widget-based rendering for the picker
///
/// Widgets render themselves directly into a ratatui Buffer, which keeps
/// them testable against plain buffers without a terminal.

#[cfg(test)]
pub mod testing;

pub mod month_page;
pub use month_page::MonthPage;

pub mod selection_field;
pub use selection_field::SelectionField;

pub mod status_bar;
pub use status_bar::{KeyHint, KeyHintStyle, StatusBar};

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `theme` - Colours used for selection highlighting
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Text lines of a buffer, trailing blanks trimmed
///
/// Used to print a rendered calendar outside the terminal.
pub fn buffer_text_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let line: String = (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}
