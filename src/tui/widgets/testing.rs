/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use crate::config::ThemeConfig;
use super::RenderableWidget;

/// Theme with fixed colours so style assertions stay stable
pub fn test_theme() -> ThemeConfig {
    ThemeConfig {
        selection_fg: Color::Rgb(255, 200, 0), // Gold
        range_fg: Some(Color::Yellow),
        hover_fg: Color::Cyan,
        muted_fg: Color::DarkGray,
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let theme = test_theme();
    widget.render(buf.area, &mut buf, &theme);
    buf
}

/// Convert a buffer to a string representation for snapshot testing
///
/// Each line of the buffer is converted to a string, preserving spacing.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    let mut output = String::new();

    for y in 0..area.height {
        for x in 0..area.width {
            let cell = &buf[(x, y)];
            output.push_str(cell.symbol());
        }
        if y < area.height - 1 {
            output.push('\n');
        }
    }

    output
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    let mut output = String::new();

    for x in 0..area.width {
        let cell = &buf[(x, line)];
        output.push_str(cell.symbol());
    }

    output
}

/// Assert that a buffer line matches the expected string
#[allow(dead_code)]
pub fn assert_buffer_line(buf: &Buffer, line: u16, expected: &str) {
    let actual = buffer_line(buf, line);
    assert_eq!(
        actual, expected,
        "\nLine {} mismatch:\nExpected: {}\nActual:   {}",
        line, expected, actual
    );
}

/// Find the first cell showing `text` on `line` and return its x position
#[allow(dead_code)]
pub fn find_in_line(buf: &Buffer, line: u16, text: &str) -> Option<u16> {
    buffer_line(buf, line).find(text).map(|byte| {
        buffer_line(buf, line)[..byte].chars().count() as u16
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    /// Simple test widget for testing the testing utilities
    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(4, 0)].symbol(), "o");
    }

    #[test]
    fn test_buffer_to_string() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };

        let buf = render_widget(&widget, 5, 2);
        assert_eq!(buffer_to_string(&buf), "Hi   \n     ");
    }

    #[test]
    fn test_buffer_line_and_find() {
        let widget = TestWidget {
            text: "ab – cd".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);
        assert_eq!(buffer_line(&buf, 0), "ab – cd   ");
        assert_eq!(find_in_line(&buf, 0, "cd"), Some(5));
        assert_eq!(find_in_line(&buf, 0, "zz"), None);
    }

    #[test]
    fn test_buffer_text_lines_trims() {
        let widget = TestWidget {
            text: "Hi".to_string(),
        };
        let buf = render_widget(&widget, 5, 2);
        assert_eq!(super::super::buffer_text_lines(&buf), vec!["Hi".to_string(), String::new()]);
    }
}
