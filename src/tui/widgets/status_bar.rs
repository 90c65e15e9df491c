/// StatusBar widget - keyboard hints and a status message at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator
/// - Bottom line: key hints on the left │ status message on the right

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::tui::widgets::RenderableWidget;

const SEPARATOR: &str = "─";
const VERTICAL: &str = "│";

/// Represents the style of a key hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHintStyle {
    /// Normal hint (default styling)
    Normal,
    /// Important hint (highlighted)
    Important,
    /// Subtle hint (dimmed)
    Subtle,
}

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "Enter", "ESC")
    pub key: String,
    /// The action description (e.g., "Pick", "Close")
    pub action: String,
    /// The visual style for this hint
    pub style: KeyHintStyle,
}

impl KeyHint {
    /// Create a new normal key hint
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style: KeyHintStyle::Normal,
        }
    }

    /// Create a new key hint with a specific style
    pub fn with_style(key: impl Into<String>, action: impl Into<String>, style: KeyHintStyle) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            style,
        }
    }
}

/// Widget for displaying keyboard hints and the latest status message
#[derive(Debug)]
pub struct StatusBar {
    /// Message shown on the right
    pub message: Option<String>,
    /// List of keyboard hints to display
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Hints shown while the calendar is closed
    pub fn collapsed() -> Self {
        Self {
            message: None,
            hints: vec![
                KeyHint::with_style("Enter", "Open", KeyHintStyle::Important),
                KeyHint::new("r", "Reset"),
                KeyHint::with_style("q", "Done", KeyHintStyle::Subtle),
            ],
        }
    }

    /// Hints shown while the calendar is open
    pub fn expanded() -> Self {
        Self {
            message: None,
            hints: vec![
                KeyHint::with_style("Enter", "Pick", KeyHintStyle::Important),
                KeyHint::new("←↑↓→", "Move"),
                KeyHint::new("[ ]", "Month"),
                KeyHint::new("r", "Reset"),
                KeyHint::with_style("ESC", "Close", KeyHintStyle::Subtle),
            ],
        }
    }

    /// Set a status message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set custom keyboard hints
    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    fn hint_style(style: KeyHintStyle, theme: &ThemeConfig) -> Style {
        match style {
            KeyHintStyle::Normal => theme.text_style(),
            KeyHintStyle::Important => Style::default()
                .fg(theme.selection_fg)
                .add_modifier(Modifier::BOLD),
            KeyHintStyle::Subtle => theme.muted_style(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        buf.set_string(
            area.x,
            area.y,
            SEPARATOR.repeat(area.width as usize),
            theme.muted_style(),
        );

        let message = self.message.as_deref().unwrap_or_default();
        let message_width = if message.is_empty() { 0 } else { message.width() as u16 + 2 };
        let bar_position = area.width.saturating_sub(message_width);
        let right_edge = area.x + bar_position;

        let y = area.y + 1;
        let mut x = area.x + 1;
        for hint in &self.hints {
            let key_width = hint.key.width() as u16;
            let needed = key_width + 1 + hint.action.width() as u16 + 2;
            if x + needed > right_edge {
                break;
            }
            buf.set_string(x, y, &hint.key, Self::hint_style(hint.style, theme));
            x += key_width + 1;
            buf.set_string(x, y, &hint.action, theme.muted_style());
            x += hint.action.width() as u16 + 2;
        }

        if message_width > 0 && message_width <= area.width {
            buf.set_string(right_edge, y, VERTICAL, theme.muted_style());
            buf.set_string(right_edge + 2, y, message, theme.text_style());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }

    fn preferred_width(&self) -> Option<u16> {
        None // Adapts to available width
    }
}
