//! Interactive picker application
//!
//! The app owns the picker, the popover holding its calendar and the log of
//! callbacks. It is driven one crossterm event at a time and draws into a
//! plain buffer, so it can be exercised without a terminal.

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{Block, Widget},
};
use tracing::{debug, info};

use crate::config::ThemeConfig;
use crate::formatting::{format_selection, pluralize_days};
use crate::host::{new_log, HostEvent, HostLog, PickerOptions};
use crate::picker::{Datepicker, PickerResult, SelectionPayload};

use super::keys::{host_command, HostCommand};
use super::popover::{DocumentListeners, Popover};
use super::surface::TuiSurface;
use super::widgets::{RenderableWidget, SelectionField, StatusBar};

/// What the event loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    picker: Datepicker<TuiSurface>,
    popover: Popover,
    log: HostLog,
    seen: usize,
    theme: ThemeConfig,
    date_format: String,
    message: Option<String>,
    field_area: Rect,
}

impl App {
    pub fn new(options: &PickerOptions, theme: ThemeConfig) -> PickerResult<Self> {
        let log = new_log();
        let picker = options.build(&log)?;
        Ok(Self {
            picker,
            popover: Popover::new(DocumentListeners::new()),
            log,
            seen: 0,
            theme,
            date_format: options.date_format.clone(),
            message: None,
            field_area: Rect::default(),
        })
    }

    pub fn picker(&self) -> &Datepicker<TuiSurface> {
        &self.picker
    }

    pub fn popover(&self) -> &Popover {
        &self.popover
    }

    /// Callbacks fired so far
    pub fn events(&self) -> Vec<HostEvent> {
        self.log.borrow().clone()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Final selection, tagged with the picker name
    pub fn payload(&self) -> SelectionPayload {
        self.picker.payload()
    }

    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => match host_command(key, self.popover.is_expanded()) {
                Some(HostCommand::Quit) => {
                    debug!("ACTION: Quitting");
                    return Control::Quit;
                }
                Some(HostCommand::Reset) => {
                    self.picker.reset();
                }
                Some(HostCommand::Open) => {
                    self.popover.set_expanded(true);
                }
                Some(HostCommand::Close) => {
                    self.popover.handle_escape();
                }
                None if self.popover.is_expanded() => {
                    self.picker.handle_input(event);
                }
                None => {}
            },
            Event::Mouse(mouse) => {
                let clicked = mouse.kind == MouseEventKind::Down(MouseButton::Left);
                if clicked && !self.popover.is_expanded() {
                    if self.field_area.contains(Position::new(mouse.column, mouse.row)) {
                        self.popover.set_expanded(true);
                    }
                    return Control::Continue;
                }
                if clicked && self.popover.handle_click(mouse.column, mouse.row) {
                    return Control::Continue;
                }
                if self.popover.is_expanded() {
                    self.picker.handle_input(event);
                }
            }
            _ => {}
        }

        self.after_dispatch();
        Control::Continue
    }

    /// Update the status message from new callbacks and close on completion
    fn after_dispatch(&mut self) {
        let fresh: Vec<HostEvent> = self.log.borrow()[self.seen..].to_vec();
        self.seen += fresh.len();

        for event in fresh {
            self.message = Some(match event {
                HostEvent::Select { payload } => {
                    format_selection(&payload.selection, &self.date_format)
                }
                HostEvent::SelectionEnd { range } => {
                    info!("Selected {} for '{}'", range, self.picker.name());
                    format!("Selected {}", pluralize_days(range.len_days()))
                }
            });
        }

        if self.picker.surface_mut().take_finished().is_some() {
            self.popover.set_expanded(false);
        }
    }

    pub fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        self.field_area = Rect::new(area.x, area.y, area.width, 1);
        let selection = self.picker.selection();
        let field = SelectionField {
            label: self.picker.name(),
            selection: &selection,
            date_format: &self.date_format,
            expanded: self.popover.is_expanded(),
        };
        field.render(self.field_area, buf, &self.theme);

        if area.height >= 3 {
            let status = if self.popover.is_expanded() {
                StatusBar::expanded()
            } else {
                StatusBar::collapsed()
            };
            let status = match &self.message {
                Some(message) => status.with_message(message.as_str()),
                None => status,
            };
            let status_area = Rect::new(area.x, area.y + area.height - 2, area.width, 2);
            status.render(status_area, buf, &self.theme);
        }

        if self.popover.is_expanded() {
            let (width, height) = self.picker.surface().required_size();
            let popover_area = Rect::new(area.x, area.y + 1, width + 2, height + 2).intersection(area);
            self.popover.set_area(popover_area);

            let block = Block::bordered().border_style(self.theme.muted_style());
            let inner = block.inner(popover_area);
            block.render(popover_area, buf);
            self.picker.surface_mut().draw(inner, buf, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::tui::testing::key;
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;

    fn app() -> App {
        let mut options = PickerOptions::from_config(&PickerConfig::default());
        options.name = "stay".to_string();
        options.anchor = NaiveDate::from_ymd_opt(2024, 6, 1);
        App::new(&options, ThemeConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_collapsed() {
        let app = app();
        assert!(!app.popover().is_expanded());
        assert!(app.events().is_empty());
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_keys_ignored_by_calendar_while_collapsed() {
        let mut app = app();
        app.handle_event(key(KeyCode::PageDown));
        assert_eq!(app.picker().period().to_string(), "2024-06");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(app.handle_event(key(KeyCode::Esc)), Control::Quit);
    }

    #[test]
    fn test_enter_opens_then_escape_closes() {
        let mut app = app();
        assert_eq!(app.handle_event(key(KeyCode::Enter)), Control::Continue);
        assert!(app.popover().is_expanded());
        assert_eq!(app.handle_event(key(KeyCode::Esc)), Control::Continue);
        assert!(!app.popover().is_expanded());
    }
}
