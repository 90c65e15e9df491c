//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::picker::{CalendarSurface, DisplayPeriod, Rules, Selection};
use super::surface::{SurfaceOptions, TuiSurface};

/// Key press event without modifiers
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Left click at a screen position
pub fn click(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Mouse movement to a screen position
pub fn mouse_move(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Moved, column, row)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Surface that went through the same steps a controller mount performs
pub fn mounted_surface(
    options: SurfaceOptions,
    rules: Rules,
    period: DisplayPeriod,
    selection: Selection,
) -> TuiSurface {
    let mut surface = TuiSurface::new(options);
    surface.apply_rules(&rules);
    surface.render_period(period, &selection);
    surface
}
