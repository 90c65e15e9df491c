/// Keyboard event mapping
///
/// Keys are handled in two layers. Host keys (quit, reset, opening and
/// closing the popover) are resolved by the app first; whatever is left goes
/// to the calendar surface while the popover is expanded.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

/// Calendar-level key meaning, interpreted by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKey {
    /// Move the cursor by a number of days
    Move(i64),
    TurnNext,
    TurnPrev,
    Pick,
}

/// App-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    Reset,
    Open,
    Close,
}

fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

/// Map a key to a calendar key while the grid has focus
pub fn calendar_key(key: KeyEvent) -> Option<CalendarKey> {
    if !is_press(&key) {
        return None;
    }
    let mapped = match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(CalendarKey::Move(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(CalendarKey::Move(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(CalendarKey::Move(-7)),
        KeyCode::Down | KeyCode::Char('j') => Some(CalendarKey::Move(7)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(CalendarKey::Pick),
        KeyCode::PageDown | KeyCode::Char(']') | KeyCode::Char('n') => Some(CalendarKey::TurnNext),
        KeyCode::PageUp | KeyCode::Char('[') | KeyCode::Char('p') => Some(CalendarKey::TurnPrev),
        _ => None,
    };
    trace!("KEY: {:?} -> {:?}", key.code, mapped);
    mapped
}

/// Map a key to a host command
///
/// `expanded` tells whether the calendar popover is currently open; Escape
/// closes it when open and quits otherwise.
pub fn host_command(key: KeyEvent, expanded: bool) -> Option<HostCommand> {
    if !is_press(&key) {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(HostCommand::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(HostCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostCommand::Reset),
        KeyCode::Esc if expanded => {
            debug!("KEY: ESC pressed with calendar open - closing");
            Some(HostCommand::Close)
        }
        KeyCode::Esc => Some(HostCommand::Quit),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('o') if !expanded => {
            debug!("KEY: Opening calendar");
            Some(HostCommand::Open)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move_cursor() {
        assert_eq!(calendar_key(key(KeyCode::Left)), Some(CalendarKey::Move(-1)));
        assert_eq!(calendar_key(key(KeyCode::Right)), Some(CalendarKey::Move(1)));
        assert_eq!(calendar_key(key(KeyCode::Up)), Some(CalendarKey::Move(-7)));
        assert_eq!(calendar_key(key(KeyCode::Down)), Some(CalendarKey::Move(7)));
    }

    #[test]
    fn test_paging_keys() {
        assert_eq!(calendar_key(key(KeyCode::PageDown)), Some(CalendarKey::TurnNext));
        assert_eq!(calendar_key(key(KeyCode::Char(']'))), Some(CalendarKey::TurnNext));
        assert_eq!(calendar_key(key(KeyCode::PageUp)), Some(CalendarKey::TurnPrev));
        assert_eq!(calendar_key(key(KeyCode::Char('p'))), Some(CalendarKey::TurnPrev));
    }

    #[test]
    fn test_pick_keys() {
        assert_eq!(calendar_key(key(KeyCode::Enter)), Some(CalendarKey::Pick));
        assert_eq!(calendar_key(key(KeyCode::Char(' '))), Some(CalendarKey::Pick));
        assert_eq!(calendar_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(calendar_key(release), None);
        assert_eq!(host_command(release, false), None);
    }

    #[test]
    fn test_escape_depends_on_popover() {
        assert_eq!(host_command(key(KeyCode::Esc), true), Some(HostCommand::Close));
        assert_eq!(host_command(key(KeyCode::Esc), false), Some(HostCommand::Quit));
    }

    #[test]
    fn test_enter_opens_only_when_closed() {
        assert_eq!(host_command(key(KeyCode::Enter), false), Some(HostCommand::Open));
        assert_eq!(host_command(key(KeyCode::Enter), true), None);
    }

    #[test]
    fn test_global_commands() {
        assert_eq!(host_command(key(KeyCode::Char('q')), true), Some(HostCommand::Quit));
        assert_eq!(host_command(key(KeyCode::Char('r')), false), Some(HostCommand::Reset));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(host_command(ctrl_c, true), Some(HostCommand::Quit));
    }
}
