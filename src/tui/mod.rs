// Module declarations
pub mod app;
pub mod keys;
pub mod layout;
pub mod popover;
pub mod surface;
pub mod widgets;

#[cfg(test)]
pub mod testing;


pub use app::{App, Control};
pub use popover::{DocumentListeners, ListenerGuard, ListenerKind, Popover};
pub use surface::{NavControls, SurfaceOptions, TuiSurface};

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::picker::SelectionPayload;

/// Main entry point for interactive mode
///
/// Returns the selection the user left the picker with.
pub fn run(mut app: App) -> Result<SelectionPayload, io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(app.payload())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), io::Error> {
    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        let completed = terminal.draw(|f| {
            let area = f.area();
            app.draw(area, f.buffer_mut());
        })?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let filename = crate::dev::screenshot::screenshot_filename();
            if let Err(e) = crate::dev::screenshot::save_buffer_screenshot(completed.buffer, &filename) {
                tracing::error!("Failed to save screenshot: {}", e);
            } else {
                tracing::info!("Screenshot saved to {}", filename);
            }
        }
        #[cfg(not(feature = "development"))]
        let _ = completed;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let event = event::read()?;

        #[cfg(feature = "development")]
        {
            use crossterm::event::{Event, KeyCode, KeyModifiers};
            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                    tracing::info!("Screenshot requested via Shift-S");
                    screenshot_requested = true;
                    continue;
                }
            }
        }

        if app.handle_event(event) == Control::Quit {
            tracing::debug!("ACTION: Leaving event loop");
            break;
        }
    }

    Ok(())
}
