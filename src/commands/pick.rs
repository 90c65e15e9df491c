use anyhow::{Context, Result};

use crate::config::ThemeConfig;
use crate::host::PickerOptions;
use crate::tui::{self, App};

/// Run the interactive picker and print the final selection as JSON
pub fn run(options: &PickerOptions, theme: ThemeConfig) -> Result<()> {
    let app = App::new(options, theme).context("Invalid picker options")?;
    let payload = tui::run(app).context("Terminal error")?;
    tracing::info!("Leaving picker with {}", payload.selection);
    println!("{}", serde_json::to_string(&payload)?);
    Ok(())
}
