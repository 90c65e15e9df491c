pub mod commands;
pub mod config;
pub mod formatting;
pub mod host;
pub mod picker;
pub mod tui;

#[cfg(feature = "development")]
pub mod dev;
