/// Screenshot utilities for capturing terminal output
///
/// Screenshots are plain text files, one line per terminal row, with
/// trailing blanks trimmed.

use std::fs::File;
use std::io::{self, Write};
use ratatui::buffer::Buffer;

use crate::tui::widgets::buffer_text_lines;

/// Timestamped file name in the current directory
pub fn screenshot_filename() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("{}-screenshot-{}.txt", env!("CARGO_PKG_NAME"), timestamp)
}

/// Save a buffer to a text file
pub fn save_buffer_screenshot(buffer: &Buffer, filename: &str) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for line in buffer_text_lines(buffer) {
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};
    use std::fs;

    #[test]
    fn test_save_buffer_screenshot_trims_lines() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        buf.set_string(0, 0, "June", Style::default());
        let path = std::env::temp_dir().join("datepicker-screenshot-test.txt");
        let path = path.to_string_lossy().to_string();

        save_buffer_screenshot(&buf, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "June\n\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_screenshot_filename_prefix() {
        assert!(screenshot_filename().starts_with("datepicker-screenshot-"));
    }
}
