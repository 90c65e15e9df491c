//! Headless, scripted picker session
//!
//! Each step is an action in its wire or short form (`next`, `pick:2024-06-05`,
//! `SET_SELECTED:2024-06-01..2024-06-03`, `reset`, ...). Every callback the
//! picker fires is printed as one JSON line.

use anyhow::{Context, Result};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::formatting::format_selection;
use crate::host::{new_log, PickerOptions};
use crate::picker::{Action, Datepicker};
use crate::tui::widgets::buffer_text_lines;
use crate::tui::TuiSurface;

#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub picker: PickerOptions,
    pub steps: Vec<String>,
    /// Append a plain-text drawing of the final calendar
    pub render: bool,
}

pub fn run(options: &ReplayOptions, theme: &ThemeConfig) -> Result<()> {
    for line in replay(options, theme)? {
        println!("{}", line);
    }
    Ok(())
}

/// Output lines of a replay, JSON events first
pub fn replay(options: &ReplayOptions, theme: &ThemeConfig) -> Result<Vec<String>> {
    let log = new_log();
    let mut picker = options.picker.build(&log).context("Invalid picker options")?;

    for step in &options.steps {
        match step.parse::<Action>() {
            Ok(action) => {
                debug!("REPLAY: {}", action);
                picker.dispatch(action);
            }
            Err(e) => warn!("REPLAY: Skipping step '{}': {}", step, e),
        }
    }

    let mut lines = log
        .borrow()
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;

    if options.render {
        lines.extend(render_text(&mut picker, &options.picker.date_format, theme));
    }
    Ok(lines)
}

/// The field line followed by the calendar pages as plain text
fn render_text(
    picker: &mut Datepicker<TuiSurface>,
    date_format: &str,
    theme: &ThemeConfig,
) -> Vec<String> {
    let (width, height) = picker.surface().required_size();
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    picker.surface_mut().draw(buf.area, &mut buf, theme);

    let mut lines = vec![format!(
        "{}: {}",
        picker.name(),
        format_selection(&picker.selection(), date_format)
    )];
    lines.extend(buffer_text_lines(&buf));
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::picker::Selection;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn options(steps: &[&str]) -> ReplayOptions {
        let mut picker = PickerOptions::from_config(&PickerConfig::default());
        picker.name = "stay".to_string();
        picker.anchor = Some(date(2024, 6, 1));
        picker.months_shown = 1;
        picker.date_format = "%Y-%m-%d".to_string();
        ReplayOptions {
            picker,
            steps: steps.iter().map(|s| s.to_string()).collect(),
            render: false,
        }
    }

    #[test]
    fn test_replay_prints_callbacks_as_json_lines() {
        let lines = replay(
            &options(&["pick:2024-06-10", "pick:2024-06-05"]),
            &ThemeConfig::default(),
        )
        .unwrap();
        assert_eq!(
            lines,
            vec![
                r#"{"event":"select","payload":{"stay":{"start":"2024-06-10","end":null}}}"#,
                r#"{"event":"select","payload":{"stay":{"start":"2024-06-05","end":"2024-06-10"}}}"#,
                r#"{"event":"selection_end","range":{"start":"2024-06-05","end":"2024-06-10"}}"#,
            ]
        );
    }

    #[test]
    fn test_unknown_steps_are_skipped() {
        let lines = replay(
            &options(&["jump", "pick:not-a-date", "next", "SELECT_DAY:2024-07-04"]),
            &ThemeConfig::default(),
        )
        .unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#""start":"2024-07-04""#));
    }

    #[test]
    fn test_navigation_alone_prints_nothing() {
        let lines = replay(&options(&["next", "next", "prev"]), &ThemeConfig::default()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_reset_of_seeded_selection() {
        let mut opts = options(&["reset", "reset"]);
        opts.picker.selected = Selection::range(date(2024, 1, 1), date(2024, 1, 3));
        let lines = replay(&opts, &ThemeConfig::default()).unwrap();
        assert_eq!(lines, vec![r#"{"event":"select","payload":{"stay":null}}"#]);
    }

    #[test]
    fn test_render_appends_calendar() {
        let mut opts = options(&["set:2024-06-05..2024-06-10"]);
        opts.render = true;
        let lines = replay(&opts, &ThemeConfig::default()).unwrap();

        assert_eq!(lines.len(), 1 + 1 + 7);
        assert_eq!(lines[1], "stay: 2024-06-05 – 2024-06-10 (6 days)");
        assert_eq!(lines[2], "‹     June 2024    ›");
        assert_eq!(lines[3], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[4], "                1  2");
        assert_eq!(lines[8], "24 25 26 27 28 29 30");
    }

    #[test]
    fn test_invalid_months_is_an_error() {
        let mut opts = options(&[]);
        opts.picker.months_shown = 0;
        let err = replay(&opts, &ThemeConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("Unsupported number of months shown: 0"));
    }
}
