use chrono::Weekday;
use unicode_width::UnicodeWidthStr;

use crate::picker::{DisplayPeriod, Selection};

/// Placeholder shown in the field when nothing is selected
pub const EMPTY_SELECTION_TEXT: &str = "Select dates";

/// Separator between the two dates of a range
const RANGE_DASH: &str = " – ";

/// Title of a month page, e.g. "June 2024"
pub fn month_title(period: DisplayPeriod) -> String {
    period
        .first_day()
        .map(|day| day.format("%B %Y").to_string())
        .unwrap_or_else(|| period.to_string())
}

/// Two-letter weekday label for the grid header
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// "1 day", "6 days"
pub fn pluralize_days(count: i64) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}

/// Human-readable selection for the field line
///
/// `date_format` is a chrono format string.
pub fn format_selection(selection: &Selection, date_format: &str) -> String {
    match selection {
        Selection::None => EMPTY_SELECTION_TEXT.to_string(),
        Selection::PartialStart(start) => {
            format!("{}{}…", start.format(date_format), RANGE_DASH)
        }
        Selection::Range(range) => format!(
            "{}{}{} ({})",
            range.start().format(date_format),
            RANGE_DASH,
            range.end().format(date_format),
            pluralize_days(range.len_days())
        ),
    }
}

/// Center `text` in `width` columns, truncating when it does not fit
pub fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return truncate(text, width);
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Cut `text` to at most `width` display columns
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
