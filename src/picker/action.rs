use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::error::PickerError;
use super::types::{parse_date, Selection};

/// Actions accepted by the picker controller
///
/// Every change to the calendar state goes through one of these. They are
/// raised by the surface (via the facade) or by the host page:
/// - `TurnNext` / `TurnPrev` move the displayed period only
/// - `SetSelected` overwrites the selection programmatically (reset, controlled updates)
/// - `SelectDay` is a user day pick, advancing the two-click range selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TurnNext,
    TurnPrev,
    SetSelected(Selection),
    SelectDay(NaiveDate),
}

impl Action {
    /// Wire name of the action, as used in scripts and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnNext => "TURN_NEXT",
            Self::TurnPrev => "TURN_PREV",
            Self::SetSelected(_) => "SET_SELECTED",
            Self::SelectDay(_) => "SELECT_DAY",
        }
    }

    /// Returns true for actions that only move the displayed period
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::TurnNext | Self::TurnPrev)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TurnNext | Self::TurnPrev => write!(f, "{}", self.name()),
            Self::SetSelected(selection) => write!(f, "{}:{}", self.name(), selection),
            Self::SelectDay(day) => write!(f, "{}:{}", self.name(), day.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for Action {
    type Err = PickerError;

    /// Parse a script step
    ///
    /// Accepts both wire names and short aliases:
    /// `TURN_NEXT`/`next`, `TURN_PREV`/`prev`, `SELECT_DAY:<date>`/`pick:<date>`,
    /// `SET_SELECTED:<selection>`/`set:<selection>` and `reset`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, argument) = match s.split_once(':') {
            Some((keyword, argument)) => (keyword, Some(argument)),
            None => (s, None),
        };
        match keyword.to_ascii_lowercase().as_str() {
            "turn_next" | "next" => Ok(Self::TurnNext),
            "turn_prev" | "prev" => Ok(Self::TurnPrev),
            "reset" => Ok(Self::SetSelected(Selection::None)),
            "select_day" | "pick" => Ok(Self::SelectDay(parse_date(require(argument, keyword)?)?)),
            "set_selected" | "set" => Ok(Self::SetSelected(require(argument, keyword)?.parse()?)),
            _ => Err(PickerError::UnknownAction(s.to_string())),
        }
    }
}

/// The argument after `keyword:`, which the step cannot do without
fn require<'a>(argument: Option<&'a str>, keyword: &str) -> Result<&'a str, PickerError> {
    argument.ok_or_else(|| PickerError::MissingArgument(keyword.to_string()))
}
