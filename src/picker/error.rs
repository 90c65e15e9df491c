use thiserror::Error;

/// Errors raised while parsing picker input (dates, ranges, periods, script steps)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid range '{0}' (expected YYYY-MM-DD..YYYY-MM-DD)")]
    InvalidRange(String),

    #[error("Invalid period '{0}' (expected YYYY-MM)")]
    InvalidPeriod(String),

    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Action '{0}' requires an argument")]
    MissingArgument(String),

    #[error("Unsupported number of months shown: {0} (expected 1 or 2)")]
    InvalidMonthsShown(u8),
}

/// Result type for picker operations
pub type PickerResult<T> = Result<T, PickerError>;
