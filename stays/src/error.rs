//! Error types for the stays core.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or toggling intervals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token is not `YYYY-MM-DD` or names a date that does not exist.
    #[error("Invalid date '{token}': {reason}")]
    DateParse { token: String, reason: String },

    /// Both endpoints are required but the interval has no end date.
    #[error("Interval has no end date")]
    IncompleteRange,

    /// A construction sequence contained a missing token.
    #[error("Missing date token at position {index}")]
    NullToken { index: usize },
}

impl Error {
    pub(crate) fn date_parse(token: &str, reason: impl Into<String>) -> Self {
        Error::DateParse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}
