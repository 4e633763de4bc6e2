//! Date tokens and strict ISO-8601 parsing.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Format accepted for textual dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single toggle event as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    /// ISO-8601 `YYYY-MM-DD` text, parsed on use.
    Text(String),
    /// An already valid calendar date.
    Resolved(NaiveDate),
}

impl RawToken {
    /// Resolve the token into a calendar date.
    pub fn resolve(&self) -> Result<NaiveDate> {
        match self {
            RawToken::Text(text) => parse_date(text),
            RawToken::Resolved(date) => Ok(*date),
        }
    }
}

impl From<&str> for RawToken {
    fn from(text: &str) -> Self {
        RawToken::Text(text.to_string())
    }
}

impl From<String> for RawToken {
    fn from(text: String) -> Self {
        RawToken::Text(text)
    }
}

impl From<NaiveDate> for RawToken {
    fn from(date: NaiveDate) -> Self {
        RawToken::Resolved(date)
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The shape is checked before chrono sees the input, so signed or
/// five-digit years, single-digit months and padding are all rejected.
pub fn parse_date(token: &str) -> Result<NaiveDate> {
    if !has_iso_shape(token) {
        return Err(Error::date_parse(token, "expected YYYY-MM-DD"));
    }

    NaiveDate::parse_from_str(token, ISO_DATE_FORMAT)
        .map_err(|e| Error::date_parse(token, e.to_string()))
}

fn has_iso_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
