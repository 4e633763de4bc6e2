//! A single stay: a calendar date range with an optional end.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Error, RawToken, Result};

/// A date range with inclusive bounds.
///
/// An interval without an end date is "open": it has been started by a toggle
/// event and is waiting for the event that closes it. Values never change
/// after construction; [`Interval::close`] and [`Interval::normalize`] return
/// new intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl Interval {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build an open interval from a date or `YYYY-MM-DD` token.
    pub fn open(start: impl Into<RawToken>) -> Result<Self> {
        Ok(Self::new(start.into().resolve()?, None))
    }

    /// Build a closed interval. Endpoints are kept in the given order.
    pub fn closed(start: impl Into<RawToken>, end: impl Into<RawToken>) -> Result<Self> {
        let start = start.into().resolve()?;
        let end = end.into().resolve()?;
        Ok(Self::new(start, Some(end)))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Return a copy of this interval ending at `end`.
    pub fn close(&self, end: NaiveDate) -> Self {
        Self::new(self.start, Some(end))
    }

    /// Return the interval with its endpoints in chronological order.
    pub fn normalize(&self) -> Result<Self> {
        let (start, end) = self.bounds()?;
        if end < start {
            Ok(Self::new(end, Some(start)))
        } else {
            Ok(*self)
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.end == Some(self.start)
    }

    /// Inclusive bounds check.
    pub fn contains(&self, date: NaiveDate) -> Result<bool> {
        let (start, end) = self.bounds()?;
        Ok(start <= date && date <= end)
    }

    /// Number of calendar days covered, counting both endpoints.
    pub fn days(&self) -> Result<i64> {
        let (start, end) = self.normalize()?.bounds()?;
        Ok(end.signed_duration_since(start).num_days() + 1)
    }

    fn bounds(&self) -> Result<(NaiveDate, NaiveDate)> {
        self.end
            .map(|end| (self.start, end))
            .ok_or(Error::IncompleteRange)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..{}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}
