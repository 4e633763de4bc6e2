//! The toggle engine that folds date events into a canonical set of stays.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::merge::merge_spans;
use crate::{Error, Interval, RawToken, Result};

/// Whether a toggle pair is half way through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ToggleState {
    #[default]
    Idle,
    Pending(Interval),
}

/// What a single [`IntervalSet::add_date`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new interval was opened and is waiting for its end date.
    Opened(Interval),
    /// The closed interval was committed and the set re-merged.
    Committed(Interval),
    /// A single-day toggle landed on a committed interval, removing it.
    Cancelled { day: NaiveDate, removed: Interval },
}

/// A set of stays built from alternating open/close date events.
///
/// Committed intervals are always closed, sorted by start date, and pairwise
/// disjoint and non-adjacent. The interval currently being opened is held
/// apart from them until its closing event arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
    state: ToggleState,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by feeding every token through [`IntervalSet::add_date`].
    ///
    /// Missing tokens are rejected before any token is processed.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
        T: Into<RawToken>,
    {
        let tokens: Vec<Option<T>> = tokens.into_iter().collect();
        if let Some(index) = tokens.iter().position(Option::is_none) {
            return Err(Error::NullToken { index });
        }

        let mut set = Self::new();
        for token in tokens.into_iter().flatten() {
            set.add_date(token)?;
        }
        Ok(set)
    }

    /// Build a set from tokens that are all present.
    pub fn from_dates<I, T>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<RawToken>,
    {
        Self::from_tokens(dates.into_iter().map(Some))
    }

    /// Feed one toggle event.
    ///
    /// The first event of a pair opens an interval, the second closes it. On
    /// error the set is left exactly as it was.
    pub fn add_date(&mut self, token: impl Into<RawToken>) -> Result<Outcome> {
        let date = token.into().resolve()?;

        match self.state {
            ToggleState::Idle => {
                let opened = Interval::new(date, None);
                self.state = ToggleState::Pending(opened);
                debug!(start = %date, "Opened interval");
                Ok(Outcome::Opened(opened))
            }
            ToggleState::Pending(open) => {
                let closed = open.close(date).normalize()?;
                self.state = ToggleState::Idle;
                Ok(self.resolve_pending(closed))
            }
        }
    }

    fn resolve_pending(&mut self, closed: Interval) -> Outcome {
        if closed.is_single_day() {
            let day = closed.start();
            if let Some(index) = self.position_containing(day) {
                let removed = self.intervals.remove(index);
                debug!(day = %day, removed = %removed, "Cancelled interval");
                return Outcome::Cancelled { day, removed };
            }
        }

        self.intervals.push(closed);
        self.merge_all();
        debug!(
            interval = %closed,
            committed = self.intervals.len(),
            "Committed interval"
        );
        Outcome::Committed(closed)
    }

    /// Sort and coalesce the committed intervals. Running it twice is the
    /// same as running it once.
    pub fn merge_all(&mut self) {
        let spans = self
            .intervals
            .iter()
            .filter_map(|interval| interval.end().map(|end| (interval.start(), end)));
        self.intervals = merge_spans(spans);
    }

    // First match in start order. Committed intervals never overlap, so a
    // second match means the set has been corrupted.
    fn position_containing(&self, date: NaiveDate) -> Option<usize> {
        let mut matches = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, interval)| interval.contains(date).unwrap_or(false))
            .map(|(index, _)| index);

        let first = matches.next();
        debug_assert!(matches.next().is_none(), "committed intervals overlap");
        first
    }

    /// Committed intervals, sorted by start date.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, ToggleState::Pending(_))
    }

    /// The open interval waiting for its closing event, if any.
    pub fn pending(&self) -> Option<&Interval> {
        match &self.state {
            ToggleState::Pending(interval) => Some(interval),
            ToggleState::Idle => None,
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Whether `date` falls inside a committed interval.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.position_containing(date).is_some()
    }

    /// Total number of days covered by committed intervals.
    pub fn total_days(&self) -> i64 {
        self.intervals
            .iter()
            .filter_map(|interval| interval.days().ok())
            .sum()
    }
}

impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            intervals: &'a [Interval],
            pending: Option<&'a Interval>,
        }

        Snapshot {
            intervals: &self.intervals,
            pending: self.pending(),
        }
        .serialize(serializer)
    }
}
