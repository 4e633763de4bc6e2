//! In-memory tracking of stays built from date toggle events.
//!
//! Dates arrive one at a time. The first date of each pair opens an interval
//! and the second closes it; closed intervals are merged into a canonical
//! set, except that toggling a single day already inside a stay removes that
//! stay instead.

pub mod date;
pub mod error;
pub mod interval;
pub mod merge;
pub mod set;

pub use date::{parse_date, RawToken, ISO_DATE_FORMAT};
pub use error::{Error, Result};
pub use interval::Interval;
pub use merge::merge_spans;
pub use set::{IntervalSet, Outcome};
