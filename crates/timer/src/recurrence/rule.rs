//! [`RecurrenceRule`] — parsed recurrence with a covered-day predicate.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::TimerError;

use super::parse::parse_rule;

/// Recurrence frequency. Only daily recurrence is supported; other
/// frequencies are rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
}

/// A parsed recurrence rule.
///
/// `by_day` maps each listed weekday to its ordinal flag: `0` marks an
/// included occurrence day, `-1` an explicitly excluded one. A weekday
/// absent from a present list is excluded by default. A rule without any
/// `BYDAY` part recurs on every day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub(super) frequency: Frequency,
    pub(super) by_day: Option<HashMap<Weekday, i32>>,
}

impl RecurrenceRule {
    /// Parse a recurrence string (e.g. `FREQ=DAILY;BYDAY=MO,-1TU,WE`).
    ///
    /// An optional `RRULE:` prefix is accepted. Malformed input, an
    /// unsupported frequency, or an ordinal other than `0`/`-1` fails with
    /// [`TimerError::InvalidRecurrenceExpression`].
    pub fn parse(input: &str) -> Result<Self, TimerError> {
        parse_rule(input)
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Whether `day` is a covered occurrence day, independent of any
    /// time-of-day bounds. Pure: same inputs, same answer.
    pub fn covers(&self, day: NaiveDate) -> bool {
        match &self.by_day {
            // Daily recurrence with no weekday list recurs every day.
            None => true,
            Some(by_day) => by_day.get(&day.weekday()).is_some_and(|&ord| ord >= 0),
        }
    }
}
