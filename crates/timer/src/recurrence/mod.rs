//! Recurrence evaluation for calendar windows.
//!
//! Parses an RFC-2445-style recurrence string into a [`RecurrenceRule`] and
//! answers, for a given calendar date, whether that date is a covered
//! occurrence day. This is a deliberately narrowed adapter over the full
//! recurrence grammar: only the `DAILY` frequency with a per-weekday
//! include/exclude list is supported, and anything outside that projection
//! is rejected at parse time rather than guessed at.

mod parse;
mod rule;

#[cfg(test)]
mod tests;

pub use self::rule::{Frequency, RecurrenceRule};
