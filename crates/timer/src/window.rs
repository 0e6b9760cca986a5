//! [`Window`] — one configured activation interval.
//!
//! Built once from a calendar entry when the rule starts and immutable for
//! the lifetime of a run. Misconfiguration (unparseable recurrence, bounds
//! out of order, missing bounds on a timed window) degrades the window to
//! permanently inactive at construction, logged once; it never activates
//! and never affects sibling windows.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::TimerError;
use crate::recurrence::RecurrenceRule;
use crate::schema::CalendarEntry;

/// Why a window was degraded to permanently inactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    InvalidRecurrence(String),
    InvalidBounds(String),
}

impl std::fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecurrence(msg) => write!(f, "invalid recurrence: {msg}"),
            Self::InvalidBounds(msg) => write!(f, "invalid bounds: {msg}"),
        }
    }
}

/// One activation window: optional recurrence + start/end + all-day flag.
#[derive(Debug, Clone)]
pub struct Window {
    id: String,
    all_day: bool,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    recurrence: Option<RecurrenceRule>,
    degraded: Option<DegradeReason>,
}

impl Window {
    /// Build a window from a configuration entry. Never fails: bad
    /// configuration yields a degraded (permanently inactive) window and a
    /// single warning here, not a per-tick error stream.
    pub fn from_entry(index: usize, entry: &CalendarEntry) -> Self {
        let id = format!("entry-{index}");

        let (recurrence, mut degraded) = match entry.recurrence_rule.as_deref() {
            None => (None, None),
            Some(raw) => match RecurrenceRule::parse(raw) {
                Ok(rule) => (Some(rule), None),
                Err(e) => (None, Some(DegradeReason::InvalidRecurrence(e.to_string()))),
            },
        };

        if degraded.is_none() {
            degraded = validate_bounds(
                entry.all_day,
                recurrence.is_some(),
                entry.start_date,
                entry.end_date,
            )
            .err()
            .map(|e| DegradeReason::InvalidBounds(e.to_string()));
        }

        if let Some(reason) = &degraded {
            warn!(window = %id, reason = %reason, "window degraded to permanently inactive");
        }

        Self {
            id,
            all_day: entry.all_day,
            start: entry.start_date,
            end: entry.end_date,
            recurrence,
            degraded,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn degrade_reason(&self) -> Option<&DegradeReason> {
        self.degraded.as_ref()
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// Whether `now` lies inside this window's effective interval.
    ///
    /// Boundaries are inclusive on both ends: the end of a window still
    /// counts as active, and a zero-length window is active exactly at its
    /// single shared instant.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if self.degraded.is_some() {
            return false;
        }

        let day = now.date_naive();

        match &self.recurrence {
            Some(rule) => {
                if !rule.covers(day) {
                    return false;
                }
                if self.all_day {
                    return true;
                }
                // Both bounds present: enforced by validate_bounds.
                let (Some(start), Some(end)) = (self.start, self.end) else {
                    return false;
                };
                // Reapply the stored times of day to the occurrence day.
                let from = day.and_time(start.time()).and_utc();
                let to = day.and_time(end.time()).and_utc();
                from <= now && now <= to
            }
            None => {
                if self.all_day {
                    match (self.start, self.end) {
                        // Nothing pins the window to a date: every day is covered.
                        (None, None) => true,
                        (Some(pin), None) | (None, Some(pin)) => day == pin.date_naive(),
                        (Some(start), Some(end)) => {
                            start.date_naive() <= day && day <= end.date_naive()
                        }
                    }
                } else {
                    let (Some(start), Some(end)) = (self.start, self.end) else {
                        return false;
                    };
                    start <= now && now <= end
                }
            }
        }
    }
}

/// Build one window per calendar entry, in configuration order.
pub fn build_windows(config: &crate::schema::CalendarConfig) -> Vec<Window> {
    config
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Window::from_entry(index, entry))
        .collect()
}

/// Reject bound combinations the window cannot honor.
fn validate_bounds(
    all_day: bool,
    recurring: bool,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), TimerError> {
    if all_day {
        if let (Some(start), Some(end)) = (start, end) {
            if end.date_naive() < start.date_naive() {
                return Err(TimerError::InvalidWindowBounds(
                    "end date before start date".into(),
                ));
            }
        }
        return Ok(());
    }

    let (Some(start), Some(end)) = (start, end) else {
        return Err(TimerError::InvalidWindowBounds(
            "timed window requires both start and end".into(),
        ));
    };

    if recurring {
        if end.time() < start.time() {
            return Err(TimerError::InvalidWindowBounds(
                "end time of day before start time of day".into(),
            ));
        }
    } else if end < start {
        return Err(TimerError::InvalidWindowBounds("end before start".into()));
    }

    Ok(())
}
