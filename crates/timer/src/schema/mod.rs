//! Calendar configuration schema with serde deserialization.
//!
//! A calendar document is an ordered list of entries. Each entry describes
//! one activation window: an all-day flag, optional start/end instants, and
//! an optional recurrence rule string. The document shape mirrors the
//! calendar property data the surrounding engine stores for a rule instance.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimerError;


/// Top-level calendar document parsed from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default)]
    pub entries: Vec<CalendarEntry>,
}

/// One configured activation window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalendarEntry {
    /// When set, the window covers the entirety of any day it applies to;
    /// start/end times of day are ignored.
    #[serde(default)]
    pub all_day: bool,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    /// RFC-2445-style recurrence string (e.g. `FREQ=DAILY;BYDAY=MO,-1TU`).
    /// Absent means a single non-recurring interval.
    #[serde(default)]
    pub recurrence_rule: Option<String>,
}

/// Load a calendar document from a YAML file.
pub fn load_calendar_file(path: impl AsRef<Path>) -> Result<CalendarConfig, TimerError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let config: CalendarConfig = serde_yaml::from_str(&raw)?;
    Ok(config)
}
