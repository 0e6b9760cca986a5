//! Parser for the narrowed RFC-2445 recurrence grammar.
//!
//! Accepted input: `[RRULE:]FREQ=DAILY[;BYDAY=<entry>,...]` where each
//! `BYDAY` entry is an optional signed ordinal followed by a two-letter
//! weekday code (`SU MO TU WE TH FR SA`). Any part of the grammar outside
//! this projection is an error — the activation logic must never activate
//! a window on semantics it cannot honor.

use std::collections::HashMap;

use chrono::Weekday;

use crate::error::TimerError;

use super::rule::{Frequency, RecurrenceRule};

pub(super) fn parse_rule(input: &str) -> Result<RecurrenceRule, TimerError> {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix("RRULE:").unwrap_or(trimmed);

    if body.is_empty() {
        return Err(invalid("empty recurrence string"));
    }

    let mut frequency: Option<Frequency> = None;
    let mut by_day: Option<HashMap<Weekday, i32>> = None;

    for part in body.split(';').filter(|p| !p.trim().is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| invalid(&format!("rule part '{part}' is not KEY=VALUE")))?;

        match key.trim().to_ascii_uppercase().as_str() {
            "FREQ" => frequency = Some(parse_frequency(value.trim())?),
            "BYDAY" => by_day = Some(parse_by_day(value.trim())?),
            other => {
                return Err(invalid(&format!("unsupported rule part '{other}'")));
            }
        }
    }

    let frequency = frequency.ok_or_else(|| invalid("missing FREQ part"))?;

    Ok(RecurrenceRule { frequency, by_day })
}

fn parse_frequency(value: &str) -> Result<Frequency, TimerError> {
    match value.to_ascii_uppercase().as_str() {
        "DAILY" => Ok(Frequency::Daily),
        known @ ("SECONDLY" | "MINUTELY" | "HOURLY" | "WEEKLY" | "MONTHLY" | "YEARLY") => {
            Err(invalid(&format!("unsupported frequency {known}")))
        }
        other => Err(invalid(&format!("unknown frequency '{other}'"))),
    }
}

fn parse_by_day(value: &str) -> Result<HashMap<Weekday, i32>, TimerError> {
    if value.is_empty() {
        return Err(invalid("empty BYDAY list"));
    }

    let mut by_day = HashMap::new();
    for entry in value.split(',') {
        let (ordinal, weekday) = parse_by_day_entry(entry.trim())?;
        // Duplicate weekday entries: last one wins.
        by_day.insert(weekday, ordinal);
    }
    Ok(by_day)
}

/// Parse one BYDAY entry: optional signed ordinal prefix, then weekday code.
fn parse_by_day_entry(entry: &str) -> Result<(i32, Weekday), TimerError> {
    if entry.len() < 2 || !entry.is_ascii() {
        return Err(invalid(&format!("malformed BYDAY entry '{entry}'")));
    }

    let split_at = entry.len() - 2;
    let (prefix, code) = entry.split_at(split_at);

    let weekday = parse_weekday(code)
        .ok_or_else(|| invalid(&format!("unknown weekday code '{code}' in '{entry}'")))?;

    let ordinal = if prefix.is_empty() {
        0
    } else {
        prefix
            .parse::<i32>()
            .map_err(|_| invalid(&format!("bad ordinal '{prefix}' in '{entry}'")))?
    };

    // Only the binary include/exclude projection is established for this
    // activation logic; Nth-occurrence ordinals are rejected, not guessed at.
    if ordinal != 0 && ordinal != -1 {
        return Err(invalid(&format!(
            "unsupported ordinal {ordinal} in '{entry}' (expected 0 or -1)"
        )));
    }

    Ok((ordinal, weekday))
}

fn parse_weekday(code: &str) -> Option<Weekday> {
    match code.to_ascii_uppercase().as_str() {
        "SU" => Some(Weekday::Sun),
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        _ => None,
    }
}

fn invalid(msg: &str) -> TimerError {
    TimerError::InvalidRecurrenceExpression(msg.to_string())
}
