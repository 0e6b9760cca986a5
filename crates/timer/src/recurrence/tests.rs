//! Tests for recurrence parsing and the covered-day predicate.

use chrono::{NaiveDate, Weekday};

use crate::error::TimerError;
use crate::recurrence::{Frequency, RecurrenceRule};

/// Monday 2024-06-03 through Sunday 2024-06-09.
fn week_of(weekday: Weekday) -> NaiveDate {
    let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    monday + chrono::Duration::days(weekday.num_days_from_monday() as i64)
}

/// Build a BYDAY list including every weekday except `excluded` (ordinal -1).
fn all_but(excluded: Weekday) -> String {
    const CODES: [(Weekday, &str); 7] = [
        (Weekday::Sun, "SU"),
        (Weekday::Mon, "MO"),
        (Weekday::Tue, "TU"),
        (Weekday::Wed, "WE"),
        (Weekday::Thu, "TH"),
        (Weekday::Fri, "FR"),
        (Weekday::Sat, "SA"),
    ];
    let parts: Vec<String> = CODES
        .iter()
        .map(|(day, code)| {
            if *day == excluded {
                format!("-1{code}")
            } else {
                (*code).to_string()
            }
        })
        .collect();
    format!("FREQ=DAILY;BYDAY={}", parts.join(","))
}

// -- parsing -----------------------------------------------------------

#[test]
fn parses_daily_with_weekday_list() {
    let rule = RecurrenceRule::parse("FREQ=DAILY;BYDAY=MO,TU,WE,TH,FR").unwrap();
    assert_eq!(rule.frequency(), Frequency::Daily);
    assert!(rule.covers(week_of(Weekday::Mon)));
    assert!(!rule.covers(week_of(Weekday::Sat)));
}

#[test]
fn accepts_rrule_prefix_and_whitespace() {
    let rule = RecurrenceRule::parse("  RRULE:FREQ=DAILY;BYDAY=MO  ").unwrap();
    assert!(rule.covers(week_of(Weekday::Mon)));
}

#[test]
fn daily_without_byday_covers_every_day() {
    let rule = RecurrenceRule::parse("FREQ=DAILY").unwrap();
    for day in [Weekday::Mon, Weekday::Wed, Weekday::Sun] {
        assert!(rule.covers(week_of(day)));
    }
}

#[test]
fn explicit_zero_ordinal_includes() {
    let rule = RecurrenceRule::parse("FREQ=DAILY;BYDAY=0MO,-1TU").unwrap();
    assert!(rule.covers(week_of(Weekday::Mon)));
    assert!(!rule.covers(week_of(Weekday::Tue)));
}

#[test]
fn weekday_absent_from_list_is_excluded() {
    let rule = RecurrenceRule::parse("FREQ=DAILY;BYDAY=MO").unwrap();
    assert!(rule.covers(week_of(Weekday::Mon)));
    for day in [
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        assert!(!rule.covers(week_of(day)), "{day} should be excluded");
    }
}

#[test]
fn duplicate_weekday_last_entry_wins() {
    let rule = RecurrenceRule::parse("FREQ=DAILY;BYDAY=MO,-1MO").unwrap();
    assert!(!rule.covers(week_of(Weekday::Mon)));
}

// -- rejection ---------------------------------------------------------

#[test]
fn rejects_unsupported_frequency() {
    for freq in ["WEEKLY", "MONTHLY", "YEARLY", "HOURLY"] {
        let result = RecurrenceRule::parse(&format!("FREQ={freq};BYDAY=MO"));
        assert!(
            matches!(result, Err(TimerError::InvalidRecurrenceExpression(_))),
            "{freq} should be rejected"
        );
    }
}

#[test]
fn rejects_unknown_frequency() {
    assert!(RecurrenceRule::parse("FREQ=FORTNIGHTLY").is_err());
}

#[test]
fn rejects_missing_freq() {
    assert!(RecurrenceRule::parse("BYDAY=MO,TU").is_err());
}

#[test]
fn rejects_empty_string() {
    assert!(RecurrenceRule::parse("").is_err());
    assert!(RecurrenceRule::parse("   ").is_err());
}

#[test]
fn rejects_unsupported_ordinals() {
    for entry in ["2MO", "-2TU", "1FR", "3SA"] {
        let result = RecurrenceRule::parse(&format!("FREQ=DAILY;BYDAY={entry}"));
        assert!(
            matches!(result, Err(TimerError::InvalidRecurrenceExpression(_))),
            "ordinal in {entry} should be rejected"
        );
    }
}

#[test]
fn rejects_unknown_weekday_code() {
    assert!(RecurrenceRule::parse("FREQ=DAILY;BYDAY=XX").is_err());
}

#[test]
fn rejects_unknown_rule_part() {
    assert!(RecurrenceRule::parse("FREQ=DAILY;COUNT=10").is_err());
    assert!(RecurrenceRule::parse("FREQ=DAILY;UNTIL=20250101T000000Z").is_err());
}

#[test]
fn rejects_malformed_parts() {
    assert!(RecurrenceRule::parse("FREQ").is_err());
    assert!(RecurrenceRule::parse("FREQ=DAILY;BYDAY=").is_err());
    assert!(RecurrenceRule::parse("FREQ=DAILY;BYDAY=M").is_err());
}

// -- weekday inclusion properties --------------------------------------

#[test]
fn excluding_one_weekday_keeps_the_rest() {
    for excluded in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        let rule = RecurrenceRule::parse(&all_but(excluded)).unwrap();
        assert!(!rule.covers(week_of(excluded)), "{excluded} excluded");
        for other in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            if other != excluded {
                assert!(rule.covers(week_of(other)), "{other} included");
            }
        }
    }
}

#[test]
fn including_only_one_weekday_excludes_the_rest() {
    let rule =
        RecurrenceRule::parse("FREQ=DAILY;BYDAY=-1SU,-1MO,-1TU,0WE,-1TH,-1FR,-1SA").unwrap();
    assert!(rule.covers(week_of(Weekday::Wed)));
    for other in [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ] {
        assert!(!rule.covers(week_of(other)));
    }
}

#[test]
fn covers_is_referentially_transparent() {
    let rule = RecurrenceRule::parse("FREQ=DAILY;BYDAY=MO,-1TU").unwrap();
    let day = week_of(Weekday::Mon);
    let first = rule.covers(day);
    for _ in 0..10 {
        assert_eq!(rule.covers(day), first);
    }
}
