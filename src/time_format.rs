//! Relative-Time Formatting
//!
//! "just now" / "N minutes ago" / "N hours ago", then an absolute date.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Absolute format used once a timestamp is a day old or more
const ABSOLUTE_FORMAT: &str = "%b %-d, %Y %H:%M";

/// Age of a timestamp, bucketed for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Age {
    JustNow,
    Minutes(i64),
    Hours(i64),
    At(DateTime<Local>),
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::JustNow => f.write_str("just now"),
            Age::Minutes(n) => write!(f, "{} minutes ago", n),
            Age::Hours(n) => write!(f, "{} hours ago", n),
            Age::At(at) => write!(f, "{}", at.format(ABSOLUTE_FORMAT)),
        }
    }
}

/// First matching band wins; negative deltas count as "just now"
pub fn age_between(then: DateTime<Local>, now: DateTime<Local>) -> Age {
    let secs = (now - then).num_seconds();
    if secs < 60 {
        Age::JustNow
    } else if secs < 3_600 {
        Age::Minutes(secs / 60)
    } else if secs < 86_400 {
        Age::Hours(secs / 3_600)
    } else {
        Age::At(then)
    }
}

/// RFC 3339, or a naive ISO timestamp taken as local time
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local));
    }
    let naive = raw
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Label for `raw` relative to `now`; unparseable input comes back verbatim
pub fn format_relative_at(raw: &str, now: DateTime<Local>) -> String {
    match parse_timestamp(raw) {
        Some(then) => age_between(then, now).to_string(),
        None => raw.to_string(),
    }
}
