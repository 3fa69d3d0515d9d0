// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Human-readable calendar date, e.g. `Mon Jan 01 2024`.
const DATE_STRING_FORMAT: &str = "%a %b %d %Y";

/// Render a timestamp as a calendar-date string in UTC.
pub fn format_date_string(date: DateTime<Utc>) -> String {
    date.format(DATE_STRING_FORMAT).to_string()
}

/// Parse a caller-supplied date.
///
/// Accepts `YYYY-MM-DD`, RFC3339, a naive `YYYY-MM-DDTHH:MM[:SS]` (taken as
/// UTC) and the rendered `Www Mmm dd yyyy` form. Plain dates map to midnight UTC.
pub fn parse_date_input(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(midnight_utc(date));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_STRING_FORMAT)
        .ok()
        .map(midnight_utc)
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
