//! Flexible date and date-time parsing
//!
//! User-entered dates arrive in many shapes (`2/12/2019`, `2-12-2019 6PM`,
//! `2 12 2019 18:00`). A [`TemporalValue`] keeps track of whether a
//! time-of-day was supplied, because display and the saved file both
//! preserve that distinction.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::EngineError;

/// Date-time patterns, tried before the date-only patterns so that a
/// date pattern cannot short-match the leading portion of a date-time
/// string. First match wins.
///
/// Day comes first in all of them; the three separators are `/`, `-`
/// and space, each combined with 12-hour (`h:mmA`, `h.mmA`) and 24-hour
/// (`HHmm`, `HH:mm`, `HH.mm`) time suffixes.
const DATE_TIME_PATTERNS: &[&str] = &[
    "%d/%m/%Y %I:%M%p", // 2/12/2019 6:00PM
    "%d/%m/%Y %I.%M%p", // 2/12/2019 6.30AM
    "%d/%m/%Y %H%M",    // 2/12/2019 1800
    "%d/%m/%Y %H:%M",   // 2/12/2019 18:00
    "%d/%m/%Y %H.%M",   // 2/12/2019 18.00
    "%d-%m-%Y %I:%M%p", // 2-12-2019 6:00PM
    "%d-%m-%Y %I.%M%p", // 2-12-2019 6.30AM
    "%d-%m-%Y %H%M",    // 2-12-2019 1800
    "%d-%m-%Y %H:%M",   // 2-12-2019 18:00
    "%d-%m-%Y %H.%M",   // 2-12-2019 18.00
    "%d %m %Y %I:%M%p", // 2 12 2019 6:00PM
    "%d %m %Y %I.%M%p", // 2 12 2019 6.30AM
    "%d %m %Y %H%M",    // 2 12 2019 1800
    "%d %m %Y %H:%M",   // 2 12 2019 18:00
    "%d %m %Y %H.%M",   // 2 12 2019 18.00
];

/// Date-only patterns, tried after the date-time patterns.
const DATE_PATTERNS: &[&str] = &[
    "%d/%m/%Y", // 2/12/2019
    "%d-%m-%Y", // 2-12-2019
    "%d %m %Y", // 2 12 2019
];

/// A parsed date, tagged by whether a time-of-day was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    /// A calendar date with no time component.
    Date(NaiveDate),
    /// A calendar date with an explicit time-of-day.
    DateTime(NaiveDateTime),
}

impl TemporalValue {
    /// Parses a textual date or date-time in any of the supported
    /// patterns. Fails with [`EngineError::InvalidDate`] when nothing
    /// matches.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let text = widen_bare_hour(&normalize_meridiem(input.trim()));

        for pattern in DATE_TIME_PATTERNS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&text, pattern) {
                return Ok(Self::DateTime(dt));
            }
        }
        for pattern in DATE_PATTERNS {
            if let Ok(d) = NaiveDate::parse_from_str(&text, pattern) {
                return Ok(Self::Date(d));
            }
        }
        Err(EngineError::InvalidDate)
    }

    /// Canonical serialized text, guaranteed to re-parse via
    /// [`TemporalValue::parse`]: `D/M/YYYY` or `D/M/YYYY HHmm`.
    pub fn storage_form(&self) -> String {
        match self {
            Self::Date(d) => d.format("%-d/%-m/%Y").to_string(),
            Self::DateTime(dt) => dt.format("%-d/%-m/%Y %H%M").to_string(),
        }
    }

    /// Normalizes to a date-time for ordering: a date-only value counts
    /// as midnight. The tag itself is preserved for display and storage.
    pub fn as_date_time(&self) -> NaiveDateTime {
        match self {
            Self::Date(d) => d.and_time(NaiveTime::MIN),
            Self::DateTime(dt) => *dt,
        }
    }

    /// True when a time-of-day was supplied.
    pub fn has_time(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    /// True when both values carry the same tag (both dates, or both
    /// date-times).
    pub fn same_kind(&self, other: &Self) -> bool {
        self.has_time() == other.has_time()
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%-d %b %Y")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%-d %b %Y, %-I:%M%p")),
        }
    }
}

/// Upper-cases any `am`/`pm` marker so a single set of patterns covers
/// every casing the user might type.
fn normalize_meridiem(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        let starts_meridiem = matches!(c, 'a' | 'A' | 'p' | 'P')
            && chars.peek().is_some_and(|&next| next == 'm' || next == 'M');
        if starts_meridiem {
            out.push(c.to_ascii_uppercase());
            chars.next();
            out.push('M');
        } else {
            out.push(c);
        }
    }
    out
}

/// Widens a bare 12-hour time (`6PM`) to `6:00PM`. chrono cannot build
/// a time from an hour alone, so the bare-hour form is rewritten before
/// pattern matching. Expects the meridiem already upper-cased.
fn widen_bare_hour(input: &str) -> String {
    let Some(rest) = input
        .strip_suffix("AM")
        .or_else(|| input.strip_suffix("PM"))
    else {
        return input.to_string();
    };
    let meridiem = &input[input.len() - 2..];
    let hour = match rest.rfind(' ') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    if !hour.is_empty() && hour.len() <= 2 && hour.bytes().all(|b| b.is_ascii_digit()) {
        format!("{rest}:00{meridiem}")
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> TemporalValue {
        TemporalValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> TemporalValue {
        TemporalValue::DateTime(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
        )
    }

    #[test]
    fn parses_date_only_with_each_separator() {
        let expected = date(2019, 12, 2);
        assert_eq!(TemporalValue::parse("2/12/2019").unwrap(), expected);
        assert_eq!(TemporalValue::parse("2-12-2019").unwrap(), expected);
        assert_eq!(TemporalValue::parse("2 12 2019").unwrap(), expected);
    }

    #[test]
    fn twelve_and_twenty_four_hour_forms_agree() {
        let expected = date_time(2019, 12, 2, 18, 0);
        assert_eq!(TemporalValue::parse("2/12/2019 6:00PM").unwrap(), expected);
        assert_eq!(TemporalValue::parse("2/12/2019 1800").unwrap(), expected);
        assert_eq!(TemporalValue::parse("2/12/2019 18:00").unwrap(), expected);
        assert_eq!(TemporalValue::parse("2/12/2019 18.00").unwrap(), expected);
    }

    #[test]
    fn bare_hour_and_lowercase_meridiem() {
        assert_eq!(
            TemporalValue::parse("2/12/2019 6pm").unwrap(),
            date_time(2019, 12, 2, 18, 0)
        );
        assert_eq!(
            TemporalValue::parse("2-12-2019 6.30am").unwrap(),
            date_time(2019, 12, 2, 6, 30)
        );
    }

    #[test]
    fn impossible_dates_fail() {
        assert!(matches!(
            TemporalValue::parse("31/13/2025"),
            Err(EngineError::InvalidDate)
        ));
        assert!(matches!(
            TemporalValue::parse("not a date"),
            Err(EngineError::InvalidDate)
        ));
        assert!(matches!(
            TemporalValue::parse(""),
            Err(EngineError::InvalidDate)
        ));
    }

    #[test]
    fn display_formats() {
        assert_eq!(date(2019, 12, 2).to_string(), "2 Dec 2019");
        assert_eq!(
            date_time(2025, 12, 31, 18, 0).to_string(),
            "31 Dec 2025, 6:00PM"
        );
        assert_eq!(
            date_time(2025, 1, 5, 0, 30).to_string(),
            "5 Jan 2025, 12:30AM"
        );
    }

    #[test]
    fn storage_form_round_trips() {
        for value in [
            date(2019, 12, 2),
            date_time(2025, 12, 31, 18, 0),
            date_time(2020, 2, 29, 0, 0),
        ] {
            let reparsed = TemporalValue::parse(&value.storage_form()).unwrap();
            assert_eq!(reparsed, value);
        }
    }

    #[test]
    fn date_only_normalizes_to_midnight_for_ordering() {
        let d = date(2019, 12, 2);
        let dt = date_time(2019, 12, 2, 0, 0);
        assert_eq!(d.as_date_time(), dt.as_date_time());
        assert!(!d.same_kind(&dt));
        assert_ne!(d, dt);
    }
}
