//! Lenient parsing of match dates.
//!
//! Accepted inputs, all read as UTC when no offset is given:
//! - RFC 3339 (`2025-10-16T18:30:00Z`, `2025-10-16T20:30:00+02:00`)
//! - HTML `datetime-local` values (`2025-10-16T18:30`, `2025-10-16T18:30:15`)
//! - plain dates (`2025-10-16`, midnight)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn parse_match_date(input: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = input.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(format!("'{}' is not a valid date", input))
}

/// Serde adapter for optional date fields. `null`, a missing key and an
/// empty string all mean "not provided".
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_match_date(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_match_date("2025-10-16T20:30:00+02:00").unwrap();
        assert_eq!(parsed.hour(), 18);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn parses_datetime_local_input() {
        let parsed = parse_match_date("2025-10-16T18:30").unwrap();
        assert_eq!((parsed.day(), parsed.hour(), parsed.minute()), (16, 18, 30));
    }

    #[test]
    fn parses_plain_date_as_midnight() {
        let parsed = parse_match_date("2025-10-16").unwrap();
        assert_eq!((parsed.month(), parsed.day(), parsed.hour()), (10, 16, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_match_date("yesterday").is_err());
        assert!(parse_match_date("2025-13-40").is_err());
    }
}
