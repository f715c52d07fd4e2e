//! Wire-format date parsing and rendering.
//!
//! Birthdates travel as `YYYY-MM-DD` strings; timestamps are rendered as
//! RFC 3339 so the wire form is stable across platforms.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::AppError;
use crate::result::AppResult;

/// Wire format for birthdate fields.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` birthdate.
///
/// A failure here is a client input error, reported through the response
/// envelope with status 400. Invalid calendar dates (e.g. February 30th)
/// are rejected, not rolled over.
pub fn parse_birthdate(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, BIRTHDATE_FORMAT)
        .map_err(|_| AppError::validation(format!("'{value}' is not a valid YYYY-MM-DD date")))
}

/// Render a birthdate in its wire format.
pub fn format_birthdate(date: NaiveDate) -> String {
    date.format(BIRTHDATE_FORMAT).to_string()
}

/// Render a timestamp in its wire format.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_valid_birthdate() {
        let date = parse_birthdate("1990-02-28").expect("valid date");
        assert_eq!(format_birthdate(date), "1990-02-28");
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_birthdate("2000-02-29").is_ok());
        assert!(parse_birthdate("1900-02-29").is_err());
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        let err = parse_birthdate("1990-02-30").expect_err("must fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Validation);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(parse_birthdate("28/02/1990").is_err());
        assert!(parse_birthdate("").is_err());
        assert!(parse_birthdate("1990-2").is_err());
    }

    #[test]
    fn test_format_timestamp_is_rfc3339() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-05-17T08:30:00Z");
    }
}
