//! Natal chart computation: planetary positions and the ascendant table.
//!
//! Input timestamps arrive as separate date and time strings (the form
//! fields), are validated against fixed patterns, and are combined into one
//! observer timestamp before any ephemeris work happens.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AppError;

pub mod ascendants;
pub mod positions;

pub use ascendants::ascendants;
pub use positions::body_positions;

/// Birth date pattern.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Birth time pattern (24-hour).
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Validate a birth date string (`YYYY-MM-DD`).
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        AppError::invalid_datetime(format!(
            "Invalid date '{date}'. Use YYYY-MM-DD."
        ))
    })
}

/// Validate a birth time string (`HH:MM:SS`, 24-hour).
pub fn parse_time(time: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| {
        AppError::invalid_datetime(format!(
            "Invalid time '{time}'. Use HH:MM:SS in 24-hour format."
        ))
    })
}

/// Combine validated date and time strings into the observer timestamp.
pub fn parse_birth_datetime(date: &str, time: &str) -> Result<NaiveDateTime, AppError> {
    let combined = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M:%S").map_err(|_| {
        AppError::invalid_datetime(format!(
            "Invalid date/time '{combined}'. Use YYYY-MM-DD and HH:MM:SS."
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn valid_inputs_parse() {
        parse_date("2000-01-01").unwrap();
        parse_time("12:00:00").unwrap();
        parse_birth_datetime("2000-01-01", "12:00:00").unwrap();
    }

    #[test]
    fn out_of_range_date_is_rejected() {
        let err = parse_date("2000-13-40").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDateTime);
    }

    #[test]
    fn wrong_shape_time_is_rejected() {
        assert!(parse_time("12:00").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("25:00:00").is_err());
    }
}
