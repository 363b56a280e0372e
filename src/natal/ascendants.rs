//! Ascendant (Lagna) table via stepped Sun-sign sampling.
//!
//! The rising sign changes roughly every 2 hours, so the original chart
//! approximates "all ascendants" by sampling the Sun's sign at twelve 2-hour
//! steps from the birth time. That is not a horizon-rise computation, and it
//! is kept that way on purpose.

use crate::domain::{AscendantTable, Body, Observer};
use crate::ephem;
use crate::error::AppError;
use crate::natal::parse_birth_datetime;

/// Hours between successive ascendant samples.
pub const STEP_HOURS: i64 = 2;

/// Build the 12-entry house -> rising-sign table.
///
/// The observer value is replaced (never mutated in place) on each step, so
/// the scan cannot alias a clock with any concurrent computation.
pub fn ascendants(
    date: &str,
    time: &str,
    latitude: f64,
    longitude: f64,
) -> Result<AscendantTable, AppError> {
    let when = parse_birth_datetime(date, time)?;
    let mut observer = Observer::new(latitude, longitude, when);

    let mut table = AscendantTable::new();
    for house in 1..=12u8 {
        let sun = ephem::compute_body(Body::Sun, &observer)?;
        table.insert(house, sun.sign);
        observer = observer.advanced_by_hours(STEP_HOURS);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const DELHI: (f64, f64) = (28.6139, 77.2090);

    #[test]
    fn table_has_exactly_twelve_entries() {
        let table = ascendants("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        assert_eq!(table.len(), 12);
        for house in 1..=12u8 {
            let sign = table.sign_for(house).expect("house entry missing");
            assert!(!sign.name().is_empty());
        }
    }

    #[test]
    fn steps_advance_by_exactly_two_hours() {
        // Recreate the scan's observer sequence and check the pairwise gap.
        let when = parse_birth_datetime("2000-01-01", "12:00:00").unwrap();
        let mut observer = Observer::new(DELHI.0, DELHI.1, when);
        let mut stamps = Vec::with_capacity(12);
        for _ in 0..12 {
            stamps.push(observer.when);
            observer = observer.advanced_by_hours(STEP_HOURS);
        }
        for pair in stamps.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::hours(2));
        }
    }

    #[test]
    fn table_is_deterministic() {
        let a = ascendants("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        let b = ascendants("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_time_fails_before_computation() {
        let err = ascendants("2000-01-01", "99:99:99", DELHI.0, DELHI.1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDateTime);
    }
}
