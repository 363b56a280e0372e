//! Planetary positions for the 9 tracked bodies.

use std::f64::consts::TAU;

use crate::domain::{ALL_BODIES, BodyPosition, Observer, Positions};
use crate::ephem;
use crate::error::AppError;
use crate::natal::parse_birth_datetime;

/// Compute house, sign, and right ascension for every tracked body.
///
/// Deterministic: identical inputs always produce identical maps.
pub fn body_positions(
    date: &str,
    time: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Positions, AppError> {
    let when = parse_birth_datetime(date, time)?;
    let observer = Observer::new(latitude, longitude, when);

    let mut positions = Positions::new();
    for body in ALL_BODIES {
        let computed = ephem::compute_body(body, &observer)?;
        positions.insert(
            body,
            BodyPosition {
                house: house_for_ra(computed.ra_rad),
                sign: computed.sign,
                degrees: round2(computed.ra_rad.to_degrees()),
            },
        );
    }

    Ok(positions)
}

/// House number from right ascension: 12 equal sectors, 1-indexed.
///
/// The raw value is `floor(ra/2pi * 12) + 1`, at most 13 (and 13 only when
/// floating-point rounding pushes ra/2pi to exactly 1.0); the subtract-12
/// guard wraps that single case back to house 1.
fn house_for_ra(ra_rad: f64) -> u8 {
    let house = (ra_rad / TAU * 12.0) as u8 + 1;
    if house <= 12 { house } else { house - 12 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Body;
    use crate::error::ErrorKind;

    const DELHI: (f64, f64) = (28.6139, 77.2090);

    #[test]
    fn delhi_reference_chart_has_all_bodies_in_range() {
        let positions = body_positions("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        assert_eq!(positions.len(), 9);
        for (body, pos) in &positions {
            assert!(
                (1..=12).contains(&pos.house),
                "{}: house {}",
                body.name(),
                pos.house
            );
            assert!(
                (0.0..360.0).contains(&pos.degrees),
                "{}: degrees {}",
                body.name(),
                pos.degrees
            );
        }
    }

    #[test]
    fn positions_are_idempotent() {
        let a = body_positions("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        let b = body_positions("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degrees_are_rounded_to_two_decimals() {
        let positions = body_positions("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        for pos in positions.values() {
            let scaled = pos.degrees * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "degrees={}", pos.degrees);
        }
    }

    #[test]
    fn sun_house_matches_its_ra_sector() {
        let positions = body_positions("2000-01-01", "12:00:00", DELHI.0, DELHI.1).unwrap();
        let sun = &positions[&Body::Sun];
        let expected = (sun.degrees / 30.0).floor() as u8 + 1;
        assert_eq!(sun.house, expected);
    }

    #[test]
    fn house_sector_boundaries() {
        assert_eq!(house_for_ra(0.0), 1);
        assert_eq!(house_for_ra(TAU / 12.0 + 1e-9), 2);
        assert_eq!(house_for_ra(TAU - 1e-9), 12);
        // The raw formula's only overflow case wraps to house 1.
        assert_eq!(house_for_ra(TAU), 1);
    }

    #[test]
    fn malformed_date_fails_before_computation() {
        let err = body_positions("2000-13-40", "12:00:00", DELHI.0, DELHI.1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDateTime);
    }
}
