//! Keplerian position math and frame conversions.
//!
//! Standalone reusable module implementing the standard two-body formulas:
//! solve Kepler's equation for the eccentric anomaly, place the body in its
//! orbital plane, rotate into heliocentric ecliptic coordinates, and convert
//! ecliptic vectors to equatorial right ascension.
//!
//! Sources: Standish, "Approximate Positions of the Planets"; Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapters 7 and 30.

use std::f64::consts::TAU;

use chrono::{NaiveDateTime, Timelike};

use crate::ephem::elements::OrbitalElements;

/// Obliquity of the ecliptic at J2000, radians (23.4392911 deg).
pub const OBLIQUITY_J2000_RAD: f64 = 0.409_092_600_600_583;

/// Julian day number for 2000-01-01 12:00:00 (the J2000 epoch).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Civil timestamp (treated as UTC) to Julian day.
pub fn julian_day(when: NaiveDateTime) -> f64 {
    // num_days_from_ce is the proleptic Gregorian day count; the offset lines
    // it up with the Julian day scale (2000-01-01 00:00 -> 2451544.5).
    let days = chrono::Datelike::num_days_from_ce(&when.date()) as f64;
    let day_fraction = when.num_seconds_from_midnight() as f64 / 86_400.0;
    days + 1_721_424.5 + day_fraction
}

/// Julian centuries since J2000 for a civil timestamp.
pub fn julian_centuries(when: NaiveDateTime) -> f64 {
    (julian_day(when) - J2000_JD) / DAYS_PER_CENTURY
}

/// Solve Kepler's equation `E - e*sin(E) = M` for the eccentric anomaly.
///
/// Newton iteration from `E0 = M + e*sin(M)`. Returns `None` if the iteration
/// fails to converge, which for elliptical orbits (e < 1) indicates a
/// malformed element set rather than a numerical edge case.
pub fn solve_kepler(m_rad: f64, e: f64) -> Option<f64> {
    if !(m_rad.is_finite() && e.is_finite() && (0.0..1.0).contains(&e)) {
        return None;
    }

    let mut ecc_anom = m_rad + e * m_rad.sin();
    for _ in 0..30 {
        let delta = (ecc_anom - e * ecc_anom.sin() - m_rad) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < 1e-12 {
            return Some(ecc_anom);
        }
    }
    None
}

/// Heliocentric ecliptic position (au) for an element set.
///
/// Returns `None` when the Kepler solve fails.
pub fn heliocentric_ecliptic(el: &OrbitalElements) -> Option<[f64; 3]> {
    // Argument of perihelion and mean anomaly from the longitudes.
    let omega = (el.peri_deg - el.node_deg).to_radians();
    let node = el.node_deg.to_radians();
    let incl = el.i_deg.to_radians();
    let mean_anom = normalize_pi((el.l_deg - el.peri_deg).to_radians());

    let ecc_anom = solve_kepler(mean_anom, el.e)?;

    // Position in the orbital plane, x' toward perihelion.
    let xp = el.a * (ecc_anom.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anom.sin();

    // Rotate by argument of perihelion, inclination, and node into the
    // ecliptic frame (Standish eq. set).
    let (so, co) = (omega.sin(), omega.cos());
    let (sn, cn) = (node.sin(), node.cos());
    let (si, ci) = (incl.sin(), incl.cos());

    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    let z = (so * si) * xp + (co * si) * yp;

    Some([x, y, z])
}

/// Right ascension (radians, [0, 2*pi)) of an ecliptic-frame vector.
pub fn equatorial_ra(ecl: [f64; 3]) -> f64 {
    let eps = OBLIQUITY_J2000_RAD;
    let x_eq = ecl[0];
    let y_eq = ecl[1] * eps.cos() - ecl[2] * eps.sin();
    f64::atan2(y_eq, x_eq).rem_euclid(TAU)
}

/// Ecliptic spherical coordinates (degrees) to an ecliptic unit vector.
pub fn ecliptic_unit_vector(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// Normalize an angle to (-pi, pi].
fn normalize_pi(angle_rad: f64) -> f64 {
    let wrapped = angle_rad.rem_euclid(TAU);
    if wrapped > std::f64::consts::PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn julian_day_j2000_epoch() {
        let jd = julian_day(at(2000, 1, 1, 12, 0, 0));
        assert!((jd - J2000_JD).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn julian_day_midnight_half_day_before_epoch() {
        let jd = julian_day(at(2000, 1, 1, 0, 0, 0));
        assert!((jd - 2_451_544.5).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        // With e=0 the eccentric anomaly equals the mean anomaly.
        for &m in &[0.0, 0.5, 1.0, 3.0, -2.0] {
            let e = solve_kepler(m, 0.0).unwrap();
            assert!((e - m).abs() < 1e-12, "m={m}, E={e}");
        }
    }

    #[test]
    fn kepler_solution_satisfies_equation() {
        let m = 1.234;
        let e = 0.2056; // Mercury-like
        let ecc_anom = solve_kepler(m, e).unwrap();
        let residual = ecc_anom - e * ecc_anom.sin() - m;
        assert!(residual.abs() < 1e-10, "residual={residual}");
    }

    #[test]
    fn kepler_rejects_hyperbolic_input() {
        assert!(solve_kepler(1.0, 1.5).is_none());
        assert!(solve_kepler(f64::NAN, 0.1).is_none());
    }

    #[test]
    fn equatorial_ra_vernal_equinox_direction() {
        // The +x axis points at the vernal equinox in both frames.
        let ra = equatorial_ra([1.0, 0.0, 0.0]);
        assert!(ra.abs() < 1e-12, "ra={ra}");
    }

    #[test]
    fn equatorial_ra_covers_full_circle() {
        // Sweeping ecliptic longitude 0..360 must sweep RA over [0, 2*pi).
        let mut max_ra: f64 = 0.0;
        for i in 0..360 {
            let v = ecliptic_unit_vector(i as f64, 0.0);
            let ra = equatorial_ra(v);
            assert!((0.0..TAU).contains(&ra), "i={i}, ra={ra}");
            max_ra = max_ra.max(ra);
        }
        assert!(max_ra > TAU - 0.05, "max_ra={max_ra}");
    }
}
