//! Geocentric lunar position from a truncated mean-element series.
//!
//! Truncation of the Meeus Chapter 47 longitude/latitude series to the
//! largest periodic terms. That keeps the Moon within a fraction of a degree
//! of the full theory, far below the 30-degree house granularity used
//! downstream.

/// Geocentric ecliptic longitude and latitude of the Moon, in degrees.
///
/// `t` is Julian centuries since J2000.
pub fn geocentric_ecliptic_deg(t: f64) -> (f64, f64) {
    // Mean elements (degrees).
    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t; // mean longitude
    let d = 297.850_192_1 + 445_267.111_403_4 * t; // mean elongation
    let m = 357.529_109_2 + 35_999.050_290_9 * t; // Sun mean anomaly
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t; // Moon mean anomaly
    let f = 93.272_095_0 + 483_202.017_523_3 * t; // argument of latitude

    let sin = |deg: f64| deg.to_radians().sin();

    // Leading longitude terms: equation of center, evection, variation,
    // annual equation, and the 2F term.
    let lon = l_prime
        + 6.288_774 * sin(m_prime)
        + 1.274_027 * sin(2.0 * d - m_prime)
        + 0.658_314 * sin(2.0 * d)
        + 0.213_618 * sin(2.0 * m_prime)
        - 0.185_116 * sin(m)
        - 0.114_332 * sin(2.0 * f);

    let lat = 5.128_122 * sin(f)
        + 0.280_602 * sin(m_prime + f)
        + 0.277_693 * sin(m_prime - f);

    (lon.rem_euclid(360.0), lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_stays_within_orbital_band() {
        // The Moon never strays far from the ecliptic (|beta| < ~5.3 deg).
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let (_, lat) = geocentric_ecliptic_deg(t);
            assert!(lat.abs() < 6.0, "t={t}, lat={lat}");
        }
    }

    #[test]
    fn longitude_advances_through_a_month() {
        // Sidereal period ~27.3 days: over one day the longitude moves
        // roughly 12-14 degrees.
        let day = 1.0 / 36_525.0;
        let (lon0, _) = geocentric_ecliptic_deg(0.0);
        let (lon1, _) = geocentric_ecliptic_deg(day);
        let delta = (lon1 - lon0).rem_euclid(360.0);
        assert!((10.0..17.0).contains(&delta), "delta={delta}");
    }

    #[test]
    fn longitude_is_normalized() {
        for i in 0..50 {
            let t = -2.0 + i as f64 * 0.1;
            let (lon, _) = geocentric_ecliptic_deg(t);
            assert!((0.0..360.0).contains(&lon), "t={t}, lon={lon}");
        }
    }
}
