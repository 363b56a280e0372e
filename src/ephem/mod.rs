//! Ephemeris adapter: body -> right ascension + zodiac sign.
//!
//! A self-contained low-precision ephemeris (Keplerian mean elements for the
//! planets, a truncated series for the Moon). Precision is deliberately
//! modest: downstream consumers bucket right ascension into 30-degree
//! sectors, so arcminute-level error is invisible.
//!
//! Two approximations are load-bearing and must not be "improved":
//!
//! - Rahu is computed as Neptune and Ketu as Uranus. These are proxy bodies,
//!   not true lunar nodes; the substitution is part of the observable
//!   behavior this tool reproduces.
//! - Positions are geocentric. The observer's latitude/longitude ride along
//!   in [`Observer`] for reporting, but the topocentric correction is orders
//!   of magnitude below the house granularity.

use std::f64::consts::TAU;

use crate::domain::{Body, Observer, ZodiacSign};
use crate::error::AppError;

pub mod elements;
pub mod kepler;
pub mod moon;

use elements::Planet;
use kepler::{equatorial_ra, heliocentric_ecliptic, julian_centuries};

/// One computed adapter result.
///
/// Mirrors the constellation-lookup pair of the original toolchain: the sign
/// carries both an abbreviation and a full name, and downstream keeps only
/// the name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemPosition {
    /// Right ascension in radians, [0, 2*pi).
    pub ra_rad: f64,
    /// Sign whose 30-degree RA sector contains the body.
    pub sign: ZodiacSign,
}

/// Compute one body's position for an observer.
///
/// Any non-finite intermediate or failed Kepler solve is fatal for the
/// request; there are no retries.
pub fn compute_body(body: Body, observer: &Observer) -> Result<EphemPosition, AppError> {
    let t = julian_centuries(observer.when);

    let ecl = match body {
        Body::Sun => sun_geocentric(t)?,
        Body::Moon => {
            let (lon, lat) = moon::geocentric_ecliptic_deg(t);
            kepler::ecliptic_unit_vector(lon, lat)
        }
        Body::Mercury => planet_geocentric(Planet::Mercury, t)?,
        Body::Venus => planet_geocentric(Planet::Venus, t)?,
        Body::Mars => planet_geocentric(Planet::Mars, t)?,
        Body::Jupiter => planet_geocentric(Planet::Jupiter, t)?,
        Body::Saturn => planet_geocentric(Planet::Saturn, t)?,
        // Proxy bodies, kept deliberately (see module docs).
        Body::Rahu => planet_geocentric(Planet::Neptune, t)?,
        Body::Ketu => planet_geocentric(Planet::Uranus, t)?,
    };

    let ra_rad = equatorial_ra(ecl);
    if !ra_rad.is_finite() {
        return Err(AppError::ephemeris(format!(
            "Non-finite right ascension computed for {}.",
            body.name()
        )));
    }

    Ok(EphemPosition {
        ra_rad,
        sign: sign_for_ra(ra_rad),
    })
}

/// Sign for a right ascension: 12 equal 30-degree sectors, Aries at RA 0.
pub fn sign_for_ra(ra_rad: f64) -> ZodiacSign {
    let sector = (ra_rad.rem_euclid(TAU) / TAU * 12.0).floor() as usize;
    ZodiacSign::from_index(sector.min(11))
}

/// Geocentric ecliptic position of the Sun: the negated heliocentric Earth
/// vector.
fn sun_geocentric(t: f64) -> Result<[f64; 3], AppError> {
    let earth = heliocentric(Planet::EarthMoonBary, t)?;
    Ok([-earth[0], -earth[1], -earth[2]])
}

/// Geocentric ecliptic position of a planet.
fn planet_geocentric(planet: Planet, t: f64) -> Result<[f64; 3], AppError> {
    let body = heliocentric(planet, t)?;
    let earth = heliocentric(Planet::EarthMoonBary, t)?;
    Ok([body[0] - earth[0], body[1] - earth[1], body[2] - earth[2]])
}

fn heliocentric(planet: Planet, t: f64) -> Result<[f64; 3], AppError> {
    let elements = planet.elements_at(t);
    heliocentric_ecliptic(&elements).ok_or_else(|| {
        AppError::ephemeris(format!(
            "Kepler solve failed for {planet:?} (t={t:.6} centuries)."
        ))
    })
}
