//! The fixed three-stage dasha forecast.

use crate::domain::{Body, DashaForecast};

/// Static dasha sequence: Jupiter, then Saturn, then Mercury.
///
/// Ignores the chart entirely — a known simplification carried over from the
/// original, kept rather than replaced with a real Vimshottari computation.
pub fn dasha() -> DashaForecast {
    DashaForecast {
        current: Body::Jupiter,
        next: Body::Saturn,
        following: Body::Mercury,
    }
}
