//! Spiritual guidance gated on body presence.

use crate::domain::{Body, Positions};

/// Up to 3 advice strings, keyed only on whether Moon, Mars, and Jupiter are
/// present in the positions map — independent of their houses.
pub fn guidance(positions: &Positions) -> Vec<String> {
    let mut out = Vec::new();
    if positions.contains_key(&Body::Moon) {
        out.push("Focus on emotional well-being and meditation.".to_string());
    }
    if positions.contains_key(&Body::Mars) {
        out.push("Channel your energy into physical activities.".to_string());
    }
    if positions.contains_key(&Body::Jupiter) {
        out.push("Seek knowledge and wisdom through study.".to_string());
    }
    out
}
