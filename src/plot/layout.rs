//! Anchor geometry for the diamond Kundli layout.
//!
//! Twelve fixed anchor coordinates in a [-1, 1] x [-1, 1] frame, plus the
//! four closed outlines that form the traditional grid. Both renderers (the
//! ASCII grid and the Plotters TUI widget) draw from this one description so
//! they cannot drift apart.

/// Anchor point for each house, in chart coordinates (+y up).
pub const HOUSE_ANCHORS: [(u8, (f64, f64)); 12] = [
    (1, (0.0, 0.6)),
    (2, (0.3, 0.3)),
    (3, (0.6, 0.0)),
    (4, (0.3, -0.3)),
    (5, (0.0, -0.6)),
    (6, (-0.3, -0.3)),
    (7, (-0.6, 0.0)),
    (8, (-0.3, 0.3)),
    (9, (0.6, 0.6)),
    (10, (0.6, -0.6)),
    (11, (-0.6, -0.6)),
    (12, (-0.6, 0.6)),
];

/// The four closed polygon outlines (house-number sequences; each outline
/// returns to its starting anchor).
pub const OUTLINES: [[u8; 5]; 4] = [
    [1, 9, 3, 10, 1],
    [5, 10, 7, 11, 5],
    [1, 8, 7, 12, 1],
    [3, 9, 11, 6, 3],
];

/// Anchor coordinates for a house number (1..=12).
///
/// # Panics
/// Panics on a house number outside 1..=12. Positions are validated to that
/// range before they reach a renderer.
pub fn anchor(house: u8) -> (f64, f64) {
    HOUSE_ANCHORS
        .iter()
        .find(|&&(h, _)| h == house)
        .map(|&(_, xy)| xy)
        .expect("house number out of range")
}

/// An outline as a coordinate polyline.
pub fn outline_points(outline: &[u8; 5]) -> [(f64, f64); 5] {
    [
        anchor(outline[0]),
        anchor(outline[1]),
        anchor(outline[2]),
        anchor(outline[3]),
        anchor(outline[4]),
    ]
}
