//! Gemstone and pooja recommendation tables.
//!
//! Fixed 9-entry tables keyed by body. The lookup keeps an explicit fallback
//! sentinel for unknown keys; with the closed [`Body`] enum that branch is
//! unreachable, but it is a designed default, not an error path.

use std::collections::BTreeMap;

use crate::domain::{Body, Positions};

/// Fallback when a body has no gemstone entry.
pub const NO_GEMSTONE: &str = "No gemstone suggestion available.";
/// Fallback when a body has no pooja entry.
pub const NO_POOJA: &str = "No Pooja recommendation available.";

const GEMSTONES: [(Body, &str); 9] = [
    (Body::Sun, "Ruby - for vitality and confidence."),
    (Body::Moon, "Pearl - for emotional balance."),
    (Body::Mars, "Red Coral - for courage and strength."),
    (Body::Mercury, "Emerald - for intelligence and communication."),
    (Body::Jupiter, "Yellow Sapphire - for prosperity and wisdom."),
    (Body::Venus, "Diamond - for love and beauty."),
    (Body::Saturn, "Blue Sapphire - for discipline and focus."),
    (Body::Rahu, "Hessonite - for overcoming obstacles."),
    (Body::Ketu, "Cat's Eye - for spiritual growth."),
];

const POOJAS: [(Body, &str); 9] = [
    (
        Body::Sun,
        "Perform Surya Namaskar and offer water to the Sun in the morning.",
    ),
    (
        Body::Moon,
        "Chant Chandra Mantra and offer rice and milk to the Moon.",
    ),
    (Body::Mars, "Perform Mangal Dosh Nivaran Pooja on Tuesdays."),
    (
        Body::Mercury,
        "Recite Budh Mantra and offer green gram to Lord Ganesha.",
    ),
    (Body::Jupiter, "Conduct a Guru Pooja and offer yellow flowers."),
    (Body::Venus, "Perform Lakshmi Pooja on Fridays."),
    (
        Body::Saturn,
        "Chant Shani Mantra and offer black sesame seeds on Saturdays.",
    ),
    (Body::Rahu, "Recite Rahu Mantra and offer black gram."),
    (Body::Ketu, "Perform Ketu Pooja and offer coconut."),
];

fn lookup(table: &[(Body, &'static str)], body: Body, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|&&(key, _)| key == body)
        .map(|&(_, text)| text)
        .unwrap_or(fallback)
}

/// One gemstone suggestion per body present in the positions map.
pub fn gemstones(positions: &Positions) -> BTreeMap<Body, String> {
    positions
        .keys()
        .map(|&body| (body, lookup(&GEMSTONES, body, NO_GEMSTONE).to_string()))
        .collect()
}

/// One pooja recommendation per body present in the positions map.
pub fn poojas(positions: &Positions) -> BTreeMap<Body, String> {
    positions
        .keys()
        .map(|&body| (body, lookup(&POOJAS, body, NO_POOJA).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ALL_BODIES, BodyPosition, ZodiacSign};

    fn full_positions() -> Positions {
        ALL_BODIES
            .iter()
            .map(|&body| {
                (
                    body,
                    BodyPosition {
                        house: 1,
                        sign: ZodiacSign::Aries,
                        degrees: 0.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn one_nonempty_entry_per_body() {
        let positions = full_positions();
        let gems = gemstones(&positions);
        let rituals = poojas(&positions);
        assert_eq!(gems.len(), 9);
        assert_eq!(rituals.len(), 9);
        for body in ALL_BODIES {
            assert!(!gems[&body].is_empty());
            assert!(!rituals[&body].is_empty());
        }
    }

    #[test]
    fn output_tracks_input_subset() {
        let mut positions = full_positions();
        positions.retain(|&body, _| body == Body::Moon || body == Body::Saturn);
        let gems = gemstones(&positions);
        assert_eq!(gems.len(), 2);
        assert!(gems[&Body::Moon].starts_with("Pearl"));
        assert!(gems[&Body::Saturn].starts_with("Blue Sapphire"));
    }

    #[test]
    fn tables_cover_the_closed_body_set() {
        for body in ALL_BODIES {
            assert_ne!(lookup(&GEMSTONES, body, NO_GEMSTONE), NO_GEMSTONE);
            assert_ne!(lookup(&POOJAS, body, NO_POOJA), NO_POOJA);
        }
    }
}
