//! Yoga identification and the do/don't advice derived from the same rules.

use crate::domain::{Body, Positions};

/// Returned when no rule matches.
pub const NO_YOGAS: &str = "No significant yogas identified.";

/// One house-placement rule.
///
/// The same three rules drive both `yogas` and `dos_and_donts`; they differ
/// only in how a miss is reported (omitted vs. a "don't" entry).
struct HouseRule {
    body: Body,
    house: u8,
    yoga: &'static str,
    do_text: &'static str,
    dont_text: &'static str,
}

/// Evaluation order is fixed: Jupiter, then Venus, then Saturn.
const HOUSE_RULES: [HouseRule; 3] = [
    HouseRule {
        body: Body::Jupiter,
        house: 9,
        yoga: "Raja Yoga: Jupiter in the 9th house indicates good fortune and success.",
        do_text: "Engage in spiritual practices and charity.",
        dont_text: "Avoid excessive pride and arrogance.",
    },
    HouseRule {
        body: Body::Venus,
        house: 7,
        yoga: "Dhana Yoga: Venus in the 7th house signifies wealth and good relationships.",
        do_text: "Nurture relationships and focus on creativity.",
        dont_text: "Avoid superficial relationships.",
    },
    HouseRule {
        body: Body::Saturn,
        house: 10,
        yoga: "Karma Yoga: Saturn in the 10th house indicates discipline and career growth.",
        do_text: "Work hard and be disciplined in your career.",
        dont_text: "Avoid laziness and procrastination.",
    },
];

fn rule_matches(rule: &HouseRule, positions: &Positions) -> bool {
    positions
        .get(&rule.body)
        .is_some_and(|pos| pos.house == rule.house)
}

/// Yoga statements for every matching rule, in rule order.
///
/// All matches are included (not just the first); when none match, a single
/// sentinel entry is returned.
pub fn yogas(positions: &Positions) -> Vec<String> {
    let mut out: Vec<String> = HOUSE_RULES
        .iter()
        .filter(|rule| rule_matches(rule, positions))
        .map(|rule| rule.yoga.to_string())
        .collect();

    if out.is_empty() {
        out.push(NO_YOGAS.to_string());
    }
    out
}

/// One verdict per rule: a "do" when the placement holds, otherwise a
/// "don't" for that same rule slot. The two lists always total 3 entries.
pub fn dos_and_donts(positions: &Positions) -> (Vec<String>, Vec<String>) {
    let mut dos = Vec::new();
    let mut donts = Vec::new();

    for rule in &HOUSE_RULES {
        if rule_matches(rule, positions) {
            dos.push(rule.do_text.to_string());
        } else {
            donts.push(rule.dont_text.to_string());
        }
    }

    (dos, donts)
}
