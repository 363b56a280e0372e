//! Formatted terminal output for a report.
//!
//! We keep formatting code in one place so:
//! - the computation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{KundaliReport, Positions};

/// Format the full report in its section order: identity, ascendants,
/// positions, yogas, dashas, gemstones, poojas, do's, don'ts, guidance.
pub fn format_report(report: &KundaliReport) -> String {
    let mut out = String::new();

    out.push_str("=== Kundali Report ===\n");
    out.push_str(&format!("Name: {}\n", report.name));
    out.push_str(&format!("Date of Birth: {}\n", report.dob));
    out.push_str(&format!("Time of Birth: {}\n", report.tob));
    out.push_str(&format!(
        "Birth Location: {}, {} (Lat: {}, Lon: {})\n",
        report.city, report.state, report.latitude, report.longitude
    ));

    out.push_str("\nAll Ascendants (Lagna):\n");
    for (house, sign) in report.ascendants.iter() {
        out.push_str(&format!("House {house}: {}\n", sign.name()));
    }

    out.push_str("\nPlanetary Positions:\n");
    out.push_str(&format_positions(&report.positions));

    out.push_str("\nYogas Identified:\n");
    for yoga in &report.yogas {
        out.push_str(&format!("- {yoga}\n"));
    }

    out.push_str("\nDasha Periods:\n");
    for (label, body) in report.dasha.periods() {
        out.push_str(&format!("{label}: {}\n", body.name()));
    }

    out.push_str("\nSuggested Gemstones:\n");
    for (body, gemstone) in &report.gemstones {
        out.push_str(&format!("{}: {gemstone}\n", body.name()));
    }

    out.push_str("\nRecommended Poojas:\n");
    for (body, pooja) in &report.poojas {
        out.push_str(&format!("{}: {pooja}\n", body.name()));
    }

    out.push_str("\nDo's:\n");
    for entry in &report.dos {
        out.push_str(&format!("- {entry}\n"));
    }

    out.push_str("\nDon'ts:\n");
    for entry in &report.donts {
        out.push_str(&format!("- {entry}\n"));
    }

    out.push_str("\nSpiritual Guidance:\n");
    for advice in &report.guidance {
        out.push_str(&format!("- {advice}\n"));
    }

    out
}

/// Format the positions table on its own (used by `kundali positions`).
pub fn format_positions(positions: &Positions) -> String {
    let mut out = String::new();
    for (body, pos) in positions {
        out.push_str(&format!(
            "{:<8} House {:>2}, Nakshatra: {:<12} Degrees: {:.2}\n",
            body.name(),
            pos.house,
            pos.sign.name(),
            pos.degrees
        ));
    }
    out
}
