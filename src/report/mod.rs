//! Report assembly: combine computed chart data into one value.
//!
//! The assembler performs no computation of its own — it aggregates the
//! position map, ascendant table, and interpretation outputs, and derives
//! the two inputs the chart renderers need.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{
    AscendantTable, Body, ChartInputs, DashaForecast, KundaliReport, Positions,
};

pub mod format;

pub use format::{format_positions, format_report};

/// Identity fields echoed into the report.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub dob: NaiveDate,
    pub tob: NaiveTime,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Interpretation outputs bundled for assembly.
#[derive(Debug, Clone)]
pub struct Interpretations {
    pub yogas: Vec<String>,
    pub dasha: DashaForecast,
    pub gemstones: BTreeMap<Body, String>,
    pub poojas: BTreeMap<Body, String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub guidance: Vec<String>,
}

/// Build the final report value.
pub fn assemble(
    identity: Identity,
    positions: Positions,
    ascendants: AscendantTable,
    interpretations: Interpretations,
) -> KundaliReport {
    KundaliReport {
        name: identity.name,
        dob: identity.dob,
        tob: identity.tob,
        city: identity.city,
        state: identity.state,
        latitude: identity.latitude,
        longitude: identity.longitude,
        positions,
        ascendants,
        yogas: interpretations.yogas,
        dasha: interpretations.dasha,
        gemstones: interpretations.gemstones,
        poojas: interpretations.poojas,
        dos: interpretations.dos,
        donts: interpretations.donts,
        guidance: interpretations.guidance,
    }
}

/// Derive the chart-rendering inputs from a report.
///
/// `house_labels` is identity labeling (house 1 -> "1", ...);
/// `planets_in_houses` projects each body's occupied house.
pub fn chart_inputs(report: &KundaliReport) -> ChartInputs {
    let house_labels: BTreeMap<u8, String> =
        (1..=12u8).map(|house| (house, house.to_string())).collect();

    let planets_in_houses: BTreeMap<Body, u8> = report
        .positions
        .iter()
        .map(|(&body, pos)| (body, pos.house))
        .collect();

    ChartInputs {
        house_labels,
        planets_in_houses,
        ascendants: report.ascendants.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ALL_BODIES, BodyPosition, ZodiacSign};
    use crate::interpret;

    fn sample_report() -> KundaliReport {
        let positions: Positions = ALL_BODIES
            .iter()
            .enumerate()
            .map(|(i, &body)| {
                (
                    body,
                    BodyPosition {
                        house: (i as u8 % 12) + 1,
                        sign: ZodiacSign::from_index(i),
                        degrees: i as f64 * 30.0,
                    },
                )
            })
            .collect();

        let mut ascendants = AscendantTable::new();
        for house in 1..=12u8 {
            ascendants.insert(house, ZodiacSign::Capricorn);
        }

        let interpretations = Interpretations {
            yogas: interpret::yogas(&positions),
            dasha: interpret::dasha(),
            gemstones: interpret::gemstones(&positions),
            poojas: interpret::poojas(&positions),
            dos: interpret::dos_and_donts(&positions).0,
            donts: interpret::dos_and_donts(&positions).1,
            guidance: interpret::guidance(&positions),
        };

        assemble(
            Identity {
                name: "Test".to_string(),
                dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
                tob: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                city: "Delhi".to_string(),
                state: "Delhi".to_string(),
                latitude: 28.6139,
                longitude: 77.2090,
            },
            positions,
            ascendants,
            interpretations,
        )
    }

    #[test]
    fn house_labels_are_identity() {
        let inputs = chart_inputs(&sample_report());
        assert_eq!(inputs.house_labels.len(), 12);
        for house in 1..=12u8 {
            assert_eq!(inputs.house_labels[&house], house.to_string());
        }
    }

    #[test]
    fn planets_in_houses_projects_positions() {
        let report = sample_report();
        let inputs = chart_inputs(&report);
        assert_eq!(inputs.planets_in_houses.len(), report.positions.len());
        for (body, pos) in &report.positions {
            assert_eq!(inputs.planets_in_houses[body], pos.house);
        }
    }
}
