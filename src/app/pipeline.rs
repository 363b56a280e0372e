//! Shared report pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> resolve coordinates -> positions -> ascendants -> interpret -> assemble
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//!
//! Any failure aborts the whole run before assembly; there is no partial
//! report. Validation runs before the geocoding call, and the geocoding call
//! runs before any astronomical computation.

use crate::data::GeocodeClient;
use crate::domain::{ChartInputs, KundaliReport, ReportConfig};
use crate::error::AppError;
use crate::interpret;
use crate::natal;
use crate::report::{self, Identity, Interpretations};

/// All computed outputs of a single report run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub report: KundaliReport,
    pub chart: ChartInputs,
}

/// Execute the full pipeline and return the assembled report.
pub fn generate(config: &ReportConfig) -> Result<RunOutput, AppError> {
    // 1) Validate birth date/time before anything else.
    let dob = natal::parse_date(&config.date)?;
    let tob = natal::parse_time(&config.time)?;

    // 2) Resolve coordinates (explicit flags bypass the geocoder).
    let (latitude, longitude) = resolve_coordinates(config)?;

    generate_at(config, dob, tob, latitude, longitude)
}

/// Execute the pipeline with pre-resolved coordinates.
///
/// This is useful for the TUI where a re-render should not re-geocode, and
/// for tests that must not touch the network.
pub fn generate_at(
    config: &ReportConfig,
    dob: chrono::NaiveDate,
    tob: chrono::NaiveTime,
    latitude: f64,
    longitude: f64,
) -> Result<RunOutput, AppError> {
    // 3) Astronomical computation.
    let positions = natal::body_positions(&config.date, &config.time, latitude, longitude)?;
    let ascendants = natal::ascendants(&config.date, &config.time, latitude, longitude)?;

    // 4) Interpretation (pure).
    let (dos, donts) = interpret::dos_and_donts(&positions);
    let interpretations = Interpretations {
        yogas: interpret::yogas(&positions),
        dasha: interpret::dasha(),
        gemstones: interpret::gemstones(&positions),
        poojas: interpret::poojas(&positions),
        dos,
        donts,
        guidance: interpret::guidance(&positions),
    };

    // 5) Assembly.
    let report = report::assemble(
        Identity {
            name: config.name.clone(),
            dob,
            tob,
            city: config.city.clone(),
            state: config.state.clone(),
            latitude,
            longitude,
        },
        positions,
        ascendants,
        interpretations,
    );
    let chart = report::chart_inputs(&report);

    Ok(RunOutput { report, chart })
}

fn resolve_coordinates(config: &ReportConfig) -> Result<(f64, f64), AppError> {
    match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => Ok((lat, lon)),
        (None, None) => {
            let client = GeocodeClient::from_env()?;
            client.resolve(&config.city, &config.state)
        }
        _ => Err(AppError::geocoding(
            "Provide both --lat and --lon, or neither.",
        )),
    }
}
