//! OpenCage forward geocoding: city + state -> latitude/longitude.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::AppError;

const BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// The upstream contract has no timeout; we bound the call defensively so a
/// stalled lookup fails the request instead of hanging it. Success/failure
/// semantics are unchanged.
const TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub struct GeocodeClient {
    client: Client,
    api_key: String,
}

impl GeocodeClient {
    /// Build a client from `OPENCAGE_API_KEY` (environment or `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("OPENCAGE_API_KEY")
            .map_err(|_| AppError::geocoding("Missing OPENCAGE_API_KEY in environment (.env)."))?;
        Self::with_api_key(api_key)
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::geocoding(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Resolve a city/state pair to coordinates.
    ///
    /// One synchronous call, no retry. An empty result set is the "not
    /// found" signal and aborts the request before any astronomical work.
    pub fn resolve(&self, city: &str, state: &str) -> Result<(f64, f64), AppError> {
        let query = format!("{city}, {state}");

        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("limit", "1"),
            ])
            .send()
            .map_err(|e| AppError::geocoding(format!("Geocoding request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::geocoding(format!(
                "Geocoding request failed with status {}.",
                resp.status()
            )));
        }

        let body: GeocodeResponse = resp
            .json()
            .map_err(|e| AppError::geocoding(format!("Failed to parse geocoding response: {e}")))?;

        first_coordinates(&body).ok_or_else(|| {
            AppError::geocoding(format!(
                "Unable to fetch latitude and longitude for '{query}'. Check city and state input."
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn first_coordinates(body: &GeocodeResponse) -> Option<(f64, f64)> {
    body.results
        .first()
        .map(|result| (result.geometry.lat, result.geometry.lng))
}
