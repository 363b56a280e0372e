//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during report generation
//! - exported to JSON and reloaded later for chart rendering
//!
//! Two deliberate domain simplifications live here and must not be "fixed",
//! because they are observable behavior:
//!
//! - Rahu and Ketu are computed as Neptune and Uranus (proxy bodies), not as
//!   true lunar nodes.
//! - The "ascendant" table is the Sun's sign sampled at 2-hour steps from the
//!   birth time, not a horizon-rise computation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The 9 tracked bodies, in traditional order.
///
/// This set is fixed and identical across the position calculator and every
/// interpretation table. `BTreeMap` keys rely on the derive order matching
/// `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All 9 bodies in traditional order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// Display name for report output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Two-letter abbreviation used on the chart.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Sun => "Su",
            Self::Moon => "Mo",
            Self::Mars => "Ma",
            Self::Mercury => "Me",
            Self::Jupiter => "Ju",
            Self::Venus => "Ve",
            Self::Saturn => "Sa",
            Self::Rahu => "Ra",
            Self::Ketu => "Ke",
        }
    }

    /// All 9 bodies in traditional order.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}

/// The 12 zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (Aries = 0 .. Pisces = 11).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Full sign name (what the report shows).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation (chart labels, compact tables).
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Aries => "Ari",
            Self::Taurus => "Tau",
            Self::Gemini => "Gem",
            Self::Cancer => "Cnc",
            Self::Leo => "Leo",
            Self::Virgo => "Vir",
            Self::Libra => "Lib",
            Self::Scorpio => "Sco",
            Self::Sagittarius => "Sgr",
            Self::Capricorn => "Cap",
            Self::Aquarius => "Aqr",
            Self::Pisces => "Psc",
        }
    }

    /// Sign for a 0-based sector index (wraps at 12).
    pub fn from_index(index: usize) -> ZodiacSign {
        ALL_SIGNS[index % 12]
    }
}

/// Observer context for one ephemeris evaluation.
///
/// This is an immutable value: the ascendant scan builds a *new* observer per
/// 2-hour step rather than mutating a shared one, so no two computations can
/// alias the same clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Civil timestamp, treated as UTC.
    pub when: NaiveDateTime,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64, when: NaiveDateTime) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            when,
        }
    }

    /// A copy of this observer with the clock advanced by `hours`.
    pub fn advanced_by_hours(&self, hours: i64) -> Self {
        Self {
            when: self.when + chrono::Duration::hours(hours),
            ..*self
        }
    }
}

/// One body's computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// House number, 1..=12, derived from right ascension.
    pub house: u8,
    /// Zodiac sign. The original chart calls this slot the "nakshatra" but
    /// stores the sign component of the constellation lookup; we keep that.
    pub sign: ZodiacSign,
    /// Right ascension in degrees [0, 360), rounded to 2 decimal places.
    pub degrees: f64,
}

/// Ordered house (1..=12) -> rising-sign mapping, one entry per 2-hour step
/// starting at the birth timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AscendantTable {
    entries: BTreeMap<u8, ZodiacSign>,
}

impl AscendantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, house: u8, sign: ZodiacSign) {
        self.entries.insert(house, sign);
    }

    pub fn sign_for(&self, house: u8) -> Option<ZodiacSign> {
        self.entries.get(&house).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in house order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, ZodiacSign)> + '_ {
        self.entries.iter().map(|(&h, &s)| (h, s))
    }
}

/// The constant 3-stage dasha sequence.
///
/// Static by design: the original returns the same forecast for every chart,
/// flagged there as a known simplification rather than a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaForecast {
    pub current: Body,
    pub next: Body,
    pub following: Body,
}

impl DashaForecast {
    /// (label, body) pairs in display order.
    pub fn periods(&self) -> [(&'static str, Body); 3] {
        [
            ("Current Dasha", self.current),
            ("Next Dasha", self.next),
            ("Following Dasha", self.following),
        ]
    }
}

/// Positions map keyed by body, ordered by `Body`'s traditional order.
pub type Positions = BTreeMap<Body, BodyPosition>;

/// The full assembled report.
///
/// This is pure data: everything a renderer (text, ASCII chart, TUI) needs,
/// with no computation left to do. It round-trips through JSON so a saved
/// report can be re-charted later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KundaliReport {
    pub name: String,
    pub dob: NaiveDate,
    pub tob: NaiveTime,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,

    pub positions: Positions,
    pub ascendants: AscendantTable,

    pub yogas: Vec<String>,
    pub dasha: DashaForecast,
    pub gemstones: BTreeMap<Body, String>,
    pub poojas: BTreeMap<Body, String>,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
    pub guidance: Vec<String>,
}

/// Chart-rendering inputs derived from a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    /// House index -> its own number as a string (identity labeling 1..12).
    pub house_labels: BTreeMap<u8, String>,
    /// Body -> occupied house.
    pub planets_in_houses: BTreeMap<Body, u8>,
    /// Rising sign per house step.
    pub ascendants: AscendantTable,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags or TUI form fields (plus defaults).
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub name: String,
    /// Birth date as typed, validated against `YYYY-MM-DD`.
    pub date: String,
    /// Birth time as typed, validated against `HH:MM:SS`.
    pub time: String,
    pub city: String,
    pub state: String,

    /// Explicit coordinates; when both are set the geocoder is skipped.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub export_json: Option<PathBuf>,
}
