//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed 9-body set (`Body`) and the 12 zodiac signs (`ZodiacSign`)
//! - the observer context and per-body positions (`Observer`, `BodyPosition`)
//! - the assembled report and chart inputs (`KundaliReport`, `ChartInputs`)

pub mod types;

pub use types::*;
