//! Chart rendering helpers shared by the CLI and TUI.
//!
//! - deterministic ASCII rendering (`ascii`)
//! - anchor geometry for the diamond layout (`layout`)

pub mod ascii;
pub mod layout;

pub use ascii::render_kundli_chart;
