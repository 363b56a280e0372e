//! Command-line parsing for the Kundali generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the astronomical/interpretation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kundali", version, about = "Vedic Kundali chart generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the full Kundali report and render the diamond chart.
    Report(BirthArgs),
    /// Print the planetary positions table only (useful for scripting).
    Positions(BirthArgs),
    /// Render the diamond chart from a previously exported report JSON.
    Chart(ChartArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying pipeline as `kundali report`, but takes
    /// its inputs from a form and renders the chart with Ratatui.
    Tui(BirthArgs),
}

/// Birth details shared by the computing subcommands.
///
/// Date and time default to empty strings so the TUI can start from a blank
/// form; the pipeline validates them before any computation.
#[derive(Debug, Parser, Clone)]
pub struct BirthArgs {
    /// Name to print on the report.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Birth date (YYYY-MM-DD).
    #[arg(short = 'd', long, default_value = "")]
    pub date: String,

    /// Birth time (HH:MM:SS, 24-hour).
    #[arg(short = 't', long, default_value = "")]
    pub time: String,

    /// Birth city, geocoded together with --state.
    #[arg(long, default_value = "")]
    pub city: String,

    /// Birth state or region.
    #[arg(long, default_value = "")]
    pub state: String,

    /// Latitude in degrees. With --lon, skips the geocoding lookup.
    #[arg(long)]
    pub lat: Option<f64>,

    /// Longitude in degrees. With --lat, skips the geocoding lookup.
    #[arg(long)]
    pub lon: Option<f64>,

    /// Export the assembled report to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Chart width (columns).
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 32)]
    pub height: usize,

    /// Skip the ASCII chart after the report.
    #[arg(long)]
    pub no_chart: bool,
}

/// Options for charting a saved report.
#[derive(Debug, Parser)]
pub struct ChartArgs {
    /// Report JSON file produced by `kundali report --export-json`.
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,

    /// Chart width (columns).
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 32)]
    pub height: usize,
}
