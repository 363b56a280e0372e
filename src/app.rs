//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the report pipeline (validate, geocode, compute, interpret)
//! - prints the report and the ASCII chart
//! - writes optional JSON exports

use clap::Parser;

use crate::cli::{BirthArgs, ChartArgs, Command};
use crate::domain::ReportConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `kundali` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `kundali` (and `kundali --city Delhi ...`) to behave like
    // `kundali tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args, OutputMode::Full),
        Command::Positions(args) => handle_report(args, OutputMode::PositionsOnly),
        Command::Chart(args) => handle_chart(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    PositionsOnly,
}

fn handle_report(args: BirthArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = report_config_from_args(&args);
    let run = pipeline::generate(&config)?;

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_report(&run.report));
            if !args.no_chart {
                println!(
                    "{}",
                    crate::plot::render_kundli_chart(&run.chart, args.width, args.height)
                );
            }
        }
        OutputMode::PositionsOnly => {
            print!("{}", crate::report::format_positions(&run.report.positions));
        }
    }

    if let Some(path) = &config.export_json {
        crate::io::write_report_json(path, &run.report)?;
    }

    Ok(())
}

fn handle_chart(args: ChartArgs) -> Result<(), AppError> {
    let report = crate::io::read_report_json(&args.report)?;
    let chart = crate::report::chart_inputs(&report);

    println!(
        "{}",
        crate::plot::render_kundli_chart(&chart, args.width, args.height)
    );
    Ok(())
}

fn handle_tui(args: BirthArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

pub fn report_config_from_args(args: &BirthArgs) -> ReportConfig {
    ReportConfig {
        name: args.name.clone(),
        date: args.date.clone(),
        time: args.time.clone(),
        city: args.city.clone(),
        state: args.state.clone(),
        latitude: args.lat,
        longitude: args.lon,
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `kundali` defaults to `kundali tui`.
///
/// Rules:
/// - `kundali`                      -> `kundali tui`
/// - `kundali --city Delhi ...`     -> `kundali tui --city Delhi ...`
/// - `kundali --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "positions" | "chart" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&["kundali"])), argv(&["kundali", "tui"]));
    }

    #[test]
    fn leading_flag_is_routed_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["kundali", "--city", "Delhi"])),
            argv(&["kundali", "tui", "--city", "Delhi"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["kundali", "report", "-d", "2000-01-01"])),
            argv(&["kundali", "report", "-d", "2000-01-01"])
        );
        assert_eq!(rewrite_args(argv(&["kundali", "--help"])), argv(&["kundali", "--help"]));
    }
}
