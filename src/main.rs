//! Quake Dashboard - builds the dashboard views from an earthquake CSV.
//!
//! Usage: `quake_dashboard [INPUT.csv] [OUTPUT.json]`. The report goes to
//! stdout when no output path is given.

use anyhow::{Context, Result};
use quake_dashboard::{load_catalog, DashboardReport, ReportConfig};
use std::fs;

const DEFAULT_INPUT: &str = "earthquakes.csv";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next();

    let catalog =
        load_catalog(&input).with_context(|| format!("Failed to build catalog from {input}"))?;

    let report = DashboardReport::build(&catalog, &ReportConfig::default());
    if report.is_empty() {
        log::warn!("No usable records in {input}; writing an empty report");
    }

    let json = report.to_json().context("Failed to serialize report")?;
    match output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("Failed to write {path}"))?;
            log::info!("Report written to {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}
