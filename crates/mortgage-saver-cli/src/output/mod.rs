pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use clap::ValueEnum;
use serde::Serialize;
use std::error::Error;
use tracing::warn;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

/// A command result that can be printed as a plain-text report as well as
/// through the structured formatters.
pub trait Render: Serialize {
    fn render_text(&self) -> String;

    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Print a command result in the requested format. Warnings go to the log.
pub fn emit<R: Render>(format: &OutputFormat, report: &R) -> Result<(), Box<dyn Error>> {
    for w in report.warnings() {
        warn!("{}", w);
    }

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => json::print_json(&serde_json::to_value(report)?),
        OutputFormat::Table => table::print_table(&serde_json::to_value(report)?),
        OutputFormat::Csv => csv_out::print_csv(&serde_json::to_value(report)?),
        OutputFormat::Minimal => minimal::print_minimal(&serde_json::to_value(report)?),
    }
    Ok(())
}
