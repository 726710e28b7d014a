// src/presentation.rs
use std::fmt::Write;

use numeric_range_shared_kernel::Result;

use crate::{
    options::OutputFormat,
    report::{Entry, Report},
    sample::Sample,
};

/// Renders `report` as a string ending in a newline.
///
/// # Errors
/// Returns a presentation error if JSON or YAML serialization fails.
pub fn render<N: Sample>(report: &Report<N>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Csv => Ok(render_csv(report)),
    }
}

fn render_text<N: Sample>(report: &Report<N>) -> String {
    if report.inputs.is_empty() {
        return format!("{}\n", report.overall.extent);
    }

    let width = report.inputs.iter().map(|e| e.source.len()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in report.inputs.iter().chain(std::iter::once(&report.overall)) {
        let _ = writeln!(out, "{:<width$}  {:>8}  {}", entry.source, entry.count, entry.extent);
    }
    out
}

fn render_csv<N: Sample>(report: &Report<N>) -> String {
    let mut out = String::from("source,count,min,max\n");
    for entry in report.inputs.iter().chain(std::iter::once(&report.overall)) {
        write_csv_row(&mut out, entry);
    }
    out
}

fn write_csv_row<N: Sample>(out: &mut String, entry: &Entry<N>) {
    let min = entry.extent.min().map(ToString::to_string).unwrap_or_default();
    let max = entry.extent.max().map(ToString::to_string).unwrap_or_default();
    let _ = writeln!(out, "{},{},{min},{max}", escape_csv(&entry.source), entry.count);
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
