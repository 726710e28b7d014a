// src/engine.rs
use log::{debug, info, warn};
use numeric_range_shared_kernel::{ErrorContext, Result};

use crate::{
    config::Config,
    input::{self, InputSource},
    options::NumberKind,
    presentation,
    report::{Entry, Extent, Report},
    sample::Sample,
};

/// Label used for the result over all inputs.
pub const OVERALL: &str = "(all)";

/// Reads every input, scans it and renders the report in the configured format.
///
/// # Errors
/// Fails on unreadable inputs, unparsable tokens (unless lenient), an empty overall sequence,
/// or a serialization failure.
pub fn run(config: &Config) -> Result<String> {
    match config.kind {
        NumberKind::Int => render_report::<i64>(config),
        NumberKind::Float => render_report::<f64>(config),
    }
}

fn render_report<N: Sample>(config: &Config) -> Result<String> {
    let report = build_report::<N>(config)?;
    presentation::render(&report, config.format)
}

/// Builds the report without rendering it.
///
/// # Errors
/// See [`run`].
pub fn build_report<N: Sample>(config: &Config) -> Result<Report<N>> {
    let batches = load_batches::<N>(&config.inputs, config.lenient)?;

    let mut inputs = Vec::new();
    if config.per_file {
        for (source, values) in &batches {
            match Extent::scan(values.iter().copied(), config.bound) {
                Ok(extent) => inputs.push(Entry { source: source.name(), count: values.len(), extent }),
                Err(err) if config.lenient => warn!("{source}: skipped: {err}"),
                Err(err) => return Err(err).with_context(|| format!("scanning {source}")),
            }
        }
    }

    let count: usize = batches.iter().map(|(_, values)| values.len()).sum();
    let all = batches.iter().flat_map(|(_, values)| values.iter().copied());
    let extent = Extent::scan(all, config.bound).context("scanning all inputs")?;
    info!("{count} values from {} input(s): {extent}", batches.len());

    Ok(Report {
        kind: N::KIND,
        bound: config.bound,
        inputs,
        overall: Entry { source: OVERALL.to_string(), count, extent },
    })
}

fn load_batches<N: Sample>(sources: &[InputSource], lenient: bool) -> Result<Vec<(InputSource, Vec<N>)>> {
    let mut batches = Vec::with_capacity(sources.len());
    for source in sources {
        debug!("reading {source}");
        let text = source.read_to_string()?;
        let values = input::parse_samples::<N>(&text, &source.name(), lenient)?;
        batches.push((source.clone(), values));
    }
    Ok(batches)
}
