// src/logging.rs
use log::LevelFilter;

/// Maps `-v` occurrences to a level filter. Warnings are always shown.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG`, when set, overrides the verbosity flag.
pub fn init(verbosity: u8) {
    let installed = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    // A logger installed earlier (by a test harness, say) keeps receiving the records.
    if let Err(err) = installed {
        log::debug!("keeping the existing logger: {err}");
    }
}
