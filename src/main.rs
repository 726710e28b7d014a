// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use numeric_range::{cli::Args, config::Config, engine, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    log::debug!("{config:?}");

    let output = engine::run(&config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
