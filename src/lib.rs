// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod input;
pub mod logging;
pub mod options;
pub mod presentation;
pub mod report;
pub mod sample;

pub use numeric_range_domain::{Range, scan};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
