// src/cli/mod.rs
pub mod args;
pub mod value_enum;

pub use args::Args;
pub use value_enum::{CliBound, CliNumberKind, CliOutputFormat};
