// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorContext, InputError, InputResult, NumericRangeError, PresentationError,
    PresentationResult, Result,
};

pub mod error;
