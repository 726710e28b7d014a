#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;

pub use analytics::scan;
pub use model::Range;
pub use numeric_range_shared_kernel::{DomainError, DomainResult};
