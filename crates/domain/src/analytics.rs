// crates/domain/src/analytics.rs
pub mod scan;
