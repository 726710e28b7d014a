// crates/domain/src/model.rs
pub mod range;

pub use range::Range;
