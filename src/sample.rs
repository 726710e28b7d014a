// src/sample.rs
use std::{cmp::Ordering, fmt::Display};

use serde::Serialize;

use crate::options::NumberKind;

/// A numeric type the CLI can read and scan.
pub trait Sample: Copy + PartialOrd + Display + Serialize {
    const KIND: NumberKind;

    /// Parses one input token. `_` digit separators are accepted.
    ///
    /// # Errors
    /// Returns a human-readable reason when the token is not a usable number.
    fn parse_token(token: &str) -> Result<Self, String>;

    /// Total order used by every bound the report scans.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Sample for i64 {
    const KIND: NumberKind = NumberKind::Int;

    fn parse_token(token: &str) -> Result<Self, String> {
        token.replace('_', "").parse::<Self>().map_err(|err| err.to_string())
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Sample for f64 {
    const KIND: NumberKind = NumberKind::Float;

    fn parse_token(token: &str) -> Result<Self, String> {
        let value = token.replace('_', "").parse::<Self>().map_err(|err| err.to_string())?;
        // NaN has no place in a min/max ordering; keeping it out makes `<`/`>` total.
        if value.is_nan() {
            return Err("NaN is not an orderable number".to_string());
        }
        Ok(value)
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
