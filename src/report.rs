// src/report.rs
use std::fmt;

use numeric_range_domain::{DomainResult, Range, scan};
use serde::Serialize;

use crate::{
    options::{Bound, NumberKind},
    sample::Sample,
};

/// The part of a sequence's extent that was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Extent<N> {
    Range(Range<N>),
    Min { min: N },
    Max { max: N },
}

impl<N: Sample> Extent<N> {
    /// Scans `values` once for the requested bound.
    ///
    /// Every bound uses [`Sample::compare`], so `-0` sorts below `0` whichever bound is asked for.
    ///
    /// # Errors
    /// [`DomainError::EmptyInput`](numeric_range_domain::DomainError::EmptyInput) for an empty
    /// sequence.
    pub fn scan<I>(values: I, bound: Bound) -> DomainResult<Self>
    where
        I: IntoIterator<Item = N>,
    {
        match bound {
            Bound::Range => scan::range_by_cmp(values, N::compare).map(Self::Range),
            Bound::Min => scan::min_by(values, N::compare).map(|min| Self::Min { min }),
            Bound::Max => scan::max_by(values, N::compare).map(|max| Self::Max { max }),
        }
    }
}

impl<N> Extent<N> {
    pub fn min(&self) -> Option<&N> {
        match self {
            Self::Range(range) => Some(range.min()),
            Self::Min { min } => Some(min),
            Self::Max { .. } => None,
        }
    }

    pub fn max(&self) -> Option<&N> {
        match self {
            Self::Range(range) => Some(range.max()),
            Self::Max { max } => Some(max),
            Self::Min { .. } => None,
        }
    }
}

impl<N: fmt::Display> fmt::Display for Extent<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) => fmt::Display::fmt(range, f),
            Self::Min { min } => fmt::Display::fmt(min, f),
            Self::Max { max } => fmt::Display::fmt(max, f),
        }
    }
}

/// Result for one input, or for all inputs together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry<N> {
    pub source: String,
    pub count: usize,
    #[serde(flatten)]
    pub extent: Extent<N>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<N> {
    pub kind: NumberKind,
    pub bound: Bound,
    /// Per-input entries; only filled with `--per-file`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<Entry<N>>,
    pub overall: Entry<N>,
}
