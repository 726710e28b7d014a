// crates/domain/src/model/range.rs
use std::fmt;

use numeric_range_shared_kernel::DomainResult;
use serde::Serialize;

use crate::analytics::scan;

/// Closed interval `[min, max]` over an ordered numeric type.
///
/// A `Range` is always normalized: `min <= max` holds for every value handed out by this crate
/// whose endpoints are comparable.
/// Use [`Range::new`] when the order of the two endpoints is unknown, or [`Range::of`] to take the
/// extent of a whole sequence in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<N> {
    min: N,
    max: N,
}

impl<N: PartialOrd> Range<N> {
    /// Builds a range from two endpoints given in either order.
    ///
    /// Endpoints are swapped only when `b < a`. Incomparable endpoints (a float NaN on either
    /// side) keep their argument order, so `Range::new(f64::NAN, 1.0)` has a NaN minimum.
    ///
    /// ```
    /// use numeric_range_domain::Range;
    ///
    /// assert_eq!(Range::new(9, -2), Range::new(-2, 9));
    /// assert_eq!(*Range::new(9, -2).min(), -2);
    /// ```
    pub fn new(a: N, b: N) -> Self {
        if b < a { Self { min: b, max: a } } else { Self { min: a, max: b } }
    }

    /// Extent of `values`, scanned once with native ordering.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyInput`](numeric_range_shared_kernel::DomainError::EmptyInput)
    /// when `values` yields nothing.
    pub fn of<I>(values: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: Clone,
    {
        scan::range(values)
    }

    /// `true` if `value` lies within `[min, max]`, endpoints included.
    #[inline]
    pub fn contains(&self, value: &N) -> bool {
        self.min <= *value && *value <= self.max
    }
}

impl<N: PartialOrd + Copy> Range<N> {
    /// Extent of a slice of plain numbers.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyInput`](numeric_range_shared_kernel::DomainError::EmptyInput)
    /// for an empty slice.
    pub fn of_slice(values: &[N]) -> DomainResult<Self> {
        scan::range_of_slice(values)
    }
}

impl<N> Range<N> {
    /// Caller guarantees `min <= max`; only the native scan, which orders by `PartialOrd`, calls this.
    #[inline]
    pub(crate) const fn from_ordered(min: N, max: N) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn min(&self) -> &N {
        &self.min
    }

    #[inline]
    pub const fn max(&self) -> &N {
        &self.max
    }

    /// Consumes the range into its `(min, max)` pair.
    #[inline]
    pub fn into_inner(self) -> (N, N) {
        (self.min, self.max)
    }
}

impl<N: fmt::Display> fmt::Display for Range<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} - {}}}", self.min, self.max)
    }
}
