// crates/domain/src/analytics/scan.rs
//! Single-pass extent scanning.
//!
//! Every entry point walks its input exactly once. The range scans share one loop that is
//! monomorphized over a crate-private comparison strategy, so native `<`/`>` on primitives costs
//! the same as a hand-written loop while closures and three-way comparators reuse the same
//! traversal.
//!
//! Only the native scan trusts its own bounds. Scans driven by caller-supplied predicates or
//! comparators normalize their result through [`Range::new`], so a reversed or inconsistent
//! comparator can produce a surprising extent but never an inverted one.

use std::cmp::Ordering;

use numeric_range_shared_kernel::{DomainError, DomainResult};

use crate::model::Range;

/// Pairwise ordering tests used by the range scan.
///
/// Both methods answer a strict question. Returning `false` for equal (or incomparable) values
/// leaves the running bound untouched.
pub(crate) trait Comparison<T> {
    fn is_greater(&mut self, value: &T, bound: &T) -> bool;
    fn is_less(&mut self, value: &T, bound: &T) -> bool;
}

/// The type's own `PartialOrd`.
pub(crate) struct Natural;

impl<T: PartialOrd> Comparison<T> for Natural {
    #[inline]
    fn is_greater(&mut self, value: &T, bound: &T) -> bool {
        value > bound
    }

    #[inline]
    fn is_less(&mut self, value: &T, bound: &T) -> bool {
        value < bound
    }
}

/// Two independent predicates.
pub(crate) struct Predicates<G, L> {
    is_greater: G,
    is_less: L,
}

impl<T, G, L> Comparison<T> for Predicates<G, L>
where
    G: FnMut(&T, &T) -> bool,
    L: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn is_greater(&mut self, value: &T, bound: &T) -> bool {
        (self.is_greater)(value, bound)
    }

    #[inline]
    fn is_less(&mut self, value: &T, bound: &T) -> bool {
        (self.is_less)(value, bound)
    }
}

/// A three-way comparator split into the two strict tests.
pub(crate) struct ThreeWay<F>(F);

impl<T, F> Comparison<T> for ThreeWay<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn is_greater(&mut self, value: &T, bound: &T) -> bool {
        (self.0)(value, bound) == Ordering::Greater
    }

    #[inline]
    fn is_less(&mut self, value: &T, bound: &T) -> bool {
        (self.0)(value, bound) == Ordering::Less
    }
}

/// Running `(min, max)` of `values` under `comparison`.
///
/// The greater/less tests are exclusive per element: a value that raises the maximum is not also
/// checked against the minimum. Both bounds start at the first element and only move outward
/// under `comparison`, so they are ordered exactly as far as `comparison` is a consistent order.
fn scan_bounds<I, C>(values: I, mut comparison: C) -> DomainResult<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
    C: Comparison<I::Item>,
{
    let mut iter = values.into_iter();
    let Some(first) = iter.next() else {
        return Err(DomainError::EmptyInput);
    };

    let mut min = first.clone();
    let mut max = first;

    for value in iter {
        if comparison.is_greater(&value, &max) {
            max = value;
        } else if comparison.is_less(&value, &min) {
            min = value;
        }
    }

    Ok((min, max))
}

/// Extent of `values` using the type's native ordering.
///
/// For floating point input an element that is incomparable with the running bounds (NaN) never
/// replaces them; if the first element is NaN both bounds stay NaN. Use [`range_by_cmp`] with
/// `f64::total_cmp` when NaN must be ordered too.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
///
/// ```
/// use numeric_range_domain::scan;
///
/// let range = scan::range([3, -500, 5000]).unwrap();
/// assert_eq!(range.to_string(), "{-500 - 5000}");
/// ```
pub fn range<I>(values: I) -> DomainResult<Range<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    // `Natural` is the same order `min <= max` is stated in.
    let (min, max) = scan_bounds(values, Natural)?;
    Ok(Range::from_ordered(min, max))
}

/// Extent of a slice of plain numbers. Elements are copied out; nothing is allocated.
///
/// # Errors
/// [`DomainError::EmptyInput`] for an empty slice.
pub fn range_of_slice<N>(values: &[N]) -> DomainResult<Range<N>>
where
    N: PartialOrd + Copy,
{
    range(values.iter().copied())
}

/// Extent of `values` with caller-supplied strict predicates.
///
/// `is_greater(value, bound)` and `is_less(value, bound)` should describe the same order. The
/// bounds they select are normalized with [`Range::new`], so predicates that disagree with the
/// type's `PartialOrd` (reversed ones included) still yield `min <= max`.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn range_by<I, G, L>(values: I, is_greater: G, is_less: L) -> DomainResult<Range<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
    G: FnMut(&I::Item, &I::Item) -> bool,
    L: FnMut(&I::Item, &I::Item) -> bool,
{
    let (min, max) = scan_bounds(values, Predicates { is_greater, is_less })?;
    Ok(Range::new(min, max))
}

/// Extent of `values` under a three-way comparator such as `Ord::cmp` or `f64::total_cmp`.
///
/// The selected bounds are normalized with [`Range::new`], as for [`range_by`].
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
///
/// ```
/// use numeric_range_domain::scan;
///
/// let range = scan::range_by_cmp([4, 9, -2], |a: &i32, b: &i32| b.cmp(a)).unwrap();
/// assert_eq!(range.into_inner(), (-2, 9));
/// ```
pub fn range_by_cmp<I, F>(values: I, compare: F) -> DomainResult<Range<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let (min, max) = scan_bounds(values, ThreeWay(compare))?;
    Ok(Range::new(min, max))
}

/// Extent of `values` under a three-way comparator, returned as a plain `(min, max)` pair.
///
/// Use this for types without `PartialOrd`. The pair is only as ordered as `compare` is
/// consistent, which is why it is not a [`Range`].
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn bounds_by_cmp<I, F>(values: I, compare: F) -> DomainResult<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    scan_bounds(values, ThreeWay(compare))
}

/// Smallest element of `values`. The first of several equal minima is returned.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn min<I>(values: I) -> DomainResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    min_by(values, Ord::cmp)
}

/// Largest element of `values`. The first of several equal maxima is returned.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn max<I>(values: I) -> DomainResult<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    max_by(values, Ord::cmp)
}

/// Smallest element of `values` under `compare`.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn min_by<I, F>(values: I, mut compare: F) -> DomainResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = values.into_iter();
    let mut min = iter.next().ok_or(DomainError::EmptyInput)?;
    for value in iter {
        if compare(&value, &min) == Ordering::Less {
            min = value;
        }
    }
    Ok(min)
}

/// Largest element of `values` under `compare`.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `values` yields nothing.
pub fn max_by<I, F>(values: I, mut compare: F) -> DomainResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut iter = values.into_iter();
    let mut max = iter.next().ok_or(DomainError::EmptyInput)?;
    for value in iter {
        if compare(&value, &max) == Ordering::Greater {
            max = value;
        }
    }
    Ok(max)
}
