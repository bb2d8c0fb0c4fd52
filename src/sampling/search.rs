//! Binary search keyed on a containment predicate.
//!
//! [`binary_search_by_containment`] differs from
//! [`slice::binary_search_by`] in that an unmatched search is an
//! error instead of an insertion point.

use std::cmp::Ordering;
use crate::sampling::errors::SamplingError;
use crate::sampling::segment::SegmentInverse;


/// Three-way containment of `y` in `segment`'s range `[low, high)`.
///
/// - `Less`    : `y >= high`, the owner lies to the right
/// - `Greater` : `y < low`, the owner lies to the left
/// - `Equal`   : `low <= y < high`
///
/// A `y` equal to `high` therefore routes to the next segment.
#[inline]
pub fn containment(segment: &SegmentInverse, y: f64) -> Ordering {
    if segment.contains(y) {
        Ordering::Equal
    } else if y < segment.low() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Returns the index of the element `cmp` reports as `Equal`.
///
/// `cmp` orders each element relative to an implicit target, as in
/// [`slice::binary_search_by`]. `target` is only carried into the error.
///
/// # Errors
/// - [`SamplingError::NotFound`] when no element compares `Equal`.
pub fn binary_search_by_containment<T, F>(
    a: &[T],
    target: f64,
    mut cmp: F,
) -> Result<usize, SamplingError>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = a.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&a[mid]) {
            Ordering::Less    => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal   => return Ok(mid),
        }
    }

    Err(SamplingError::NotFound { target })
}
