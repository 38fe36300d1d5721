//! Binary search over an ascending-sorted sequence.
//!
//! Every function here exploits sort order to answer in O(log n)
//! comparisons with O(1) auxiliary space (O(log n) call stack for the
//! recursive variant). The shared algorithmic rule: compute a midpoint
//! between two index bounds, compare the element there against the target,
//! and narrow the bound on the side that must contain the target or the
//! insertion point.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **MIDPOINT_SAFE**: midpoints are `low + (high - low) / 2`, never
//!    `(low + high) / 2` - the latter overflows for large indices.
//! 2. **BOUNDS_IN_RANGE**: index arithmetic never leaves `[0, len]`; the
//!    closed-interval `high = mid - 1` step terminates explicitly at
//!    `mid == 0` instead of underflowing `usize`.
//! 3. **SORTED_INPUT**: callers guarantee ascending order. The functions do
//!    not detect violations - behavior on unsorted input is unspecified.
//!    [`SortedSlice`](crate::verified::SortedSlice) checks once at
//!    construction for callers who want the precondition enforced.
//!
//! Membership variants (`closed_interval`, `open_interval`, `recursive`,
//! `generic`, `exponential`) agree on found-ness for every input; when the
//! target occurs more than once, each variant may report a different
//! occurrence. The bound queries (`lower_bound`, `upper_bound`,
//! `equal_range`) answer "where would it go" and always succeed.

use std::cmp::Ordering;
use std::ops::Range;

use crate::contracts;
use crate::types::{SearchResult, Sequence};

/// Iterative search over the inclusive interval `[low, high]`, starting
/// from `[0, len - 1]`.
///
/// Loop invariant: if the target is present, it lies within `[low, high]`.
/// Terminates with `NotFound` once the interval empties.
pub fn closed_interval<T: Ord>(seq: &[T], target: &T) -> SearchResult {
    let result = match seq.len() {
        0 => SearchResult::NotFound,
        n => closed_interval_within(seq, target, 0, n - 1),
    };
    contracts::check_found_in_bounds(result, seq.len());
    result
}

/// Closed-interval search restricted to `[low, high]`.
///
/// Shared by [`closed_interval`] and the bracket step of [`exponential`].
/// Requires `high < seq.len()`.
fn closed_interval_within<T: Ord>(
    seq: &[T],
    target: &T,
    mut low: usize,
    mut high: usize,
) -> SearchResult {
    while low <= high {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(target) {
            Ordering::Equal => return SearchResult::Found(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => high = next,
                // mid == 0: the interval just emptied below index zero.
                None => return SearchResult::NotFound,
            },
        }
    }
    SearchResult::NotFound
}

/// Iterative search over the half-open interval `[low, high)`, starting
/// from `[0, len)`.
///
/// Equivalent found-ness to [`closed_interval`] for all inputs; kept
/// because it composes naturally with APIs that express ranges as
/// half-open. Terminates when `low == high`.
pub fn open_interval<T: Ord>(seq: &[T], target: &T) -> SearchResult {
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match seq[mid].cmp(target) {
            Ordering::Equal => return SearchResult::Found(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    SearchResult::NotFound
}

/// Closed-interval semantics via bound-narrowing recursion.
///
/// Returns results identical to [`closed_interval`] for every input; the
/// same interval narrowing, expressed as recursion of depth O(log n).
pub fn recursive<T: Ord>(seq: &[T], target: &T) -> SearchResult {
    match seq.len() {
        0 => SearchResult::NotFound,
        n => recurse(seq, target, 0, n - 1),
    }
}

fn recurse<T: Ord>(seq: &[T], target: &T, low: usize, high: usize) -> SearchResult {
    if low > high {
        return SearchResult::NotFound;
    }
    let mid = low + (high - low) / 2;
    match seq[mid].cmp(target) {
        Ordering::Equal => SearchResult::Found(mid),
        Ordering::Less => recurse(seq, target, mid + 1, high),
        Ordering::Greater => match mid.checked_sub(1) {
            Some(next) => recurse(seq, target, low, next),
            None => SearchResult::NotFound,
        },
    }
}

/// Closed-interval search over any [`Sequence`] with a total order.
///
/// For sorted containers exposed through the indexable, size-queryable
/// abstraction rather than a raw slice.
pub fn generic<S>(seq: &S, target: &S::Item) -> SearchResult
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    if seq.is_empty() {
        return SearchResult::NotFound;
    }
    let mut low = 0;
    let mut high = seq.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        // get() only fails if len() lied; bail rather than panic.
        let Some(item) = seq.get(mid) else {
            return SearchResult::NotFound;
        };
        match item.cmp(target) {
            Ordering::Equal => return SearchResult::Found(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(next) => high = next,
                None => return SearchResult::NotFound,
            },
        }
    }
    SearchResult::NotFound
}

/// Smallest index whose element is `>= target`, or `len` if none.
///
/// The insertion point that keeps the sequence sorted while placing the
/// target before any run of equal elements. This is a "where" query: it
/// always succeeds and never returns `NotFound`.
pub fn lower_bound<T: Ord>(seq: &[T], target: &T) -> usize {
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if seq[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    contracts::check_insertion_in_bounds(low, seq.len());
    low
}

/// Smallest index whose element is `> target`, or `len` if none.
///
/// The insertion point after any run of elements equal to the target.
/// `lower_bound(s, t) <= upper_bound(s, t)` holds for every input, and the
/// half-open range between them is exactly the equal run.
pub fn upper_bound<T: Ord>(seq: &[T], target: &T) -> usize {
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if seq[mid] <= *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    contracts::check_insertion_in_bounds(low, seq.len());
    low
}

/// The run of elements equal to `target`, as `lower_bound..upper_bound`.
///
/// Empty exactly when the target is absent.
pub fn equal_range<T: Ord>(seq: &[T], target: &T) -> Range<usize> {
    let lower = lower_bound(seq, target);
    let upper = upper_bound(seq, target);
    contracts::check_bounds_ordered(lower, upper, seq.len());
    lower..upper
}

/// Exponential probe followed by a bracketed closed-interval search.
///
/// Probes indices `1, 2, 4, 8, ...` until the probed element is
/// `>= target` or the probe leaves the sequence, then searches the bracket
/// `[probe / 2, min(probe, len - 1)]`. Useful when the effective length is
/// unknown or very large and the target sits near the front: the cost is
/// O(log i) in the target's position rather than O(log n).
///
/// Found-ness equals [`closed_interval`] over the full slice; an empty
/// sequence returns `NotFound` without probing.
pub fn exponential<T: Ord>(seq: &[T], target: &T) -> SearchResult {
    if seq.is_empty() {
        return SearchResult::NotFound;
    }
    let mut bound = 1;
    while bound < seq.len() && seq[bound] < *target {
        bound *= 2;
    }
    let result = closed_interval_within(seq, target, bound / 2, bound.min(seq.len() - 1));
    contracts::check_found_in_bounds(result, seq.len());
    result
}
