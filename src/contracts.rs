//! Runtime contracts for the documented search invariants.
//!
//! This module provides debug-mode assertions that verify the index-range
//! properties every variant promises. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the documented invariants exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Invariant                                |
//! |-----------------------------|------------------------------------------|
//! | `check_found_in_bounds`     | `Found(i)` implies `i < len`             |
//! | `check_insertion_in_bounds` | bound queries return an index `<= len`   |
//! | `check_bounds_ordered`      | `lower_bound <= upper_bound <= len`      |
//! | `check_sorted_ascending`    | binary-search precondition               |
//!
//! The O(1) checks run at the return sites of the search functions. The O(n)
//! sortedness check never runs inside a search path - binary search does not
//! detect unsorted input, by contract. It exists for tests and for
//! [`SortedSlice`](crate::verified::SortedSlice) construction.

use crate::types::SearchResult;

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a membership result stays inside the sequence.
///
/// # Panics (debug builds only)
/// Panics if the result is `Found(i)` with `i >= len`.
#[inline]
pub fn check_found_in_bounds(result: SearchResult, len: usize) {
    if let SearchResult::Found(index) = result {
        debug_assert!(
            index < len,
            "contract violation: Found({}) out of bounds for length {}",
            index,
            len
        );
    }
}

/// Check that an insertion-point query returned a valid insertion index.
///
/// `len` itself is valid - it means "append".
///
/// # Panics (debug builds only)
/// Panics if `index > len`.
#[inline]
pub fn check_insertion_in_bounds(index: usize, len: usize) {
    debug_assert!(
        index <= len,
        "contract violation: insertion index {} > length {}",
        index,
        len
    );
}

/// Check the ordering of a bound pair.
///
/// The half-open range `[lower, upper)` must be a sub-range of `[0, len]`.
///
/// # Panics (debug builds only)
/// Panics if `lower > upper` or `upper > len`.
#[inline]
pub fn check_bounds_ordered(lower: usize, upper: usize, len: usize) {
    debug_assert!(
        lower <= upper,
        "contract violation: lower bound {} > upper bound {}",
        lower,
        upper
    );
    debug_assert!(
        upper <= len,
        "contract violation: upper bound {} > length {}",
        upper,
        len
    );
}

// ============================================================================
// PRECONDITION HELPERS
// ============================================================================

/// Is the slice sorted ascending?
///
/// O(n). This is the binary-search precondition; the search functions do not
/// run it themselves.
#[inline]
pub fn is_sorted_ascending<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Assert the binary-search precondition.
///
/// # Panics (debug builds only)
/// Panics if the slice is not sorted ascending.
#[inline]
pub fn check_sorted_ascending<T: Ord>(seq: &[T]) {
    debug_assert!(
        is_sorted_ascending(seq),
        "contract violation: sequence is not sorted ascending"
    );
}
