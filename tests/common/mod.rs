//! Shared test utilities and strategies.

#![allow(dead_code)]

use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Element values drawn from a range narrow enough to force duplicates.
pub fn element_strategy() -> impl Strategy<Value = i64> {
    -100i64..100
}

/// Arbitrary-order sequences, including empty ones.
pub fn unordered_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(element_strategy(), 0..64)
}

/// Non-empty arbitrary-order sequences (for the sentinel variant).
pub fn non_empty_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(element_strategy(), 1..64)
}

/// Ascending-sorted sequences, including empty ones.
pub fn sorted_strategy() -> impl Strategy<Value = Vec<i64>> {
    unordered_strategy().prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

/// Targets that may or may not occur in a generated sequence.
pub fn target_strategy() -> impl Strategy<Value = i64> {
    -120i64..120
}
