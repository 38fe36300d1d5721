// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the hayseek search primitives.
//!
//! This standalone crate extracts the critical index arithmetic and
//! provides mathematical proofs of its correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no variant indexes out of bounds or underflows `usize`
//! 2. **Midpoint safety**: `low + (high - low) / 2` stays within `[low, high]`
//! 3. **Result bounds**: `Found(i)` implies `i < len`; bound queries return `<= len`
//! 4. **Membership**: a found index holds the target; not-found means absent
//! 5. **Bound ordering**: `lower_bound <= upper_bound <= len`
//! 6. **Sentinel restoration**: the scanned array is unchanged after the call

/// Overflow-safe midpoint of an inclusive bound pair.
pub fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

// ============================================================================
// SEARCH PRIMITIVES (extracted from src/binary.rs and src/linear.rs)
// ============================================================================

/// Closed-interval binary search, returning an index of the target.
pub fn closed_interval(seq: &[i32], target: i32) -> Option<usize> {
    if seq.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = seq.len() - 1;
    while low <= high {
        let mid = midpoint(low, high);
        if seq[mid] == target {
            return Some(mid);
        } else if seq[mid] < target {
            low = mid + 1;
        } else {
            match mid.checked_sub(1) {
                Some(next) => high = next,
                None => return None,
            }
        }
    }
    None
}

/// Smallest index whose element is `>= target`, or `seq.len()` if none.
pub fn lower_bound(seq: &[i32], target: i32) -> usize {
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        if seq[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Smallest index whose element is `> target`, or `seq.len()` if none.
pub fn upper_bound(seq: &[i32], target: i32) -> usize {
    let mut low = 0;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        if seq[mid] <= target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Sentinel linear search; restores the final element before returning.
pub fn sentinel(seq: &mut [i32], target: i32) -> Option<usize> {
    let n = seq.len();
    if n == 0 {
        return None;
    }
    let last = seq[n - 1];
    seq[n - 1] = target;

    let mut i = 0;
    while seq[i] != target {
        i += 1;
    }

    seq[n - 1] = last;

    if i < n - 1 || seq[n - 1] == target {
        Some(i)
    } else {
        None
    }
}

/// Ascending-order check used to constrain proof inputs.
pub fn is_sorted(seq: &[i32]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Bounded array size: large enough to exercise several interval
    /// narrowings, small enough for the model checker.
    const N: usize = 8;

    /// Proof: the midpoint never overflows and stays within the interval,
    /// even at the extremes of usize.
    #[kani::proof]
    fn proof_midpoint_in_interval() {
        let low: usize = kani::any();
        let high: usize = kani::any();
        kani::assume(low <= high);

        let mid = midpoint(low, high);
        assert!(low <= mid);
        assert!(mid <= high);
    }

    /// Proof: closed-interval search never panics, every found index is in
    /// bounds and holds the target, and not-found means the target is
    /// absent from a sorted array.
    #[kani::proof]
    #[kani::unwind(10)]
    fn proof_closed_interval_correct() {
        let seq: [i32; N] = kani::any();
        kani::assume(is_sorted(&seq));
        let target: i32 = kani::any();

        match closed_interval(&seq, target) {
            Some(index) => {
                assert!(index < N);
                assert!(seq[index] == target);
            }
            None => {
                let mut i = 0;
                while i < N {
                    assert!(seq[i] != target);
                    i += 1;
                }
            }
        }
    }

    /// Proof: both bound queries return insertion points within `[0, len]`
    /// in the documented order, and they partition a sorted array.
    #[kani::proof]
    #[kani::unwind(10)]
    fn proof_bounds_partition() {
        let seq: [i32; N] = kani::any();
        kani::assume(is_sorted(&seq));
        let target: i32 = kani::any();

        let lower = lower_bound(&seq, target);
        let upper = upper_bound(&seq, target);

        assert!(lower <= upper);
        assert!(upper <= N);

        let mut i = 0;
        while i < N {
            if i < lower {
                assert!(seq[i] < target);
            } else if i < upper {
                assert!(seq[i] == target);
            } else {
                assert!(seq[i] > target);
            }
            i += 1;
        }
    }

    /// Proof: the sentinel scan never panics, restores the array on every
    /// path, and agrees with a plain scan about membership.
    #[kani::proof]
    #[kani::unwind(10)]
    fn proof_sentinel_restores_and_agrees() {
        let mut seq: [i32; N] = kani::any();
        let snapshot = seq;
        let target: i32 = kani::any();

        let result = sentinel(&mut seq, target);

        let mut i = 0;
        while i < N {
            assert!(seq[i] == snapshot[i]);
            i += 1;
        }

        match result {
            Some(index) => {
                assert!(index < N);
                assert!(snapshot[index] == target);
            }
            None => {
                let mut i = 0;
                while i < N {
                    assert!(snapshot[i] != target);
                    i += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_interval_matches_std() {
        let seq = [1, 3, 3, 5, 7, 9];
        for target in 0..11 {
            assert_eq!(
                closed_interval(&seq, target).is_some(),
                seq.binary_search(&target).is_ok()
            );
        }
    }

    #[test]
    fn test_bounds_on_duplicates() {
        let seq = [1, 3, 3, 5, 7, 9];
        assert_eq!(lower_bound(&seq, 3), 1);
        assert_eq!(upper_bound(&seq, 3), 3);
    }

    #[test]
    fn test_sentinel_restores() {
        let mut seq = [4, 2, 7, 2, 9];
        assert_eq!(sentinel(&mut seq, 9), Some(4));
        assert_eq!(seq, [4, 2, 7, 2, 9]);
        assert_eq!(sentinel(&mut seq, 5), None);
        assert_eq!(seq, [4, 2, 7, 2, 9]);
    }
}
