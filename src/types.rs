// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by every search variant.
//!
//! Three things live here: the outcome of a membership query, the narrow
//! error taxonomy, and the container abstraction the generic variants search
//! through.
//!
//! | Type           | Purpose                                      |
//! |----------------|----------------------------------------------|
//! | `SearchResult` | `Found(index)` or `NotFound`                 |
//! | `SearchError`  | Invalid-argument conditions                  |
//! | `Sequence`     | Indexable, size-queryable, finite container  |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **SearchResult**: `Found(i)` implies `i < len` for the searched
//!   sequence. `NotFound` is a normal answer, never an error.
//! - **Sequence**: `get(i)` returns `Some` exactly when `i < len()`, and
//!   `len()` is stable for the lifetime of a search call. An impl that
//!   violates this gets `NotFound`, not a panic.
//!
//! Insertion-point queries (`lower_bound`, `upper_bound`) answer "where",
//! not "whether" - they return a bare `usize` in `[0, len]` and never take
//! the `NotFound` path.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

// =============================================================================
// SEARCH RESULT
// =============================================================================

/// Outcome of a membership query against a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchResult {
    /// The target occurs at this index. Always `< len` of the searched
    /// sequence.
    Found(usize),
    /// The target occurs nowhere in the sequence.
    NotFound,
}

impl SearchResult {
    /// Did the query locate the target?
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    /// The located index, if any.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchResult::Found(index) => Some(*index),
            SearchResult::NotFound => None,
        }
    }
}

impl From<Option<usize>> for SearchResult {
    fn from(index: Option<usize>) -> Self {
        match index {
            Some(index) => SearchResult::Found(index),
            None => SearchResult::NotFound,
        }
    }
}

impl From<SearchResult> for Option<usize> {
    fn from(result: SearchResult) -> Self {
        result.index()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found(index) => write!(f, "Found({})", index),
            SearchResult::NotFound => write!(f, "NotFound"),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Invalid-argument conditions.
///
/// The taxonomy is deliberately narrow: every search operation is total over
/// well-formed input, and `NotFound` is a result, not an error. A missing
/// sequence reference - the other invalid argument of the original design -
/// is unrepresentable here, since `&[T]` is never null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchError {
    /// Sentinel search overwrites the final slot, so the sequence must have
    /// one. Zero-length input is rejected up front rather than read out of
    /// bounds.
    EmptySequence,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptySequence => {
                write!(f, "sentinel search requires a sequence of length >= 1")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// =============================================================================
// SEQUENCE ABSTRACTION
// =============================================================================

/// A finite, indexable container with a length known before the search
/// begins.
///
/// The generic search variants are written against this trait instead of raw
/// slices, so any container exposing positional access can be searched:
/// slices, `Vec`, `VecDeque`, or caller-defined collections.
///
/// `get(i)` must return `Some` exactly for `i < len()`, and both must be
/// stable across a single search call.
pub trait Sequence {
    /// Element type of the container.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` when out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// True when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}
