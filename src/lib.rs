//! Sequential and sorted-slice search primitives with contract-checked
//! invariants.
//!
//! Two sibling engines, both pure function libraries over ordered,
//! indexable sequences: a linear engine with no ordering precondition, and
//! a binary engine that exploits ascending sort order. Each variant encodes
//! a distinct invariant over index ranges and is exercised at every
//! boundary condition - empty input, single element, absent target, target
//! at either edge, duplicate elements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   types.rs  │────▶│  linear.rs   │     │  binary.rs   │
//! │(SearchResult│     │ (unordered   │     │ (sorted-only │
//! │  Sequence)  │     │    scan)     │     │   probing)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                contracts.rs / verified.rs               │
//! │   (debug-mode invariant checks, SortedSlice wrapper)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | `types`     | `SearchResult`, `SearchError`, `Sequence`           |
//! | `linear`    | iterative / recursive / sentinel / generic scan     |
//! | `binary`    | closed, open, recursive, generic, bounds, exponential |
//! | `contracts` | debug-mode assertions for the index-range invariants |
//! | `verified`  | `SortedSlice` - sortedness checked once at the seam |
//!
//! # Usage
//!
//! ```
//! use hayseek::{binary, linear, SearchResult};
//!
//! let unordered = [4, 2, 7, 2, 9];
//! assert_eq!(linear::iterative(&unordered, &7), SearchResult::Found(2));
//!
//! let sorted = [1, 3, 3, 5, 7, 9];
//! assert!(binary::closed_interval(&sorted, &5).is_found());
//! assert_eq!(binary::lower_bound(&sorted, &3), 1);
//! assert_eq!(binary::upper_bound(&sorted, &3), 3);
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and bounded; there is no cancellation or
//! timeout model. The read-only variants are safe to run concurrently over
//! the same sequence. `linear::sentinel` performs a transient write and is
//! not safe to call while any other thread touches the same sequence - it
//! takes `&mut [T]`, so safe Rust enforces the exclusion the contract
//! places on the caller.

// Module declarations
pub mod binary;
pub mod contracts;
pub mod linear;
mod types;
mod verified;

// Re-exports for public API
pub use types::{SearchError, SearchResult, Sequence};
pub use verified::{InvariantError, SortedSlice};
