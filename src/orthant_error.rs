//! `OrthantError`: unified error type for nd-orthants public APIs.
//!
//! Every precondition violation surfaces as a distinct variant carrying the
//! offending values, so callers can diagnose misuse without string matching.
//! There is no recoverable/transient error class: the crate performs no I/O,
//! so nothing can be retried.

use thiserror::Error;

/// Unified error type for nd-orthants operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrthantError {
    /// The dimension count of a metric space must be at least 1.
    #[error("dimension count must be positive, got {dims}")]
    InvalidDimensionCount { dims: u32 },
    /// The orthant count `2^dims` must fit in a 32-bit signed integer.
    #[error("dimension count {dims} too large: orthant count 2^{dims} exceeds the 32-bit signed range (dims must be < 31)")]
    DimensionCountTooLarge { dims: u32 },
    /// Orthant numbers are 1-based and bounded by the orthant count.
    #[error("orthant {orthant} out of range [1, {count}] in a {dims}-dimensional space")]
    OrthantOutOfRange { dims: u32, orthant: u32, count: u32 },
    /// A point needs at least one coordinate.
    #[error("a point requires at least one coordinate")]
    EmptyPoint,
}
