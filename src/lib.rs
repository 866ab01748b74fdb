//! # nd-orthants
//!
//! Orthant counting and sign enumeration for n-dimensional metric spaces.
//!
//! An *orthant* is the n-dimensional generalization of a quadrant/octant: one
//! of the `2^dims` regions obtained by fixing the sign of every coordinate.
//! This crate answers two questions, repeatedly and cheaply:
//!
//! - how many orthants does a `dims`-dimensional space have
//!   ([`Orthants::count`](geometry::orthants::Orthants::count)), and
//! - what is the sign pattern of orthant `k` under the crate's fixed
//!   numbering convention
//!   ([`Orthants::sign`](geometry::orthants::Orthants::sign)).
//!
//! Both answers are memoized in concurrency-safe caches owned by an
//! [`Orthants`](geometry::orthants::Orthants) instance, so the exponential
//! enumeration cost is paid once per queried key and repeat calls are map
//! lookups. Instances are independent; a shared process-wide instance is
//! available via [`Orthants::global`](geometry::orthants::Orthants::global).
//!
//! ## Example
//!
//! ```rust
//! use nd_orthants::prelude::*;
//!
//! let orthants = Orthants::new();
//! assert_eq!(orthants.count(2)?, 4);
//! assert_eq!(orthants.sign(2, 1)?.coords(), &[1.0, 1.0]);
//! assert_eq!(orthants.sign(2, 3)?.coords(), &[-1.0, -1.0]);
//! # Ok::<(), OrthantError>(())
//! ```
//!
//! ## Determinism
//!
//! The numbering convention is part of the public contract: for a given
//! `(dims, orthant)` the returned sign pattern never varies across calls,
//! instances, or processes.

pub mod algs;
pub mod geometry;
pub mod orthant_error;

/// A convenient prelude importing the most-used types:
pub mod prelude {
    pub use crate::geometry::orthants::Orthants;
    pub use crate::geometry::point::Point;
    pub use crate::orthant_error::OrthantError;
}
