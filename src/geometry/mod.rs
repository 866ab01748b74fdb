//! Geometry types for nd-orthants.
//!
//! [`point`] holds the immutable n-dimensional point value type and
//! [`orthants`] the orthant counting and sign-enumeration service.

pub mod orthants;
pub mod point;
