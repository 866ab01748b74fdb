//! Combinatorial algorithms backing the geometry types.

pub mod combinations;
