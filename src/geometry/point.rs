//! `Point`: an immutable point in an n-dimensional metric space.
//!
//! A point is a fixed-length sequence of `f64` coordinates with value
//! equality and hashing suitable for use as a map or set key. Equality is
//! bitwise per coordinate (`f64::to_bits`), so `NaN` coordinates compare
//! equal to themselves and `0.0` differs from `-0.0`; this keeps `Eq` and
//! `Hash` consistent without a floating-point epsilon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::orthant_error::OrthantError;

/// An immutable point in an n-dimensional metric space.
#[derive(Clone, Serialize, Deserialize)]
pub struct Point {
    coords: Box<[f64]>,
}

impl Point {
    /// Creates a point from the given coordinates, taking ownership of the
    /// storage without copying it.
    ///
    /// Fails with [`OrthantError::EmptyPoint`] if `coords` is empty.
    pub fn new(coords: Vec<f64>) -> Result<Self, OrthantError> {
        if coords.is_empty() {
            return Err(OrthantError::EmptyPoint);
        }
        Ok(Self {
            coords: coords.into_boxed_slice(),
        })
    }

    /// Number of dimensions (always at least 1).
    #[inline]
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate value of a given dimension (first dimension is 0).
    ///
    /// # Panics
    ///
    /// Panics if `dim >= self.dims()`, like slice indexing.
    #[inline]
    pub fn coord(&self, dim: usize) -> f64 {
        self.coords[dim]
    }

    /// All coordinates in dimension order.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.len().hash(state);
        for c in &self.coords {
            c.to_bits().hash(state);
        }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point").field(&self.coords).finish()
    }
}

/// Prints `Point[c0, c1, ...]` listing all coordinates in order.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point[")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
