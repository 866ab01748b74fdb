//! Operations on orthants in an n-dimensional metric space.
//!
//! An orthant is one of the `2^dims` regions of an n-dimensional space
//! obtained by fixing the sign of every coordinate (the n-dimensional
//! generalization of a quadrant/octant). Orthants are numbered from 1 under a
//! fixed convention; in a 2D space the signs are:
//!
//! - orthant 1 = `[1, 1]`
//! - orthant 2 = `[1, -1]`
//! - orthant 3 = `[-1, -1]`
//! - orthant 4 = `[-1, 1]`
//!
//! Both queries are memoized: the first `sign` miss for a `(dims, orthant)`
//! pair enumerates all `2^dims` sign sequences for that dimensionality and
//! caches the requested one, so repeat calls are a map lookup.

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::algs::combinations::combinations;
use crate::geometry::point::Point;
use crate::orthant_error::OrthantError;

/// Largest supported dimension count: `2^31` no longer fits in a 32-bit
/// signed integer.
pub const MAX_DIMS: u32 = 30;

static GLOBAL: Lazy<Orthants> = Lazy::new(Orthants::new);

/// Orthant counting and sign lookup for n-dimensional metric spaces.
///
/// The type is stateless apart from its two caches, so independent instances
/// never observe each other's entries. Both caches are populated lazily with
/// get-if-absent-then-put semantics: concurrent callers racing on a miss may
/// duplicate the pure computation, but only one value is retained per key and
/// entries never change once written.
#[derive(Debug, Default)]
pub struct Orthants {
    count_cache: DashMap<u32, u32>,
    sign_cache: DashMap<(u32, u32), Point>,
}

impl Orthants {
    /// Creates an instance with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared process-wide instance, for callers that have no reason to
    /// isolate caches.
    pub fn global() -> &'static Orthants {
        &GLOBAL
    }

    /// Returns the number of orthants (`2^dims`) in a metric space with the
    /// given dimension count.
    ///
    /// Fails with [`OrthantError::InvalidDimensionCount`] if `dims == 0` and
    /// with [`OrthantError::DimensionCountTooLarge`] if `dims > MAX_DIMS`.
    pub fn count(&self, dims: u32) -> Result<u32, OrthantError> {
        validate_dims(dims)?;
        if let Some(count) = self.count_cache.get(&dims) {
            return Ok(*count);
        }
        let count = 1u32 << dims;
        log::trace!("caching orthant count for dims={dims}: {count}");
        Ok(*self.count_cache.entry(dims).or_insert(count))
    }

    /// Returns the sign of coordinates in a given orthant (numbered from 1).
    ///
    /// Example (2D space): signs in orthant 1 = `[1, 1]`, signs in orthant 3
    /// = `[-1, -1]`.
    ///
    /// Fails on invalid `dims` (see [`Orthants::count`]) and with
    /// [`OrthantError::OrthantOutOfRange`] if `orthant` is not in
    /// `[1, count(dims)]`. No cache entry is written for a failing key.
    pub fn sign(&self, dims: u32, orthant: u32) -> Result<Point, OrthantError> {
        let count = self.count(dims)?;
        if orthant == 0 || orthant > count {
            return Err(OrthantError::OrthantOutOfRange {
                dims,
                orthant,
                count,
            });
        }
        if let Some(point) = self.sign_cache.get(&(dims, orthant)) {
            return Ok(point.clone());
        }
        let signs = all_orthant_signs(dims, count);
        let coords: Vec<f64> = signs[(orthant - 1) as usize]
            .iter()
            .map(|&s| f64::from(s))
            .collect();
        let point = Point::new(coords)?;
        log::debug!("caching orthant sign for dims={dims}, orthant={orthant}");
        Ok(self
            .sign_cache
            .entry((dims, orthant))
            .or_insert(point)
            .clone())
    }
}

fn validate_dims(dims: u32) -> Result<(), OrthantError> {
    if dims == 0 {
        return Err(OrthantError::InvalidDimensionCount { dims });
    }
    if dims > MAX_DIMS {
        return Err(OrthantError::DimensionCountTooLarge { dims });
    }
    Ok(())
}

/// All `2^dims` sign sequences in orthant-number order: element 0 holds the
/// signs of orthant 1, element 1 those of orthant 2, and so on.
///
/// The ordering convention is fixed and defines the public numbering. Sort
/// the sign sequences lexicographically (left-most coordinate most
/// significant, `-1` before `1`); the output is the last half of the sorted
/// list in descending order, followed by its first half in ascending order.
/// For a 2D space: `[[1,1], [1,-1], [-1,-1], [-1,1]]`.
fn all_orthant_signs(dims: u32, count: u32) -> Vec<Vec<i32>> {
    let choice_sets: Vec<Vec<i32>> = (0..dims).map(|_| vec![-1, 1]).collect();
    let mut signs = combinations(&choice_sets);
    signs.sort_unstable();
    let half = (count / 2) as usize;
    let mut ordered = Vec::with_capacity(count as usize);
    ordered.extend(signs.iter().rev().take(half).cloned());
    ordered.extend(signs.iter().take(half).cloned());
    ordered
}
