//! Generic Cartesian-product combinator.
//!
//! Given a sequence of finite choice sets, produces every way of picking one
//! element per set. Consumers that care about ordering must sort the output
//! themselves; the generation order is not part of the contract.

use itertools::Itertools;

/// All combinations of one element from each of the given sets.
///
/// The output length is the product of the set sizes. An empty `sets` slice
/// or any empty set yields no combinations.
pub fn combinations<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    if sets.is_empty() || sets.iter().any(|set| set.is_empty()) {
        return Vec::new();
    }
    sets.iter()
        .map(|set| set.iter().cloned())
        .multi_cartesian_product()
        .collect()
}
