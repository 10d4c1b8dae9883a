//! Marquee strip ordering for the promotional preview
//!
//! The strip scrolls by half its width and snaps back, so it is rendered
//! from two identical copies of one shuffled list.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Permutation of `0..len` for a given seed
pub fn marquee_order(len: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = SmallRng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Indices into the source list for the full doubled strip
pub fn marquee_indices(len: usize, seed: u64) -> Vec<usize> {
    let order = marquee_order(len, seed);
    let mut indices = Vec::with_capacity(len * 2);
    indices.extend_from_slice(&order);
    indices.extend_from_slice(&order);
    indices
}

/// Shuffle `items` and append a second copy of the shuffled list.
///
/// Every input element appears exactly twice and both halves are equal.
pub fn marquee_sequence<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    marquee_indices(items.len(), seed)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_empty_input() {
        assert!(marquee_sequence::<&str>(&[], 7).is_empty());
        assert!(marquee_indices(0, 7).is_empty());
    }

    #[test]
    fn test_halves_are_identical() {
        let items = ["gel", "acrylic", "pedicure", "nail art", "dip powder"];
        let strip = marquee_sequence(&items, 42);
        assert_eq!(strip.len(), items.len() * 2);
        let (first, second) = strip.split_at(items.len());
        assert_eq!(first, second);
    }

    #[test]
    fn test_multiset_preserved() {
        let items: Vec<u32> = (0..32).collect();
        let strip = marquee_sequence(&items, 9);

        let mut counts: FxHashMap<u32, usize> = FxHashMap::default();
        for item in &strip {
            *counts.entry(*item).or_default() += 1;
        }
        assert_eq!(counts.len(), items.len());
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_duplicate_inputs_are_kept() {
        let items = ["a", "a", "b"];
        let strip = marquee_sequence(&items, 3);
        assert_eq!(strip.iter().filter(|s| **s == "a").count(), 4);
        assert_eq!(strip.iter().filter(|s| **s == "b").count(), 2);
    }

    #[test]
    fn test_same_seed_same_order() {
        assert_eq!(marquee_order(50, 1234), marquee_order(50, 1234));
    }

    #[test]
    fn test_order_is_a_permutation() {
        let mut order = marquee_order(100, 77);
        order.sort_unstable();
        assert_eq!(order, (0..100).collect::<Vec<_>>());
    }
}
