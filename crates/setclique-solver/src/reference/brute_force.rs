//! Exhaustive subset enumeration.

use setclique_core::{is_valid_set, Card, Collection};

use crate::finder::{SetFinder, SetIndices};

/// Checks every `set_size` subset of the collection against the Set rule.
///
/// Cost is `C(n, set_size)` rule checks regardless of the cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceFinder;

impl SetFinder for BruteForceFinder {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        let mut sets = Vec::new();
        let Ok(set_size) = usize::try_from(set_size) else {
            return sets;
        };
        if set_size == 0 || set_size > collection.len() {
            return sets;
        }
        let mut partial = SetIndices::new();
        subsets(collection, set_size, 0, &mut partial, &mut sets);
        sets
    }
}

fn subsets(
    collection: &Collection,
    set_size: usize,
    start: usize,
    partial: &mut SetIndices,
    sets: &mut Vec<SetIndices>,
) {
    if partial.len() == set_size {
        let cards: Vec<&Card> = partial.iter().map(|&i| &collection[i]).collect();
        if is_valid_set(&cards) {
            sets.push(partial.clone());
        }
        return;
    }

    // Leave room for the cards still needed.
    let last_start = collection.len() - (set_size - partial.len());
    for index in start..=last_start {
        partial.push(index);
        subsets(collection, set_size, index + 1, partial, sets);
        partial.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setclique_test::{binomial, diagonal, normalize, seeded, subset_oracle};

    #[test]
    fn test_matches_subset_oracle() {
        for coll in seeded(3, 3, 15, 5, 40) {
            for k in 1..=4 {
                let sets = BruteForceFinder.find_sets(&coll, k);
                assert_eq!(normalize(&sets), subset_oracle(&coll, k as usize));
            }
        }
    }

    #[test]
    fn test_fringe_sizes() {
        let coll = diagonal();
        assert!(BruteForceFinder.find_sets(&coll, 0).is_empty());
        assert!(BruteForceFinder.find_sets(&coll, -3).is_empty());
        assert!(BruteForceFinder.find_sets(&coll, 4).is_empty());
        assert_eq!(BruteForceFinder.find_sets(&coll, 1).len(), 3);
        assert_eq!(BruteForceFinder.find_sets(&coll, 2).len(), binomial(3, 2));
        assert_eq!(BruteForceFinder.find_sets(&coll, 3).len(), 1);
    }
}
