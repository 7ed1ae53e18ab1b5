//! Include/exclude recursion with per-dimension pruning.

use setclique_core::Collection;

use crate::finder::{SetFinder, SetIndices};

/// Grows partial sets one card at a time, in collection order, and only
/// keeps a card if every dimension can still end up all-same or
/// all-different.
///
/// For each dimension the new card must match either every card so far or
/// none of them. When it matches none and two or more cards are already in
/// the set, those cards must themselves differ in that dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalFinder;

impl SetFinder for IncrementalFinder {
    fn name(&self) -> &'static str {
        "incremental"
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        let mut sets = Vec::new();
        let Ok(set_size) = usize::try_from(set_size) else {
            return sets;
        };
        if set_size == 0 {
            return sets;
        }
        let mut partial = SetIndices::new();
        grow(collection, set_size, 0, &mut partial, &mut sets);
        sets
    }
}

fn grow(
    collection: &Collection,
    set_size: usize,
    start: usize,
    partial: &mut SetIndices,
    sets: &mut Vec<SetIndices>,
) {
    if partial.len() == set_size {
        sets.push(partial.clone());
        return;
    }

    for index in start..collection.len() {
        if can_extend(collection, partial, index) {
            partial.push(index);
            grow(collection, set_size, index + 1, partial, sets);
            partial.pop();
        }
    }
}

fn can_extend(collection: &Collection, partial: &[usize], index: usize) -> bool {
    let card = &collection[index];
    (0..collection.dimensions()).all(|dim| {
        let same = partial
            .iter()
            .filter(|&&p| collection[p][dim] == card[dim])
            .count();
        if same == partial.len() {
            return true;
        }
        if same != 0 {
            return false;
        }
        // Existing cards are all-same or all-distinct here; the first two decide.
        match partial {
            [first, second, ..] => collection[*first][dim] != collection[*second][dim],
            _ => true,
        }
    })
}
