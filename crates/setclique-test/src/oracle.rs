//! Result normalisation and an independent oracle.

use std::collections::BTreeSet;

use setclique_core::{is_valid_set, Card, CardSet, Collection};

/// Normalises each set and collects them, so results can be compared
/// regardless of the order sets or cards were produced in.
pub fn normalize(sets: &[CardSet]) -> BTreeSet<CardSet> {
    sets.iter().map(CardSet::normalized).collect()
}

/// Number of `k`-subsets of `n` items.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Every `set_size` subset of the collection satisfying the Set rule,
/// normalised. Walks subsets with an explicit index odometer so it shares
/// no code with the finders under test.
pub fn subset_oracle(collection: &Collection, set_size: usize) -> BTreeSet<CardSet> {
    let n = collection.len();
    let mut found = BTreeSet::new();
    if set_size == 0 || set_size > n {
        return found;
    }

    let mut idx: Vec<usize> = (0..set_size).collect();
    loop {
        let cards: Vec<&Card> = idx.iter().map(|&i| &collection[i]).collect();
        if is_valid_set(&cards) {
            found.insert(CardSet::new(cards.into_iter().cloned()).normalized());
        }

        // Advance to the next combination in lexicographic order.
        let mut pos = set_size;
        loop {
            if pos == 0 {
                return found;
            }
            pos -= 1;
            if idx[pos] < n - set_size + pos {
                break;
            }
        }
        idx[pos] += 1;
        for j in pos + 1..set_size {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::{diagonal, full_deck};

    #[test]
    fn test_oracle_on_diagonal() {
        assert_eq!(subset_oracle(&diagonal(), 3).len(), 1);
        assert_eq!(subset_oracle(&diagonal(), 2).len(), 3);
    }

    #[test]
    fn test_oracle_on_standard_deck() {
        // The 81-card deck holds 1080 Sets of three.
        assert_eq!(subset_oracle(&full_deck(4, 3), 3).len(), 1080);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(3, 4), 0);
    }
}
