//! Group partitioning relative to a reference card.

use std::collections::HashMap;

use setclique_core::{Collection, DifferenceKey};

/// Cards that differ from the reference card in exactly the same dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Dimensions in which every member differs from the reference card.
    pub key: DifferenceKey,
    /// Collection positions of the members, ascending.
    pub positions: Vec<usize>,
}

impl Group {
    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Partitions the cards after `reference` by their difference key.
///
/// Groups come back in the order their key was first seen; members of each
/// group keep ascending collection order.
///
/// # Panics
///
/// Panics if `reference` is out of bounds.
///
/// # Example
///
/// ```
/// use setclique_core::{Card, Collection, DifferenceKey};
/// use setclique_solver::partition;
///
/// let coll = Collection::from_cards(2, 3, [
///     Card::new([0, 0]),
///     Card::new([1, 0]),
///     Card::new([2, 1]),
///     Card::new([2, 0]),
/// ]).unwrap();
///
/// let groups = partition(&coll, 0);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].key, DifferenceKey::from_dimensions([0]));
/// assert_eq!(groups[0].positions, vec![1, 3]);
/// assert_eq!(groups[1].positions, vec![2]);
/// ```
pub fn partition(collection: &Collection, reference: usize) -> Vec<Group> {
    let lcard = &collection[reference];
    let mut slots: HashMap<DifferenceKey, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for (position, card) in collection.iter().enumerate().skip(reference + 1) {
        let key = DifferenceKey::between(lcard, card);
        let slot = *slots.entry(key).or_insert_with_key(|key| {
            groups.push(Group {
                key: key.clone(),
                positions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].positions.push(position);
    }

    groups
}
