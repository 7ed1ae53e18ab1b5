//! Collections with known answers.

use setclique_core::{Card, Collection};

/// `(0,0), (1,1), (2,2)`: both dimensions all distinct, exactly one Set of
/// three.
pub fn diagonal() -> Collection {
    from_rows(2, 3, &[&[0, 0], &[1, 1], &[2, 2]])
}

/// `(0,0), (1,1), (0,1)`: dimension 1 reads 0,1,1, so no Set of three.
pub fn broken_triple() -> Collection {
    from_rows(2, 3, &[&[0, 0], &[1, 1], &[0, 1]])
}

/// Every card of the deck in index order.
///
/// # Panics
///
/// Panics if the deck does not fit in memory-addressable size.
pub fn full_deck(dimensions: usize, range: u32) -> Collection {
    let size = (range as usize).pow(dimensions as u32);
    Collection::from_cards(
        dimensions,
        range,
        (0..size).map(|i| Card::from_index(i, dimensions, range)),
    )
    .expect("deck cards are unique and in range")
}

/// Collection built from literal rows.
///
/// # Panics
///
/// Panics if the rows are not a valid collection.
pub fn from_rows(dimensions: usize, range: u32, rows: &[&[u32]]) -> Collection {
    Collection::from_cards(
        dimensions,
        range,
        rows.iter().map(|r| Card::new(r.iter().copied())),
    )
    .expect("fixture rows form a valid collection")
}

/// `count` seeded random collections with consecutive seeds from `base_seed`.
pub fn seeded(
    dimensions: usize,
    range: u32,
    cards: usize,
    count: usize,
    base_seed: u64,
) -> Vec<Collection> {
    (0..count as u64)
        .map(|i| {
            Collection::with_seed(dimensions, range, cards, base_seed + i)
                .expect("seeded fixture parameters are valid")
        })
        .collect()
}
