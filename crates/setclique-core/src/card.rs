//! Card type.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

/// Inline capacity for card values; the standard game has four dimensions.
const INLINE_DIMENSIONS: usize = 6;

/// A single card: one value per dimension.
///
/// Cards are immutable once built. Equality, ordering and hashing are by
/// value, so a card can key a map or be sorted for comparison.
///
/// # Example
///
/// ```
/// use setclique_core::Card;
///
/// let card = Card::new([0, 2, 1]);
/// assert_eq!(card.dimensions(), 3);
/// assert_eq!(card.value(1), 2);
/// assert_eq!(card.to_string(), "(0, 2, 1)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    values: SmallVec<[u32; INLINE_DIMENSIONS]>,
}

impl Card {
    /// Creates a card from its dimension values.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Decodes a deck index into a card by mixed-radix expansion.
    ///
    /// Digit `d` (least significant first) is the value of dimension `d`.
    pub fn from_index(mut index: usize, dimensions: usize, range: u32) -> Self {
        let base = range as usize;
        let mut values = SmallVec::with_capacity(dimensions);
        for _ in 0..dimensions {
            values.push((index % base) as u32);
            index /= base;
        }
        Self { values }
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Returns the value in dimension `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is out of bounds.
    #[inline]
    pub fn value(&self, dim: usize) -> u32 {
        self.values[dim]
    }

    /// Returns all values in dimension order.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl Index<usize> for Card {
    type Output = u32;

    fn index(&self, dim: usize) -> &u32 {
        &self.values[dim]
    }
}

impl From<Vec<u32>> for Card {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[u32; N]> for Card {
    fn from(values: [u32; N]) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_least_significant_first() {
        // 5 = 2 + 1*3 in base 3
        let card = Card::from_index(5, 4, 3);
        assert_eq!(card.values(), &[2, 1, 0, 0]);

        let card = Card::from_index(80, 4, 3);
        assert_eq!(card.values(), &[2, 2, 2, 2]);
    }

    #[test]
    fn test_from_index_covers_deck() {
        let mut cards: Vec<Card> = (0..27).map(|i| Card::from_index(i, 3, 3)).collect();
        cards.sort();
        cards.dedup();
        assert_eq!(cards.len(), 27);
    }

    #[test]
    fn test_ordering_by_value() {
        let a = Card::new([0, 1]);
        let b = Card::new([0, 2]);
        let c = Card::new([1, 0]);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, Card::from([0, 1]));
    }

    #[test]
    fn test_display_single_dimension() {
        assert_eq!(Card::new([7]).to_string(), "(7)");
    }
}
