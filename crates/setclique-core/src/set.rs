//! Card sets and the Set rule.

use std::collections::HashSet;
use std::fmt;

use smallvec::SmallVec;

use crate::card::Card;

/// An ordered tuple of cards returned by a set finder.
///
/// For finders of the clique family the first card is the reference card
/// and the rest follow in collection order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardSet {
    cards: SmallVec<[Card; 3]>,
}

impl CardSet {
    /// Creates a set from cards in the given order.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Returns the number of cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the set holds no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in order.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a copy with the cards sorted, for order-independent comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use setclique_core::{Card, CardSet};
    ///
    /// let a = CardSet::new([Card::new([2]), Card::new([0])]);
    /// let b = CardSet::new([Card::new([0]), Card::new([2])]);
    /// assert_ne!(a, b);
    /// assert_eq!(a.normalized(), b.normalized());
    /// ```
    pub fn normalized(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort();
        Self { cards }
    }

    /// Returns true if the cards satisfy the Set rule.
    pub fn is_valid(&self) -> bool {
        let refs: Vec<&Card> = self.cards.iter().collect();
        is_valid_set(&refs)
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        write!(f, "]")
    }
}

/// Checks the full Set rule: in every dimension the cards' values are
/// either all equal or all pairwise distinct.
///
/// Fewer than two cards always form a set.
///
/// # Example
///
/// ```
/// use setclique_core::{is_valid_set, Card};
///
/// let a = Card::new([0, 0]);
/// let b = Card::new([1, 1]);
/// let c = Card::new([2, 2]);
/// let d = Card::new([0, 1]);
/// assert!(is_valid_set(&[&a, &b, &c]));
/// assert!(!is_valid_set(&[&a, &b, &d]));
/// ```
pub fn is_valid_set(cards: &[&Card]) -> bool {
    let Some(first) = cards.first() else {
        return true;
    };
    let mut seen = HashSet::with_capacity(cards.len());
    (0..first.dimensions()).all(|dim| {
        let v = first.value(dim);
        if cards.iter().all(|c| c.value(dim) == v) {
            return true;
        }
        seen.clear();
        cards.iter().all(|c| seen.insert(c.value(dim)))
    })
}
