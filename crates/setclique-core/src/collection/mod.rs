//! Collections of cards.
//!
//! A [`Collection`] is the cards face-up on the table. It is built once,
//! either by sampling the full deck or from explicit cards, and is
//! read-only afterwards.

use std::collections::HashSet;
use std::ops::Index;

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{Result, SetError};

/// An ordered sequence of unique cards with fixed dimension count and range.
///
/// Every card has exactly [`dimensions`](Self::dimensions) values, each in
/// `0..dimension_range`.
///
/// # Example
///
/// ```
/// use setclique_core::{Collection, SetError};
///
/// // A standard game: four dimensions of three values, twelve cards.
/// let coll = Collection::with_seed(4, 3, 12, 42).unwrap();
/// assert_eq!(coll.len(), 12);
/// assert_eq!(coll.deck_size(), Some(81));
///
/// // More cards than the deck holds.
/// let err = Collection::new(2, 3, 10).unwrap_err();
/// assert!(matches!(err, SetError::InvalidArgument(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCollection"))]
pub struct Collection {
    dimensions: usize,
    dimension_range: u32,
    cards: Vec<Card>,
}

impl Collection {
    /// Samples `card_count` distinct cards using the thread-local RNG.
    pub fn new(dimensions: usize, dimension_range: u32, card_count: usize) -> Result<Self> {
        Self::random(dimensions, dimension_range, card_count, &mut rand::rng())
    }

    /// Samples `card_count` distinct cards from a ChaCha8 stream seeded with
    /// `seed`.
    ///
    /// The same parameters and seed always produce the same collection.
    pub fn with_seed(
        dimensions: usize,
        dimension_range: u32,
        card_count: usize,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::random(dimensions, dimension_range, card_count, &mut rng)
    }

    /// Samples `card_count` distinct cards uniformly without replacement
    /// from the deck of `dimension_range ^ dimensions` cards.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if `dimensions` or
    /// `dimension_range` is zero, or if `card_count` exceeds the deck size.
    pub fn random<R: Rng + ?Sized>(
        dimensions: usize,
        dimension_range: u32,
        card_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_shape(dimensions, dimension_range)?;
        let deck_size = deck_size(dimensions, dimension_range);

        let cards = match deck_size {
            Some(size) => {
                if card_count > size {
                    return Err(SetError::invalid(format!(
                        "card count {} exceeds deck size {}",
                        card_count, size
                    )));
                }
                index::sample(rng, size, card_count)
                    .into_iter()
                    .map(|i| Card::from_index(i, dimensions, dimension_range))
                    .collect()
            }
            // The deck outgrows usize: any addressable card count fits, and
            // rejecting repeated tuples is still uniform without replacement.
            None => sample_by_rejection(dimensions, dimension_range, card_count, rng),
        };

        Ok(Self {
            dimensions,
            dimension_range,
            cards,
        })
    }

    /// Builds a collection from explicit cards.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidArgument`] if the shape is invalid, a card
    /// has the wrong number of dimensions, a value is out of range, or a card
    /// appears twice.
    pub fn from_cards(
        dimensions: usize,
        dimension_range: u32,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self> {
        validate_shape(dimensions, dimension_range)?;
        let cards: Vec<Card> = cards.into_iter().collect();

        let mut seen = HashSet::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if card.dimensions() != dimensions {
                return Err(SetError::invalid(format!(
                    "card {} has {} dimensions, expected {}",
                    i,
                    card.dimensions(),
                    dimensions
                )));
            }
            if let Some(v) = card.values().iter().find(|&&v| v >= dimension_range) {
                return Err(SetError::invalid(format!(
                    "card {} has value {} outside 0..{}",
                    i, v, dimension_range
                )));
            }
            if !seen.insert(card) {
                return Err(SetError::invalid(format!("card {} is a duplicate: {}", i, card)));
            }
        }

        Ok(Self {
            dimensions,
            dimension_range,
            cards,
        })
    }

    /// Returns the number of dimensions per card.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the number of values each dimension can take.
    #[inline]
    pub fn dimension_range(&self) -> u32 {
        self.dimension_range
    }

    /// Returns the size of the full deck, or `None` if it exceeds `usize`.
    pub fn deck_size(&self) -> Option<usize> {
        deck_size(self.dimensions, self.dimension_range)
    }

    /// Returns the number of cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the collection holds no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates over the cards in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the cards as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for Collection {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Deserialized form of a [`Collection`], validated through
/// [`Collection::from_cards`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCollection {
    dimensions: usize,
    dimension_range: u32,
    cards: Vec<Card>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCollection> for Collection {
    type Error = SetError;

    fn try_from(raw: RawCollection) -> Result<Self> {
        Collection::from_cards(raw.dimensions, raw.dimension_range, raw.cards)
    }
}

fn validate_shape(dimensions: usize, dimension_range: u32) -> Result<()> {
    if dimensions == 0 {
        return Err(SetError::invalid("dimension count must be positive"));
    }
    if dimension_range == 0 {
        return Err(SetError::invalid("dimension range must be positive"));
    }
    Ok(())
}

fn deck_size(dimensions: usize, dimension_range: u32) -> Option<usize> {
    let exp = u32::try_from(dimensions).ok()?;
    (dimension_range as usize).checked_pow(exp)
}

fn sample_by_rejection<R: Rng + ?Sized>(
    dimensions: usize,
    dimension_range: u32,
    card_count: usize,
    rng: &mut R,
) -> Vec<Card> {
    let mut seen = HashSet::with_capacity(card_count);
    let mut cards = Vec::with_capacity(card_count);
    while cards.len() < card_count {
        let card = Card::new((0..dimensions).map(|_| rng.random_range(0..dimension_range)));
        if seen.insert(card.clone()) {
            cards.push(card);
        }
    }
    cards
}

#[cfg(test)]
mod tests;
