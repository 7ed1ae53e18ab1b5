//! Difference keys.

use smallvec::SmallVec;

use crate::card::Card;

/// The dimensions in which a card differs from a reference card.
///
/// Stored as a sorted small vector of dimension indices, so two keys are
/// equal exactly when they name the same dimensions. Used only as a grouping
/// key.
///
/// # Example
///
/// ```
/// use setclique_core::{Card, DifferenceKey};
///
/// let key = DifferenceKey::between(&Card::new([0, 1, 2, 0]), &Card::new([0, 2, 2, 1]));
/// assert_eq!(key.dimensions(), &[1, 3]);
/// assert!(key.contains(3));
/// assert!(!key.contains(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DifferenceKey {
    dims: SmallVec<[usize; 8]>,
}

impl DifferenceKey {
    /// Computes the dimensions where `a` and `b` differ.
    ///
    /// Both cards must have the same number of dimensions.
    pub fn between(a: &Card, b: &Card) -> Self {
        debug_assert_eq!(a.dimensions(), b.dimensions());
        let dims = a
            .values()
            .iter()
            .zip(b.values())
            .enumerate()
            .filter(|(_, (x, y))| x != y)
            .map(|(dim, _)| dim)
            .collect();
        Self { dims }
    }

    /// Builds a key from explicit dimension indices.
    pub fn from_dimensions(dims: impl IntoIterator<Item = usize>) -> Self {
        let mut dims: SmallVec<[usize; 8]> = dims.into_iter().collect();
        dims.sort_unstable();
        dims.dedup();
        Self { dims }
    }

    /// Returns the differing dimensions in ascending order.
    #[inline]
    pub fn dimensions(&self) -> &[usize] {
        &self.dims
    }

    /// Iterates over the differing dimensions.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dims.iter().copied()
    }

    /// Returns the number of differing dimensions.
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Returns true if no dimension differs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Returns true if `dim` is one of the differing dimensions.
    pub fn contains(&self, dim: usize) -> bool {
        self.dims.binary_search(&dim).is_ok()
    }
}
