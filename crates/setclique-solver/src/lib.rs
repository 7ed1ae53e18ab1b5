//! Set finding for setclique.
//!
//! Finding every Set in a collection is reduced to a series of fixed-size
//! clique searches:
//!
//! 1. Fix a reference card and [`partition`] the later cards by the
//!    dimensions in which they differ from it.
//! 2. Inside one group every card already agrees with the reference outside
//!    the group's key, so two group members can share a Set with the
//!    reference exactly when they differ in every key dimension. Those pairs
//!    form the [`CompatibilityGraph`].
//! 3. Every clique of `set_size - 1` members in that graph, together with the
//!    reference card, is a Set ([`enumerate_cliques`]).
//!
//! [`find_sets`] drives this for every reference card. [`ParallelCliqueFinder`]
//! spreads reference cards over a rayon pool. [`BruteForceFinder`] and
//! [`IncrementalFinder`] are straightforward finders kept as test oracles.
//!
//! # Example
//!
//! ```
//! use setclique_core::{Card, Collection};
//! use setclique_solver::find_sets;
//!
//! let coll = Collection::from_cards(2, 3, [
//!     Card::new([0, 0]),
//!     Card::new([1, 1]),
//!     Card::new([2, 2]),
//! ]).unwrap();
//!
//! let sets = find_sets(&coll, 3);
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].len(), 3);
//! ```

pub mod clique;
pub mod finder;
pub mod graph;
pub mod parallel;
pub mod partition;
pub mod reference;

pub use clique::{enumerate_cliques, Clique};
pub use finder::{
    build_finder, find_set_indices, find_sets, materialize, CliqueFinder, SetFinder, SetIndices,
};
pub use graph::CompatibilityGraph;
pub use parallel::ParallelCliqueFinder;
pub use partition::{partition, Group};
pub use reference::{BruteForceFinder, IncrementalFinder};
