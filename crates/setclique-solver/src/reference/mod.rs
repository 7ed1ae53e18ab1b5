//! Straightforward finders used as oracles for the clique finder.
//!
//! Neither uses the group/graph reduction, so agreement with them is
//! meaningful evidence that the reduction is sound.

mod brute_force;
mod incremental;

pub use brute_force::BruteForceFinder;
pub use incremental::IncrementalFinder;
