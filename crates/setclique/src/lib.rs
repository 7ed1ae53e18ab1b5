//! setclique - Set finding through clique enumeration
//!
//! # Example
//!
//! ```rust
//! use setclique::prelude::*;
//!
//! let coll = Collection::with_seed(4, 3, 12, 7).unwrap();
//! let fast = CliqueFinder.find_sets(&coll, 3);
//! let slow = BruteForceFinder.find_sets(&coll, 3);
//! assert_eq!(fast.len(), slow.len());
//! assert!(fast.iter().all(CardSet::is_valid));
//! ```

// Value types
pub use setclique_core::{
    is_valid_set, parse_set_size, Card, CardSet, Collection, DifferenceKey, Result, SetError,
};

// Finders
pub use setclique_solver::{
    build_finder, find_set_indices, find_sets, BruteForceFinder, CliqueFinder, IncrementalFinder,
    ParallelCliqueFinder, SetFinder,
};

// Core building blocks, for callers driving the search themselves
pub use setclique_solver::{clique, graph, partition};

// Configuration
pub use setclique_config::{
    BenchmarkSuite, CollectionSpec, ConfigError, ConsistencySuite, FinderKind, RunConfig,
    ThreadCount,
};

// Benchmarking and consistency testing
pub use setclique_benchmark as benchmark;

#[cfg(feature = "console")]
pub use setclique_console as console;

pub mod prelude {
    pub use super::{BruteForceFinder, CliqueFinder, IncrementalFinder, ParallelCliqueFinder};
    pub use super::{Card, CardSet, Collection, SetError, SetFinder};
    pub use super::{FinderKind, RunConfig, ThreadCount};
}
