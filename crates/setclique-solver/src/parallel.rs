//! Parallel clique finder.
//!
//! Reference cards are independent: each one only reads the cards after it.
//! They are spread over a rayon pool and the per-reference results are
//! concatenated in reference order, so the output equals
//! [`find_set_indices`](crate::find_set_indices) exactly.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::warn;

use setclique_config::ThreadCount;
use setclique_core::Collection;

use crate::finder::{find_set_indices, sets_for_reference, trivial_sets, SetFinder, SetIndices};

/// Clique finder that processes reference cards on worker threads.
pub struct ParallelCliqueFinder {
    thread_count: ThreadCount,
    pool: Option<ThreadPool>,
}

impl ParallelCliqueFinder {
    /// Creates a finder for the given thread count.
    ///
    /// `Auto` uses rayon's global pool, `None` runs sequentially, and
    /// `Count(n)` builds a dedicated pool of `n` threads. If that pool cannot
    /// be built the global pool is used instead.
    pub fn new(thread_count: ThreadCount) -> Self {
        let pool = match thread_count {
            ThreadCount::Count(n) => match ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => Some(pool),
                Err(e) => {
                    warn!("Could not build a {n}-thread pool ({e}), using the global pool");
                    None
                }
            },
            ThreadCount::Auto | ThreadCount::None => None,
        };
        Self { thread_count, pool }
    }

    /// Returns the configured thread count.
    pub fn thread_count(&self) -> ThreadCount {
        self.thread_count
    }

    fn run(collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        if let Some(sets) = trivial_sets(collection.len(), set_size) {
            return sets;
        }
        let set_size = usize::try_from(set_size).unwrap_or(usize::MAX);

        let per_reference: Vec<Vec<SetIndices>> = (0..collection.len())
            .into_par_iter()
            .map(|reference| {
                let mut sets = Vec::new();
                sets_for_reference(collection, reference, set_size, &mut sets);
                sets
            })
            .collect();

        per_reference.concat()
    }
}

impl Default for ParallelCliqueFinder {
    fn default() -> Self {
        Self::new(ThreadCount::Auto)
    }
}

impl std::fmt::Debug for ParallelCliqueFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallelCliqueFinder")
            .field("thread_count", &self.thread_count)
            .field("dedicated_pool", &self.pool.is_some())
            .finish()
    }
}

impl SetFinder for ParallelCliqueFinder {
    fn name(&self) -> &'static str {
        "parallel_clique"
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        match (&self.pool, self.thread_count) {
            (_, ThreadCount::None) => find_set_indices(collection, set_size),
            (Some(pool), _) => pool.install(|| Self::run(collection, set_size)),
            (None, _) => Self::run(collection, set_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::find_set_indices;

    #[test]
    fn test_matches_sequential_order() {
        let coll = Collection::with_seed(4, 3, 40, 21).unwrap();
        for threads in [
            ThreadCount::Auto,
            ThreadCount::None,
            ThreadCount::Count(1),
            ThreadCount::Count(3),
        ] {
            let finder = ParallelCliqueFinder::new(threads);
            for k in [-1, 0, 1, 2, 3, 4] {
                assert_eq!(
                    finder.find_set_indices(&coll, k),
                    find_set_indices(&coll, k),
                    "{threads:?}, k = {k}"
                );
            }
        }
    }

    #[test]
    fn test_dedicated_pool() {
        let finder = ParallelCliqueFinder::new(ThreadCount::Count(2));
        assert!(finder.pool.is_some());
        assert_eq!(finder.thread_count(), ThreadCount::Count(2));
        assert!(ParallelCliqueFinder::default().pool.is_none());
    }
}
