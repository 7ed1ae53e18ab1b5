//! Benchmark runner.

use std::time::Instant;

use tracing::info;

use setclique_core::Collection;
use setclique_solver::SetFinder;

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Times one finder against collections from a factory.
///
/// Collection generation happens outside the timed region. The factory
/// receives the run index; warmup runs are numbered after the measured ones
/// so they never share a collection with a measured run.
///
/// # Type Parameters
///
/// * `F` - The finder under measurement
/// * `P` - Collection factory: `Fn(usize) -> Collection`
pub struct Benchmark<F, P>
where
    F: SetFinder,
    P: Fn(usize) -> Collection,
{
    config: BenchmarkConfig,
    finder: F,
    collection_factory: P,
}

impl<F, P> Benchmark<F, P>
where
    F: SetFinder,
    P: Fn(usize) -> Collection,
{
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Workload and run counts
    /// * `finder` - The finder to time
    /// * `collection_factory` - Builds the collection for a run index
    pub fn new(config: BenchmarkConfig, finder: F, collection_factory: P) -> Self {
        Self {
            config,
            finder,
            collection_factory,
        }
    }

    /// Runs the benchmark and returns aggregated results.
    pub fn run(&self) -> BenchmarkResult {
        let run_count = self.config.run_count;
        info!(
            event = "benchmark_start",
            finder = self.finder.name(),
            problem = self.config.problem.as_str(),
            set_size = self.config.set_size,
            run_count = run_count,
        );

        for warmup in 0..self.config.warmup_count {
            let collection = (self.collection_factory)(run_count + warmup);
            self.finder.find_set_indices(&collection, self.config.set_size);
        }

        let mut result = BenchmarkResult::new(
            self.config.name.as_str(),
            self.finder.name(),
            self.config.problem.as_str(),
            self.config.set_size,
        );
        for run_index in 0..run_count {
            let collection = (self.collection_factory)(run_index);
            result.add_run(self.run_once(run_index, &collection));
        }

        info!(
            event = "benchmark_end",
            finder = self.finder.name(),
            problem = self.config.problem.as_str(),
            duration_ms = result.avg_solve_time().as_millis() as u64,
            set_count = result.avg_set_count() as u64,
        );
        result
    }

    fn run_once(&self, run_index: usize, collection: &Collection) -> BenchmarkRun {
        let start = Instant::now();
        let sets = self.finder.find_set_indices(collection, self.config.set_size);
        let solve_time = start.elapsed();
        BenchmarkRun {
            run_index,
            solve_time,
            card_count: collection.len(),
            set_count: sets.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setclique_solver::{BruteForceFinder, CliqueFinder};
    use std::cell::RefCell;

    #[test]
    fn test_runs_are_recorded() {
        let config = BenchmarkConfig::new("deck", "full deck", 3).with_runs(1, 3);
        let benchmark = Benchmark::new(config, CliqueFinder, |_| {
            setclique_test::full_deck(4, 3)
        });
        let result = benchmark.run();
        assert_eq!(result.run_count(), 3);
        assert_eq!(result.finder_name, "clique");
        for (i, run) in result.runs.iter().enumerate() {
            assert_eq!(run.run_index, i);
            assert_eq!(run.card_count, 81);
            assert_eq!(run.set_count, 1080);
        }
        assert!(result.min_solve_time() <= result.max_solve_time());
    }

    #[test]
    fn test_warmups_use_distinct_indices() {
        let seen = RefCell::new(Vec::new());
        let config = BenchmarkConfig::new("idx", "tiny", 3).with_runs(2, 2);
        let benchmark = Benchmark::new(config, BruteForceFinder, |i| {
            seen.borrow_mut().push(i);
            Collection::with_seed(2, 3, 5, i as u64).unwrap()
        });
        benchmark.run();
        assert_eq!(*seen.borrow(), vec![2, 3, 0, 1]);
    }
}
