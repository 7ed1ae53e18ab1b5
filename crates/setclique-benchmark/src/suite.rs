//! Running configured suites.

use setclique_config::{BenchmarkSuite, ConsistencySuite, RunConfig};
use setclique_core::{Collection, Result};
use setclique_solver::build_finder;

use crate::config::BenchmarkConfig;
use crate::consistency::{ConsistencyReport, ConsistencyTest};
use crate::result::BenchmarkResult;
use crate::runner::Benchmark;

/// Seed for suite `suite_index`: the base seed offset by the index in the
/// high 32 bits, leaving the low bits for run or trial numbers.
pub fn suite_seed(base: u64, suite_index: usize) -> u64 {
    base.wrapping_add((suite_index as u64) << 32)
}

fn base_seed(run: &RunConfig) -> u64 {
    run.random_seed.unwrap_or_else(rand::random)
}

/// Times every finder of `suite` on the same sequence of collections.
///
/// # Errors
///
/// Returns [`SetError::InvalidArgument`](setclique_core::SetError) if the
/// suite's collection spec is invalid.
pub fn run_benchmark_suite(
    run: &RunConfig,
    suite_index: usize,
    suite: &BenchmarkSuite,
) -> Result<Vec<BenchmarkResult>> {
    let seed = suite_seed(base_seed(run), suite_index);
    let spec = suite.collection;
    let config = BenchmarkConfig::for_suite(suite_index, suite, run);
    let collections = (0..config.total_runs())
        .map(|i| {
            let seed = seed.wrapping_add(i as u64);
            Collection::with_seed(spec.dimensions, spec.range, spec.cards, seed)
        })
        .collect::<Result<Vec<_>>>()?;

    let results = suite
        .finders
        .iter()
        .map(|&kind| {
            let finder = build_finder(kind, run.thread_count);
            Benchmark::new(config.clone(), finder, |i| collections[i].clone()).run()
        })
        .collect();
    Ok(results)
}

/// Runs the consistency check described by `suite`.
pub fn run_consistency_suite(
    run: &RunConfig,
    suite_index: usize,
    suite: &ConsistencySuite,
) -> Result<ConsistencyReport> {
    let reference = build_finder(suite.reference, run.thread_count);
    let candidate = build_finder(suite.candidate, run.thread_count);
    ConsistencyTest::new(
        reference.as_ref(),
        candidate.as_ref(),
        suite.collection,
        suite.set_size,
        suite.trials,
    )
    .with_seed(suite_seed(base_seed(run), suite_index))
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use setclique_config::{CollectionSpec, FinderKind};

    #[test]
    fn test_suite_seed_separates_suites() {
        assert_eq!(suite_seed(10, 0), 10);
        assert_ne!(suite_seed(10, 1), suite_seed(10, 2));
    }

    #[test]
    fn test_benchmark_suite_finders_see_same_collections() {
        let run = RunConfig::new().with_random_seed(3).with_run_counts(1, 2);
        let suite = BenchmarkSuite::new(CollectionSpec::new(4, 3, 20), 3);
        let results = run_benchmark_suite(&run, 0, &suite).unwrap();
        assert_eq!(results.len(), 3);

        let counts: Vec<Vec<usize>> = results
            .iter()
            .map(|r| r.runs.iter().map(|run| run.set_count).collect())
            .collect();
        assert_eq!(counts[0], counts[1]);
        assert_eq!(counts[0], counts[2]);
    }

    #[test]
    fn test_consistency_suite() {
        let run = RunConfig::new().with_random_seed(12);
        let suite = ConsistencySuite::new(
            CollectionSpec::new(4, 4, 30),
            4,
            FinderKind::Incremental,
            FinderKind::ParallelClique,
            3,
        );
        let report = run_consistency_suite(&run, 0, &suite).unwrap();
        assert!(report.passed());
        assert_eq!(report.candidate, "parallel_clique");
    }

    #[test]
    fn test_invalid_suite() {
        let run = RunConfig::new().with_random_seed(1);
        let suite = BenchmarkSuite::new(CollectionSpec::new(2, 2, 5), 3);
        assert!(run_benchmark_suite(&run, 0, &suite).is_err());
    }
}
