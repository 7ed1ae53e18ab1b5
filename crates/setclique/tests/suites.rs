//! Configured suites run end to end.

use setclique::benchmark::{run_benchmark_suite, run_consistency_suite, ConsistencyTest};
use setclique::prelude::*;
use setclique::{BenchmarkSuite, CollectionSpec, ConsistencySuite};

#[test]
fn standard_consistency_suites_pass() {
    let config = RunConfig::standard().with_random_seed(42);
    for (i, suite) in config.consistency.iter().enumerate() {
        // Large suites are covered by the benchmarks; keep this quick.
        if suite.collection.cards > 40 {
            continue;
        }
        let trials = suite.trials.min(3);
        let small = ConsistencySuite { trials, ..suite.clone() };
        let report = run_consistency_suite(&config, i, &small).unwrap();
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn benchmark_suite_times_each_finder() {
    let config = RunConfig::default()
        .with_random_seed(7)
        .with_run_counts(0, 2);
    let suite = BenchmarkSuite::new(CollectionSpec::new(4, 3, 15), 3)
        .with_finders(vec![FinderKind::Clique, FinderKind::BruteForce]);
    let results = run_benchmark_suite(&config, 0, &suite).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].finder_name, "clique");
    assert_eq!(results[1].finder_name, "brute_force");
    for result in &results {
        assert_eq!(result.run_count(), 2);
    }
    // Same seeded collections for both finders.
    assert_eq!(results[0].avg_set_count(), results[1].avg_set_count());
}

#[test]
fn consistency_test_between_clique_finders() {
    let report = ConsistencyTest::new(
        &IncrementalFinder,
        &ParallelCliqueFinder::default(),
        CollectionSpec::new(4, 3, 18),
        3,
        5,
    )
    .with_seed(11)
    .run()
    .unwrap();
    assert!(report.passed());
    assert_eq!(report.trials_run, 5);
}
