//! Tests for run configuration.

use super::*;
use std::io::Write;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 7
        thread_count = "none"
        warmup_count = 0

        [[benchmarks]]
        collection = { dimensions = 10, range = 3, cards = 80 }
        set_size = 3

        [[consistency]]
        collection = { dimensions = 4, range = 3, cards = 15 }
        set_size = 3
        candidate = "parallel_clique"
        trials = 30
    "#;

    let config = RunConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.thread_count, ThreadCount::None);
    assert_eq!(config.warmup_count, 0);
    assert_eq!(config.run_count, 3);
    assert_eq!(config.benchmarks[0].finders, default_finders());
    assert_eq!(config.consistency[0].reference, FinderKind::BruteForce);
    assert_eq!(config.consistency[0].candidate, FinderKind::ParallelClique);
    config.validate().unwrap();
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        thread_count:
          count: 2
        consistency:
          - collection: { dimensions: 2, range: 1000, cards: 15 }
            set_size: 15
            reference: incremental
            candidate: clique
            trials: 5
    "#;

    let config = RunConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.thread_count, ThreadCount::Count(2));
    assert_eq!(config.consistency[0].reference, FinderKind::Incremental);
    assert_eq!(config.consistency[0].set_size, 15);
}

#[test]
fn test_load_picks_format_by_extension() {
    let mut yaml = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(yaml, "random_seed: 3").unwrap();
    assert_eq!(RunConfig::load(yaml.path()).unwrap().random_seed, Some(3));

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "random_seed = 4").unwrap();
    assert_eq!(RunConfig::load(toml.path()).unwrap().random_seed, Some(4));
}

#[test]
fn test_load_missing_file() {
    let err = RunConfig::load("/nonexistent/setclique.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_validate_rejects_oversized_collection() {
    let config = RunConfig::new().with_benchmark(BenchmarkSuite::new(CollectionSpec::new(2, 3, 10), 3));
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_trials_and_threads() {
    let config = RunConfig::new().with_consistency(ConsistencySuite::new(
        CollectionSpec::new(4, 3, 15),
        3,
        FinderKind::BruteForce,
        FinderKind::Clique,
        0,
    ));
    assert!(config.validate().is_err());

    let config = RunConfig::new().with_thread_count(ThreadCount::Count(0));
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_accepts_huge_deck() {
    let spec = CollectionSpec::new(30, 1000, 15);
    assert!(spec.validate().is_ok());
}

#[test]
fn test_standard_suites_are_valid() {
    let config = RunConfig::standard();
    config.validate().unwrap();
    assert_eq!(config.consistency.len(), 13);
    assert_eq!(config.benchmarks.len(), 13);
    assert_eq!(config.benchmarks[0].finders.len(), 3);
    assert_eq!(config.benchmarks[5].finders.len(), 2);
}

#[test]
fn test_finder_names() {
    assert_eq!(FinderKind::BruteForce.to_string(), "brute_force");
    assert_eq!(FinderKind::ParallelClique.name(), "parallel_clique");
}
