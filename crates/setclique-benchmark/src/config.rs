//! What one benchmark measures.

use setclique_config::{BenchmarkSuite, RunConfig};

/// Describes the workload of one benchmark: the collections searched, the set
/// size, and how often the finder runs.
///
/// ```
/// use setclique_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("dense", "2 dimensions, 1000 values, 50 cards", 3)
///     .with_runs(0, 5);
/// assert_eq!(config.total_runs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Benchmark name, shared by every finder timed on the same suite.
    pub name: String,
    /// Description of the collections searched.
    pub problem: String,
    /// Target set size.
    pub set_size: i64,
    /// Unmeasured runs before measurement.
    pub warmup_count: usize,
    /// Measured runs.
    pub run_count: usize,
}

impl BenchmarkConfig {
    /// Creates a configuration with one warmup and three measured runs.
    pub fn new(name: impl Into<String>, problem: impl Into<String>, set_size: i64) -> Self {
        Self {
            name: name.into(),
            problem: problem.into(),
            set_size,
            warmup_count: 1,
            run_count: 3,
        }
    }

    /// Builds the configuration for suite `index` of a run configuration.
    ///
    /// ```
    /// use setclique_benchmark::BenchmarkConfig;
    /// use setclique_config::{BenchmarkSuite, CollectionSpec, RunConfig};
    ///
    /// let run = RunConfig::new().with_run_counts(0, 7);
    /// let suite = BenchmarkSuite::new(CollectionSpec::new(4, 3, 15), 3);
    /// let config = BenchmarkConfig::for_suite(2, &suite, &run);
    /// assert_eq!(config.name, "benchmark 2");
    /// assert_eq!(config.problem, "4 dimensions, 3 values per dimension, 15 cards");
    /// assert_eq!((config.warmup_count, config.run_count), (0, 7));
    /// ```
    pub fn for_suite(index: usize, suite: &BenchmarkSuite, run: &RunConfig) -> Self {
        Self::new(format!("benchmark {}", index), suite.collection.to_string(), suite.set_size)
            .with_runs(run.warmup_count, run.run_count)
    }

    pub fn with_runs(mut self, warmup_count: usize, run_count: usize) -> Self {
        self.warmup_count = warmup_count;
        self.run_count = run_count;
        self
    }

    /// Collections the factory is asked for: measured runs plus warmups.
    pub fn total_runs(&self) -> usize {
        self.warmup_count + self.run_count
    }
}
