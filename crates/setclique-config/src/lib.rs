//! Configuration system for setclique.
//!
//! Load benchmark and consistency suites from TOML or YAML files so runs can
//! be changed without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use setclique_config::{FinderKind, RunConfig, ThreadCount};
//!
//! let config = RunConfig::from_toml_str(r#"
//!     random_seed = 42
//!     thread_count = { count = 4 }
//!     run_count = 5
//!
//!     [[benchmarks]]
//!     collection = { dimensions = 4, range = 3, cards = 15 }
//!     set_size = 3
//!     finders = ["clique", "incremental"]
//!
//!     [[consistency]]
//!     collection = { dimensions = 2, range = 4, cards = 15 }
//!     set_size = 4
//!     reference = "brute_force"
//!     candidate = "clique"
//!     trials = 10
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! assert_eq!(config.benchmarks[0].finders, vec![FinderKind::Clique, FinderKind::Incremental]);
//! assert_eq!(config.consistency[0].trials, 10);
//! ```
//!
//! Use the standard suites when no file is given:
//!
//! ```
//! use setclique_config::RunConfig;
//!
//! let config = RunConfig::load("setclique.toml").unwrap_or_else(|_| RunConfig::standard());
//! assert!(!config.consistency.is_empty());
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for setclique_core::SetError {
    fn from(err: ConfigError) -> Self {
        setclique_core::SetError::Config(err.to_string())
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Base seed for generated collections. `None` draws from the OS.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Worker threads for the parallel clique finder.
    #[serde(default)]
    pub thread_count: ThreadCount,

    /// Unmeasured runs before each benchmark.
    #[serde(default = "default_warmup_count")]
    pub warmup_count: usize,

    /// Measured runs per benchmark.
    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Path for the CSV benchmark export.
    #[serde(default)]
    pub csv_output: Option<String>,

    /// Path for the Markdown benchmark report.
    #[serde(default)]
    pub markdown_output: Option<String>,

    /// Benchmark suites.
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkSuite>,

    /// Consistency suites.
    #[serde(default)]
    pub consistency: Vec<ConsistencySuite>,
}

fn default_warmup_count() -> usize {
    1
}

fn default_run_count() -> usize {
    3
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            thread_count: ThreadCount::default(),
            warmup_count: default_warmup_count(),
            run_count: default_run_count(),
            csv_output: None,
            markdown_output: None,
            benchmarks: Vec::new(),
            consistency: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Creates a new default configuration with no suites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, choosing YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Sets warmup and measured run counts.
    pub fn with_run_counts(mut self, warmup_count: usize, run_count: usize) -> Self {
        self.warmup_count = warmup_count;
        self.run_count = run_count;
        self
    }

    /// Adds a benchmark suite.
    pub fn with_benchmark(mut self, suite: BenchmarkSuite) -> Self {
        self.benchmarks.push(suite);
        self
    }

    /// Adds a consistency suite.
    pub fn with_consistency(mut self, suite: ConsistencySuite) -> Self {
        self.consistency.push(suite);
        self
    }

    /// Checks every suite for parameters a run could not satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ThreadCount::Count(0) = self.thread_count {
            return Err(ConfigError::Invalid("thread count must be positive".into()));
        }
        if self.run_count == 0 {
            return Err(ConfigError::Invalid("run_count must be positive".into()));
        }
        for (i, suite) in self.benchmarks.iter().enumerate() {
            suite
                .collection
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("benchmark {}: {}", i, e)))?;
            if suite.finders.is_empty() {
                return Err(ConfigError::Invalid(format!("benchmark {}: no finders", i)));
            }
        }
        for (i, suite) in self.consistency.iter().enumerate() {
            suite
                .collection
                .validate()
                .map_err(|e| ConfigError::Invalid(format!("consistency {}: {}", i, e)))?;
            if suite.trials == 0 {
                return Err(ConfigError::Invalid(format!("consistency {}: zero trials", i)));
            }
        }
        Ok(())
    }

    /// Returns the consistency checks and benchmarks of the classic driver
    /// script.
    pub fn standard() -> Self {
        use FinderKind::{BruteForce, Clique, Incremental};

        let check = |d, r, n, k, candidate, reference, trials| {
            ConsistencySuite::new(CollectionSpec::new(d, r, n), k, reference, candidate, trials)
        };
        let all: &[FinderKind] = &[Clique, Incremental, BruteForce];
        let fast: &[FinderKind] = &[Clique, Incremental];
        let bench = |d, r, n, k, finders: &[FinderKind]| {
            BenchmarkSuite::new(CollectionSpec::new(d, r, n), k).with_finders(finders.to_vec())
        };

        let mut config = Self::new().with_run_counts(0, 1);
        config.consistency = vec![
            // The incremental finder against brute force
            check(4, 3, 15, 3, Incremental, BruteForce, 30),
            check(2, 4, 15, 4, Incremental, BruteForce, 10),
            check(2, 100, 100, 2, Incremental, BruteForce, 5),
            check(2, 1000, 10, 10, Incremental, BruteForce, 2),
            // The clique finder against brute force
            check(4, 3, 15, 3, Clique, BruteForce, 30),
            check(2, 4, 15, 4, Clique, BruteForce, 10),
            check(2, 100, 100, 2, Clique, BruteForce, 5),
            check(2, 1000, 10, 10, Clique, BruteForce, 2),
            // Larger runs against the incremental finder
            check(2, 1000, 15, 3, Clique, Incremental, 30),
            check(2, 1000, 15, 15, Clique, Incremental, 5),
            check(30, 2, 15, 4, Clique, Incremental, 5),
            check(4, 100, 50, 3, Clique, Incremental, 5),
            check(4, 4, 50, 4, Clique, Incremental, 5),
        ];
        config.benchmarks = vec![
            bench(4, 3, 15, 3, all),
            bench(10, 3, 15, 3, all),
            bench(4, 10, 15, 3, all),
            bench(4, 3, 40, 3, all),
            bench(4, 3, 15, 5, all),
            // High ranges make the compatibility graphs dense
            bench(3, 1000, 20, 3, fast),
            bench(3, 1000, 20, 5, fast),
            bench(2, 10, 50, 3, fast),
            bench(2, 50, 50, 3, fast),
            bench(2, 1000, 50, 3, fast),
            // More cards favour the clique finder
            bench(4, 4, 50, 4, fast),
            bench(10, 3, 80, 3, fast),
            bench(10, 3, 130, 3, fast),
        ];
        config
    }
}

/// Thread count for the parallel clique finder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Let rayon pick (one per logical CPU).
    #[default]
    Auto,

    /// Run sequentially.
    None,

    /// Specific number of threads.
    Count(usize),
}

/// Names a set-finding implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinderKind {
    /// Group partitioning and clique enumeration.
    Clique,

    /// The clique finder over a rayon thread pool.
    ParallelClique,

    /// Include/exclude recursion with per-dimension pruning.
    Incremental,

    /// Every subset of the target size, filtered by the Set rule.
    BruteForce,
}

impl FinderKind {
    /// Returns the snake_case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            FinderKind::Clique => "clique",
            FinderKind::ParallelClique => "parallel_clique",
            FinderKind::Incremental => "incremental",
            FinderKind::BruteForce => "brute_force",
        }
    }
}

impl fmt::Display for FinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters for generating a random collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectionSpec {
    /// Number of dimensions per card.
    pub dimensions: usize,

    /// Number of values per dimension.
    pub range: u32,

    /// Number of cards to sample.
    pub cards: usize,
}

impl CollectionSpec {
    pub fn new(dimensions: usize, range: u32, cards: usize) -> Self {
        Self {
            dimensions,
            range,
            cards,
        }
    }

    /// Checks the parameters against the same rules as collection construction.
    pub fn validate(&self) -> Result<(), String> {
        if self.dimensions == 0 {
            return Err("dimensions must be positive".into());
        }
        if self.range == 0 {
            return Err("range must be positive".into());
        }
        let deck = u32::try_from(self.dimensions)
            .ok()
            .and_then(|d| (self.range as usize).checked_pow(d));
        match deck {
            Some(deck) if self.cards > deck => Err(format!(
                "{} cards exceed deck size {}",
                self.cards, deck
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for CollectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dimensions, {} values per dimension, {} cards",
            self.dimensions, self.range, self.cards
        )
    }
}

/// A benchmark: several finders timed on one collection shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSuite {
    pub collection: CollectionSpec,

    pub set_size: i64,

    #[serde(default = "default_finders")]
    pub finders: Vec<FinderKind>,
}

fn default_finders() -> Vec<FinderKind> {
    vec![
        FinderKind::Clique,
        FinderKind::Incremental,
        FinderKind::BruteForce,
    ]
}

impl BenchmarkSuite {
    pub fn new(collection: CollectionSpec, set_size: i64) -> Self {
        Self {
            collection,
            set_size,
            finders: default_finders(),
        }
    }

    pub fn with_finders(mut self, finders: Vec<FinderKind>) -> Self {
        self.finders = finders;
        self
    }
}

/// A consistency check: two finders compared over random collections.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConsistencySuite {
    pub collection: CollectionSpec,

    pub set_size: i64,

    /// Finder trusted as the oracle.
    #[serde(default = "default_reference")]
    pub reference: FinderKind,

    /// Finder under test.
    #[serde(default = "default_candidate")]
    pub candidate: FinderKind,

    pub trials: usize,
}

fn default_reference() -> FinderKind {
    FinderKind::BruteForce
}

fn default_candidate() -> FinderKind {
    FinderKind::Clique
}

impl ConsistencySuite {
    pub fn new(
        collection: CollectionSpec,
        set_size: i64,
        reference: FinderKind,
        candidate: FinderKind,
        trials: usize,
    ) -> Self {
        Self {
            collection,
            set_size,
            reference,
            candidate,
            trials,
        }
    }
}

#[cfg(test)]
mod tests;
