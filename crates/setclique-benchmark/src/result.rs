//! Benchmark result types.

use std::time::Duration;

/// One measured finder execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// Time spent inside the finder.
    pub solve_time: Duration,
    /// Cards in the collection searched.
    pub card_count: usize,
    /// Sets found.
    pub set_count: usize,
}

impl BenchmarkRun {
    /// Returns sets found per second.
    ///
    /// # Example
    ///
    /// ```
    /// use setclique_benchmark::BenchmarkRun;
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     run_index: 0,
    ///     solve_time: Duration::from_secs(2),
    ///     card_count: 81,
    ///     set_count: 1080,
    /// };
    /// assert!((run.sets_per_second() - 540.0).abs() < 0.001);
    /// ```
    pub fn sets_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.set_count as f64 / self.solve_time.as_secs_f64()
        }
    }
}

/// Aggregated runs of one finder on one collection shape.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Finder name.
    pub finder_name: String,
    /// Description of the collections searched.
    pub problem_name: String,
    /// Target set size.
    pub set_size: i64,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    pub fn new(
        name: impl Into<String>,
        finder_name: impl Into<String>,
        problem_name: impl Into<String>,
        set_size: i64,
    ) -> Self {
        Self {
            name: name.into(),
            finder_name: finder_name.into(),
            problem_name: problem_name.into(),
            set_size,
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the average solve time.
    ///
    /// # Example
    ///
    /// ```
    /// use setclique_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", "clique", "4x3x15", 3);
    /// for (i, ms) in [100, 200].into_iter().enumerate() {
    ///     result.add_run(BenchmarkRun {
    ///         run_index: i,
    ///         solve_time: Duration::from_millis(ms),
    ///         card_count: 15,
    ///         set_count: 4,
    ///     });
    /// }
    /// assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    /// ```
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time).sum();
        total / self.runs.len() as u32
    }

    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the mean number of sets found per run.
    pub fn avg_set_count(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: usize = self.runs.iter().map(|r| r.set_count).sum();
        total as f64 / self.runs.len() as f64
    }

    pub fn avg_sets_per_second(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: f64 = self.runs.iter().map(BenchmarkRun::sets_per_second).sum();
        total / self.runs.len() as f64
    }
}
