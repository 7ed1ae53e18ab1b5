//! Benchmarking framework for setclique.
//!
//! This module provides types and utilities for timing set finders against
//! generated collections, checking finders against each other, and
//! generating reports.
//!
//! # Overview
//!
//! The framework allows you to:
//! - Time several finders on the same sequence of collections
//! - Execute warmup runs before measurement
//! - Compare two finders over many random collections ([`ConsistencyTest`])
//! - Export results to CSV and Markdown
//!
//! # Example
//!
//! Timing a finder:
//!
//! ```
//! use setclique_benchmark::{Benchmark, BenchmarkConfig};
//! use setclique_core::Collection;
//! use setclique_solver::CliqueFinder;
//!
//! let config = BenchmarkConfig::new("4x3", "4 dimensions, 3 values, 15 cards", 3)
//!     .with_runs(0, 2);
//! let benchmark = Benchmark::new(config, CliqueFinder, |run| {
//!     Collection::with_seed(4, 3, 15, run as u64).unwrap()
//! });
//! let result = benchmark.run();
//! assert_eq!(result.run_count(), 2);
//! assert_eq!(result.set_size, 3);
//! ```

mod config;
mod consistency;
mod report;
mod result;
mod runner;
mod suite;

pub use config::BenchmarkConfig;
pub use consistency::{ConsistencyOutcome, ConsistencyReport, ConsistencyTest};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::Benchmark;
pub use suite::{run_benchmark_suite, run_consistency_suite, suite_seed};
