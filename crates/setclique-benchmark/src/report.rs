//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per measured run, across any number of results.
///
/// # Example
///
/// ```
/// use setclique_benchmark::{BenchmarkResult, BenchmarkRun, CsvExporter};
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", "clique", "deck", 3);
/// result.add_run(BenchmarkRun {
///     run_index: 0,
///     solve_time: Duration::from_millis(100),
///     card_count: 81,
///     set_count: 1080,
/// });
///
/// let csv = CsvExporter::to_string(&[&result]);
/// assert!(csv.starts_with("finder,problem,set_size,run_index,solve_time_ms"));
/// assert!(csv.contains("clique,deck,3,0,100.000,81,1080,"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark results to a CSV string.
    pub fn to_string(results: &[&BenchmarkResult]) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(results, &mut output);
        output
    }

    fn render(results: &[&BenchmarkResult], output: &mut String) -> fmt::Result {
        writeln!(
            output,
            "finder,problem,set_size,run_index,solve_time_ms,card_count,set_count,sets_per_second"
        )?;

        for result in results {
            for run in &result.runs {
                writeln!(
                    output,
                    "{},{},{},{},{:.3},{},{},{:.2}",
                    result.finder_name,
                    csv_field(&result.problem_name),
                    result.set_size,
                    run.run_index,
                    run.solve_time.as_secs_f64() * 1000.0,
                    run.card_count,
                    run.set_count,
                    run.sets_per_second(),
                )?;
            }
        }

        Ok(())
    }

    /// Exports benchmark results to a CSV file.
    pub fn to_file(results: &[&BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(results))
    }

    /// Writes benchmark results as CSV to a writer.
    pub fn write<W: Write>(results: &[&BenchmarkResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())
    }
}

// Problem names are free text and may contain commas.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use setclique_benchmark::{BenchmarkResult, BenchmarkRun, MarkdownReport};
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", "clique", "deck", 3);
/// result.add_run(BenchmarkRun {
///     run_index: 0,
///     solve_time: Duration::from_millis(100),
///     card_count: 81,
///     set_count: 1080,
/// });
///
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("## Summary"));
/// assert!(md.contains("| Run | Time (ms) | Cards | Sets |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report for one result.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;
        writeln!(output, "- **Finder**: {}", result.finder_name)?;
        writeln!(output, "- **Problem**: {}", result.problem_name)?;
        writeln!(output, "- **Set size**: {}", result.set_size)?;
        writeln!(output, "- **Runs**: {}", result.run_count())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        if result.runs.is_empty() {
            writeln!(output, "*No runs completed.*")?;
        } else {
            writeln!(output, "| Metric | Value |")?;
            writeln!(output, "|--------|-------|")?;
            writeln!(output, "| Avg Sets | {:.1} |", result.avg_set_count())?;
            writeln!(output, "| Avg Time | {:.3} ms |", millis(result.avg_solve_time()))?;
            writeln!(output, "| Min Time | {:.3} ms |", millis(result.min_solve_time()))?;
            writeln!(output, "| Max Time | {:.3} ms |", millis(result.max_solve_time()))?;
            writeln!(output, "| Avg Sets/sec | {:.0} |", result.avg_sets_per_second())?;
        }
        writeln!(output)?;

        if !result.runs.is_empty() {
            writeln!(output, "## Run Details")?;
            writeln!(output)?;
            writeln!(output, "| Run | Time (ms) | Cards | Sets |")?;
            writeln!(output, "|-----|-----------|-------|------|")?;
            for run in &result.runs {
                writeln!(
                    output,
                    "| {} | {:.3} | {} | {} |",
                    run.run_index,
                    millis(run.solve_time),
                    run.card_count,
                    run.set_count,
                )?;
            }
        }

        Ok(())
    }

    /// Generates a comparison table across finders and problems.
    ///
    /// ```
    /// use setclique_benchmark::{BenchmarkResult, MarkdownReport};
    ///
    /// let a = BenchmarkResult::new("Test", "clique", "deck", 3);
    /// let b = BenchmarkResult::new("Test", "brute_force", "deck", 3);
    /// let table = MarkdownReport::comparison(&[&a, &b]);
    /// assert!(table.contains("## Comparison"));
    /// assert!(table.contains("| brute_force | deck | 3 |"));
    /// ```
    pub fn comparison(results: &[&BenchmarkResult]) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(results, &mut output);
        output
    }

    fn render_comparison(results: &[&BenchmarkResult], output: &mut String) -> fmt::Result {
        writeln!(output, "## Comparison")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Finder | Problem | Set size | Avg Sets | Avg Time (ms) | Min Time (ms) |"
        )?;
        writeln!(
            output,
            "|--------|---------|----------|----------|---------------|---------------|"
        )?;

        for result in results {
            writeln!(
                output,
                "| {} | {} | {} | {:.1} | {:.3} | {:.3} |",
                result.finder_name,
                result.problem_name,
                result.set_size,
                result.avg_set_count(),
                millis(result.avg_solve_time()),
                millis(result.min_solve_time()),
            )?;
        }

        Ok(())
    }

    /// The comparison table followed by one report per result.
    pub fn document(results: &[&BenchmarkResult]) -> String {
        let mut output = Self::comparison(results);
        for result in results {
            output.push('\n');
            output.push_str(&Self::to_string(result));
        }
        output
    }

    /// Writes [`document`](Self::document) to a file.
    pub fn to_file(results: &[&BenchmarkResult], path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::document(results))
    }

    /// Writes [`document`](Self::document) to a writer.
    pub fn write<W: Write>(results: &[&BenchmarkResult], mut writer: W) -> io::Result<()> {
        writer.write_all(Self::document(results).as_bytes())
    }
}

fn millis(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
