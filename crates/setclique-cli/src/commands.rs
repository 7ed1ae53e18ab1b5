//! `find`, `bench` and `check` commands.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use owo_colors::OwoColorize;
use setclique::benchmark::{
    run_benchmark_suite, run_consistency_suite, BenchmarkResult, ConsistencyReport, CsvExporter,
    MarkdownReport,
};
use setclique::{
    parse_set_size, CardSet, CliqueFinder, Collection, ParallelCliqueFinder, Result, RunConfig,
    SetFinder, ThreadCount,
};

use crate::{CliResult, FindArgs};

pub fn find(args: &FindArgs) -> CliResult {
    let set_size = parse_set_size(&args.set_size)?;
    let collection = match args.seed {
        Some(seed) => Collection::with_seed(args.dimensions, args.range, args.cards, seed)?,
        None => Collection::new(args.dimensions, args.range, args.cards)?,
    };

    let finder: Box<dyn SetFinder> = if args.parallel {
        Box::new(ParallelCliqueFinder::new(thread_count(args.threads)))
    } else {
        Box::new(CliqueFinder)
    };

    println!("{}", "Collection".bold());
    for (i, card) in collection.iter().enumerate() {
        println!("  {:>4}  {}", i, card);
    }

    let sets = finder.find_sets(&collection, set_size);
    println!("{}", "Sets".bold());
    for set in &sets {
        println!("  {}", set);
    }
    println!(
        "{} sets of {} in {} cards",
        sets.len().bright_green(),
        set_size,
        collection.len()
    );
    Ok(ExitCode::SUCCESS)
}

pub fn bench(path: &Path) -> CliResult {
    let config = RunConfig::load(path)?;
    let results = run_benchmarks(&config)?;
    write_reports(&config, &results)?;
    Ok(ExitCode::SUCCESS)
}

pub fn check(path: &Path) -> CliResult {
    let config = RunConfig::load(path)?;
    let reports = run_checks(&config)?;
    Ok(exit_code(&reports))
}

fn thread_count(threads: Option<usize>) -> ThreadCount {
    match threads {
        Some(n) => ThreadCount::Count(n),
        None => ThreadCount::Auto,
    }
}

pub(crate) fn run_benchmarks(config: &RunConfig) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    for (i, suite) in config.benchmarks.iter().enumerate() {
        results.extend(run_benchmark_suite(config, i, suite)?);
    }
    Ok(results)
}

/// Prints the comparison table and writes the configured report files.
pub(crate) fn write_reports(config: &RunConfig, results: &[BenchmarkResult]) -> io::Result<()> {
    let refs: Vec<&BenchmarkResult> = results.iter().collect();
    print!("{}", MarkdownReport::comparison(&refs));

    if let Some(path) = &config.csv_output {
        CsvExporter::to_file(&refs, path)?;
        println!("CSV written to {}", path);
    }
    if let Some(path) = &config.markdown_output {
        MarkdownReport::to_file(&refs, path)?;
        println!("Markdown written to {}", path);
    }
    Ok(())
}

/// Runs every consistency suite, printing each report. Stops at the first
/// failing suite.
pub(crate) fn run_checks(config: &RunConfig) -> Result<Vec<ConsistencyReport>> {
    let mut reports = Vec::with_capacity(config.consistency.len());
    for (i, suite) in config.consistency.iter().enumerate() {
        let report = run_consistency_suite(config, i, suite)?;
        if report.passed() {
            println!("{}", report);
        } else {
            println!("{}", report.bright_red());
        }
        let failed = !report.passed();
        reports.push(report);
        if failed {
            break;
        }
    }
    Ok(reports)
}

pub(crate) fn exit_code(reports: &[ConsistencyReport]) -> ExitCode {
    if reports.iter().all(ConsistencyReport::passed) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Renders sets as `[[(0, 0), (1, 1)], ...]`.
pub(crate) fn format_sets(sets: &[CardSet]) -> String {
    let items: Vec<String> = sets.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use setclique::{BenchmarkSuite, CollectionSpec, ConsistencySuite, FinderKind};

    #[test]
    fn test_thread_count_mapping() {
        assert_eq!(thread_count(None), ThreadCount::Auto);
        assert_eq!(thread_count(Some(3)), ThreadCount::Count(3));
    }

    #[test]
    fn test_format_sets() {
        assert_eq!(format_sets(&[]), "[]");
        let coll = Collection::with_seed(2, 3, 2, 1).unwrap();
        let sets = CliqueFinder.find_sets(&coll, 1);
        let text = format_sets(&sets);
        assert!(text.starts_with("[[("));
        assert!(text.ends_with(")]]"));
    }

    #[test]
    fn test_reports_written_where_configured() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bench.csv");
        let md = dir.path().join("bench.md");
        let mut config = RunConfig::new()
            .with_random_seed(3)
            .with_run_counts(0, 1)
            .with_benchmark(
                BenchmarkSuite::new(CollectionSpec::new(4, 3, 12), 3)
                    .with_finders(vec![FinderKind::Clique]),
            );
        config.csv_output = Some(csv.display().to_string());
        config.markdown_output = Some(md.display().to_string());

        let results = run_benchmarks(&config).unwrap();
        write_reports(&config, &results).unwrap();
        assert_eq!(std::fs::read_to_string(csv).unwrap().lines().count(), 2);
        let markdown = std::fs::read_to_string(md).unwrap();
        assert!(markdown.contains("| clique |"));
        assert!(markdown.contains("# Benchmark: benchmark 0"));
    }

    #[test]
    fn test_checks_run_configured_suites() {
        let config = RunConfig::new().with_random_seed(5).with_consistency(ConsistencySuite::new(
            CollectionSpec::new(4, 3, 12),
            3,
            FinderKind::BruteForce,
            FinderKind::Clique,
            2,
        ));
        let reports = run_checks(&config).unwrap();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].passed());
        assert_eq!(reports[0].trials_run, 2);
    }
}
