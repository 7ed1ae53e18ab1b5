//! The classic driver: fringe cases, consistency checks, then benchmarks.

use std::process::ExitCode;

use owo_colors::OwoColorize;
use setclique::{parse_set_size, CliqueFinder, Collection, RunConfig, SetFinder};

use crate::commands::{exit_code, format_sets, run_benchmarks, run_checks, write_reports};
use crate::CliResult;

pub fn run(seed: Option<u64>) -> CliResult {
    let mut config = RunConfig::standard();
    if let Some(seed) = seed {
        config = config.with_random_seed(seed);
    }

    section("Fringe cases");
    fringe_cases(seed)?;

    section("Consistency");
    let reports = run_checks(&config)?;
    if !reports.iter().all(|r| r.passed()) {
        return Ok(exit_code(&reports));
    }

    section("Benchmarks");
    let results = run_benchmarks(&config)?;
    write_reports(&config, &results)?;
    Ok(ExitCode::SUCCESS)
}

fn section(title: &str) {
    println!();
    println!("{}", title.bright_cyan().bold());
}

fn fringe_cases(seed: Option<u64>) -> setclique::Result<()> {
    let draw = |cards| match seed {
        Some(seed) => Collection::with_seed(4, 3, cards, seed),
        None => Collection::new(4, 3, cards),
    };

    for (set_size, cards) in [(-1, 15), (0, 15), (1, 15), (2, 4)] {
        let sets = CliqueFinder.find_sets(&draw(cards)?, set_size);
        println!("Test with set size of {:>2}: {}", set_size, format_sets(&sets));
    }

    if let Err(e) = draw(100) {
        println!("Invalid argument check: {}", e);
    }
    if let Err(e) = parse_set_size("Wrong type") {
        println!("Invalid argument check: {}", e);
    }
    Ok(())
}
