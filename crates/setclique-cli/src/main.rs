use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;
mod script;

pub(crate) type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "setclique", version, about = "Find every Set in a collection of cards")]
struct Cli {
    /// Disable console logging
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the fringe cases, the standard consistency checks and the standard benchmarks
    Script {
        /// Base seed for generated collections
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a collection and print every Set in it
    Find(FindArgs),
    /// Run the benchmark suites of a config file
    Bench {
        /// TOML or YAML run configuration
        #[arg(long, short)]
        config: PathBuf,
    },
    /// Run the consistency suites of a config file
    Check {
        /// TOML or YAML run configuration
        #[arg(long, short)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct FindArgs {
    /// Values per card
    #[arg(long, short)]
    dimensions: usize,

    /// Distinct values per dimension
    #[arg(long, short)]
    range: u32,

    /// Cards to draw from the deck
    #[arg(long, short)]
    cards: usize,

    /// Cards per Set
    #[arg(long, short = 'k', allow_hyphen_values = true)]
    set_size: String,

    /// Seed for drawing the collection
    #[arg(long)]
    seed: Option<u64>,

    /// Spread reference cards over worker threads
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel
    #[arg(long, requires = "parallel", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    threads: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        setclique_console::init();
    }

    let result = match &cli.command {
        Command::Script { seed } => script::run(*seed),
        Command::Find(args) => commands::find(args),
        Command::Bench { config } => commands::bench(config),
        Command::Check { config } => commands::check(config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_find_accepts_negative_set_size() {
        let cli = Cli::try_parse_from([
            "setclique", "find", "-d", "4", "-r", "3", "-c", "15", "-k", "-1",
        ])
        .unwrap();
        match cli.command {
            Command::Find(args) => assert_eq!(args.set_size, "-1"),
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_threads_require_parallel() {
        let parsed = Cli::try_parse_from([
            "setclique", "find", "-d", "4", "-r", "3", "-c", "15", "-k", "3", "--threads", "2",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let parsed = Cli::try_parse_from([
            "setclique", "find", "-d", "4", "-r", "3", "-c", "15", "-k", "3", "--parallel",
            "--threads", "0",
        ]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from([
            "setclique", "find", "-d", "4", "-r", "3", "-c", "15", "-k", "3", "--parallel",
            "--threads", "2",
        ])
        .unwrap();
        match cli.command {
            Command::Find(args) => assert_eq!(args.threads, Some(2)),
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_quiet_is_global() {
        let cli = Cli::try_parse_from(["setclique", "script", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }
}
