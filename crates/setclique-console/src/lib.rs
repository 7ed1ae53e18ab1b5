//! Colorful console output for finder and benchmark events.
//!
//! Provides a custom `tracing` layer that formats `setclique` events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (find, benchmark and consistency start/end)
//! - **DEBUG**: Per-reference summaries
//! - **TRACE**: Individual difference groups

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const DEFAULT_DIRECTIVES: &str = "setclique_solver=info,setclique_benchmark=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect.
/// `RUST_LOG` overrides the default directives.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(
                std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| DEFAULT_DIRECTIVES.into()),
            );

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SetConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats finder and benchmark events with colors.
pub struct SetConsoleLayer;

impl<S: Subscriber> Layer<S> for SetConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("setclique_solver") && !target.starts_with("setclique_benchmark") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{} {}", format_elapsed(), output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    finder: Option<String>,
    reference_finder: Option<String>,
    candidate: Option<String>,
    problem: Option<String>,
    card_count: Option<u64>,
    dimension_count: Option<u64>,
    set_size: Option<i64>,
    set_count: Option<u64>,
    duration_ms: Option<u64>,
    reference: Option<u64>,
    group_count: Option<u64>,
    group_len: Option<u64>,
    key_len: Option<u64>,
    edge_count: Option<u64>,
    clique_count: Option<u64>,
    run_count: Option<u64>,
    trials: Option<u64>,
    passed: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "finder" => self.finder = Some(value),
            "reference" => self.reference_finder = Some(value),
            "candidate" => self.candidate = Some(value),
            "problem" => self.problem = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "card_count" => self.card_count = Some(value),
            "dimension_count" => self.dimension_count = Some(value),
            "set_size" => self.set_size = i64::try_from(value).ok(),
            "set_count" => self.set_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "reference" => self.reference = Some(value),
            "group_count" => self.group_count = Some(value),
            "group_len" => self.group_len = Some(value),
            "key_len" => self.key_len = Some(value),
            "edge_count" => self.edge_count = Some(value),
            "clique_count" => self.clique_count = Some(value),
            "run_count" => self.run_count = Some(value),
            "trials" => self.trials = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "set_size" => self.set_size = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "passed" {
            self.passed = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "find_start" => format_find_start(v),
        "find_end" => format_find_end(v),
        "reference_done" => format_reference_done(v),
        "group" if level == Level::TRACE => format_group(v),
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_end" => format_benchmark_end(v),
        "consistency_start" => format_consistency_start(v),
        "consistency_end" => format_consistency_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_find_start(v: &EventVisitor) -> String {
    format!(
        "{} {} │ {} cards │ {} dimensions │ set size {}",
        "▶".bright_green().bold(),
        v.finder.as_deref().unwrap_or("finder").white().bold(),
        count(v.card_count).bright_yellow(),
        count(v.dimension_count).bright_yellow(),
        v.set_size.unwrap_or(0).bright_magenta()
    )
}

fn format_find_end(v: &EventVisitor) -> String {
    format!(
        "{} {} done │ {} │ {} sets",
        "■".bright_cyan().bold(),
        v.finder.as_deref().unwrap_or("finder").white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.set_count).bright_magenta().bold()
    )
}

fn format_reference_done(v: &EventVisitor) -> String {
    format!(
        "  {} reference {:>6} │ {:>6} groups │ {} sets",
        "·".bright_blue(),
        count(v.reference).white(),
        count(v.group_count).white(),
        count(v.set_count).bright_magenta()
    )
}

fn format_group(v: &EventVisitor) -> String {
    format!(
        "    reference {} │ key {} dims │ {} cards │ {} edges │ {} cliques",
        count(v.reference),
        count(v.key_len),
        count(v.group_len),
        count(v.edge_count),
        count(v.clique_count)
    )
    .bright_black()
    .to_string()
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} Benchmark {} │ {} │ set size {} │ {} runs",
        "▶".bright_blue(),
        v.finder.as_deref().unwrap_or("finder").white().bold(),
        v.problem.as_deref().unwrap_or(""),
        v.set_size.unwrap_or(0).bright_magenta(),
        count(v.run_count).bright_yellow()
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} Benchmark {} │ avg {} │ {} sets",
        "◀".bright_blue(),
        v.finder.as_deref().unwrap_or("finder").white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.set_count).bright_magenta().bold()
    )
}

fn format_consistency_start(v: &EventVisitor) -> String {
    format!(
        "{} Consistency {} vs {} │ set size {} │ {} trials",
        "▶".bright_green(),
        v.reference_finder.as_deref().unwrap_or("reference").white().bold(),
        v.candidate.as_deref().unwrap_or("candidate").white().bold(),
        v.set_size.unwrap_or(0).bright_magenta(),
        count(v.trials).bright_yellow()
    )
}

fn format_consistency_end(v: &EventVisitor) -> String {
    let status = if v.passed.unwrap_or(false) {
        "PASS".bright_green().bold().to_string()
    } else {
        "FAILURE".bright_red().bold().to_string()
    };
    format!(
        "{} Consistency {} vs {} │ {} avg sets │ {}",
        "■".bright_cyan().bold(),
        v.reference_finder.as_deref().unwrap_or("reference").white(),
        v.candidate.as_deref().unwrap_or("candidate").white(),
        count(v.set_count).bright_magenta(),
        status
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            finder: Some("clique".to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_find_end_uses_grouped_counts() {
        let mut v = visitor("find_end");
        v.set_count = Some(1_080_000);
        v.duration_ms = Some(12);
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("1,080,000"));
        assert!(line.contains("12ms"));
        assert!(line.contains("clique"));
    }

    #[test]
    fn test_group_only_at_trace() {
        let v = visitor("group");
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(!format_event(&v, Level::TRACE).is_empty());
    }

    #[test]
    fn test_consistency_status() {
        let mut v = visitor("consistency_end");
        v.passed = Some(true);
        assert!(format_event(&v, Level::INFO).contains("PASS"));
        v.passed = Some(false);
        assert!(format_event(&v, Level::INFO).contains("FAILURE"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        assert!(format_event(&visitor("other"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
