//! 리스트/딕셔너리 기초와 배열 문제 데모 (Basics and array problems demo)
//!
//! 실행 방법: cargo run --bin walkthrough -- --topic problems -v

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{Value as Json, json};
use tracing::{debug, error, info};

use dsa_arrays::{
    Interval, can_partition, find_duplicate, find_kth_largest, find_missing_number,
    length_of_lis, max_subarray_sum, merge_intervals, move_zeros_to_end, product_except_self,
    rotate_array, subarray_sum, two_sum,
};
use dsa_basics::comprehensions::{even_squares, evens, square_table, squares};
use dsa_basics::{fruit_walkthrough, person_walkthrough};

#[derive(Parser, Debug)]
#[command(name = "walkthrough")]
#[command(about = "Walk through list/dictionary basics and classic array problems")]
struct Cli {
    /// Which walkthrough to run
    #[arg(short, long, value_enum, default_value_t = Topic::All)]
    topic: Topic,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Topic {
    Lists,
    Comprehensions,
    Dicts,
    Problems,
    All,
}

impl Topic {
    fn includes(self, other: Topic) -> bool {
        self == Topic::All || self == other
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "walkthrough started");

    if let Err(e) = run(&cli) {
        error!("Fatal error: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut report = serde_json::Map::new();

    if cli.topic.includes(Topic::Lists) {
        let trace = fruit_walkthrough().context("fruit list walkthrough failed")?;
        report.insert("lists".to_string(), serde_json::to_value(&trace)?);
    }
    if cli.topic.includes(Topic::Comprehensions) {
        report.insert(
            "comprehensions".to_string(),
            json!({
                "squares": squares(10),
                "evens": evens(10),
                "even_squares": even_squares(10),
                "square_table": square_table(5),
            }),
        );
    }
    if cli.topic.includes(Topic::Dicts) {
        let trace = person_walkthrough().context("person record walkthrough failed")?;
        report.insert("dicts".to_string(), serde_json::to_value(&trace)?);
    }
    if cli.topic.includes(Topic::Problems) {
        report.insert("problems".to_string(), solve_problems()?);
    }

    info!(sections = report.len(), "walkthrough finished");

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_text(&report),
    }
    Ok(())
}

/// 각 문제를 대표 입력으로 푼다 (Solves each problem on its textbook input).
fn solve_problems() -> Result<Json> {
    let mut zeros = [0, 1, 0, 3, 12];
    move_zeros_to_end(&mut zeros);

    let mut rotated = [1, 2, 3, 4, 5];
    rotate_array(&mut rotated, 2)?;

    let intervals = [(1, 3), (2, 6), (8, 10), (15, 18)]
        .into_iter()
        .map(Interval::try_from)
        .collect::<dsa_arrays::Result<Vec<_>>>()?;

    Ok(json!({
        "two_sum": two_sum(&[2, 7, 11, 15], 9),
        "max_subarray_sum": max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?,
        "move_zeros_to_end": zeros,
        "find_missing_number": find_missing_number(&[1, 2, 4, 5]),
        "rotate_array": rotated,
        "merge_intervals": merge_intervals(intervals),
        "find_duplicate": find_duplicate(&[1, 3, 4, 2, 2]),
        "subarray_sum": subarray_sum(&[1, 1, 1], 2),
        "product_except_self": product_except_self(&[1, 2, 3, 4]),
        "length_of_lis": length_of_lis(&[10, 9, 2, 5, 3, 7, 101, 18]),
        "find_kth_largest": find_kth_largest(&[3, 2, 1, 5, 6, 4], 2)?,
        "can_partition": {
            "[1, 5, 11, 5]": can_partition(&[1, 5, 11, 5]),
            "[1, 2, 3, 5]": can_partition(&[1, 2, 3, 5]),
        },
    }))
}

fn print_text(report: &serde_json::Map<String, Json>) {
    for (section, body) in report {
        println!("\n=== {section} ===");
        println!("{}", "=".repeat(60));
        match body {
            Json::Object(fields) => {
                for (name, value) in fields {
                    println!("  {name:<22} {value}");
                }
            }
            other => println!("  {other}"),
        }
    }
}
