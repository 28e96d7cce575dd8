use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::prelude::*;

use fresh_intervals::Inventory;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    /// Count the listed IDs that fall inside any fresh range.
    One,
    /// Count every ID covered by the merged fresh ranges.
    Two,
    /// Run both parts in order.
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Puzzle input: fresh ranges, a blank line, then ingredient IDs.
    #[arg(default_value = "Inputs/Day5_Inputs.txt")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Part::Both)]
    part: Part,
}

fn init_tracing() -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn timed<T>(part: &str, run: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = run();
    info!(part, elapsed = ?start.elapsed(), "finished");
    out
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let inventory: Inventory = text
        .parse()
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    if matches!(args.part, Part::One | Part::Both) {
        let fresh = timed("one", || inventory.fresh_count());
        println!("{fresh}");
    }

    if matches!(args.part, Part::Two | Part::Both) {
        let total = timed("two", || inventory.total_fresh())?;
        println!("{total}");
    }

    Ok(())
}
