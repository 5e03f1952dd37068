use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use prose_gauge::Engine;

#[derive(Parser)]
#[command(
    name = "prose-gauge",
    about = "Readability, bias and AI-likelihood metrics for prose",
    version
)]
struct Cli {
    /// TOML file overriding the built-in lexicons and benchmarks
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Counts, lexical statistics and readability
    Analyze {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<PathBuf>,
    },
    /// Inclusive-language scan
    Bias { files: Vec<PathBuf> },
    /// AI-likelihood heuristics
    Ai { files: Vec<PathBuf> },
    /// Metrics plus a quality score against a genre benchmark
    Quality {
        /// essay, cover_letter, resume or letter
        #[arg(long, default_value = "essay")]
        genre: String,
        files: Vec<PathBuf>,
    },
    /// Before/after comparison of two files
    Compare { before: PathBuf, after: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = match &cli.config {
        Some(path) => Engine::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Engine::default(),
    };

    match &cli.command {
        Command::Analyze { files } => for_each_input(files, |text| engine.analyze(text)),
        Command::Bias { files } => for_each_input(files, |text| engine.detect_bias(text)),
        Command::Ai { files } => for_each_input(files, |text| engine.score_ai_likelihood(text)),
        Command::Quality { genre, files } => {
            for_each_input(files, |text| engine.evaluate(text, genre))
        }
        Command::Compare { before, after } => {
            let before = read_file(before)?;
            let after = read_file(after)?;
            print_json(&engine.compare_texts(&before, &after))
        }
    }
}

/// Runs `analyze` over every file, or over stdin when no files are given.
fn for_each_input<T, F>(files: &[PathBuf], analyze: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&str) -> T,
{
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        return print_json(&analyze(&input));
    }
    for path in files {
        let text = read_file(path)?;
        print_json(&analyze(&text))?;
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
