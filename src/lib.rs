//! Binseq library crate
//!
//! This crate provides the core functionality for the `binseq` CLI. It is
//! organized into small modules: `generate` (random binary sequence
//! generation) and `analyze` (NIST SP 800-22 statistical quality tests). The
//! binary `src/main.rs` calls `binseq_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `Error`: error type shared by the library functions.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod analyze;
pub mod generate;

use std::fs;
use std::io::{self, Write};

use clap::{Parser, Subcommand};

use crate::analyze::{ALPHA, TestReport};
use crate::generate::generate;

/// Errors surfaced by the library and reported by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be interpreted: an unparseable size, a sequence with
    /// non-binary characters, or a sequence too short for a requested test.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The OS entropy source could not be read.
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
    /// Reading stdin or a sequence file failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run statistical quality tests on a saved sequence
    Analyze {
        /// Path to a file containing one '0'/'1' sequence
        path: String,
    },
}

/// Run the binseq CLI.
///
/// This function is the high-level entrypoint used by the `binseq` binary.
/// With no subcommand it performs the interactive flow: prompt for a
/// sequence size on stdout, read one line from stdin, generate, print the
/// sequence followed by a newline. Errors are printed to stderr and cause
/// the process to exit with a non-zero code.
///
/// Behavior summary:
/// - no subcommand: prompt, read a size, print one random binary sequence.
/// - `analyze`: read a saved sequence from a file and print the p-value and
///   pass/fail verdict of each quality test.
///
/// Example:
///
/// ```no_run
/// binseq_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    match cli.command {
        None => {
            let sequence = prompt_and_generate().unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });
            println!("{}", sequence);
        }
        Some(Commands::Analyze { path }) => {
            let report = analyze_file(&path).unwrap_or_else(|e| {
                eprintln!("error: {}", e);
                std::process::exit(1);
            });
            println!(
                "Frequency (monobit): p = {:.4} ({})",
                report.frequency,
                verdict(report.frequency)
            );
            println!("Runs: p = {:.4} ({})", report.runs, verdict(report.runs));
            println!(
                "Longest run of ones: p = {:.4} ({})",
                report.longest_run,
                verdict(report.longest_run)
            );
            println!(
                "Verdict: {}",
                if report.passed() { "random" } else { "non-random" }
            );
        }
    }
}

fn verdict(p: f64) -> &'static str {
    if p >= ALPHA { "pass" } else { "fail" }
}

/// Prompt for a size on stdout, read one line from stdin, generate.
///
/// The prompt is flushed without a newline so it shows up before the read.
/// Anything that does not parse as an integer is `InvalidInput`; there is no
/// retry loop.
fn prompt_and_generate() -> Result<String, Error> {
    print!("Enter sequence size: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let size: i64 = line.trim().parse().map_err(|_| {
        Error::InvalidInput(format!("expected an integer size, got {:?}", line.trim()))
    })?;

    generate(size)
}

/// Load a sequence file and run the quality battery over it.
fn analyze_file(path: &str) -> Result<TestReport, Error> {
    let bits = fs::read_to_string(path)?;
    TestReport::for_bits(bits.trim())
}
