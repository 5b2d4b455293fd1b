//! Fixed-case verification harness.
//!
//! Runs the canonical popcount vectors against every strategy, times each
//! invocation, and reports pass/fail per case.

use anyhow::{bail, Result};
use bitweight::Strategy;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Fixed verification cases: (input, expected weight).
const CASES: [(u32, u32); 5] = [
    (11, 3),
    (128, 1),
    (4_294_967_293, 31),
    (0, 0),
    (u32::MAX, 32),
];

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: FormatArg,

    /// Repeat each invocation this many times (timing covers all repeats)
    #[arg(short, long, default_value = "1")]
    pub iterations: u32,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum FormatArg {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON summary
    Json,
}

/// Result of one strategy applied to one fixed case.
#[derive(Debug, Clone, Serialize)]
struct CaseResult {
    strategy: Strategy,
    input: u32,
    expected: u32,
    actual: u32,
    passed: bool,
    elapsed_nanos: u128,
}

/// Summary of a full check run.
#[derive(Debug, Clone, Serialize)]
struct CheckSummary {
    iterations: u32,
    results: Vec<CaseResult>,
    passed: usize,
    failed: usize,
    total_elapsed_nanos: u128,
}

/// Run every fixed case against every strategy.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let iterations = args.iterations.max(1);
    let summary = execute(iterations);

    match args.format {
        FormatArg::Table => print_table(&summary),
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if summary.failed > 0 {
        bail!("{} of {} checks failed", summary.failed, summary.results.len());
    }
    Ok(())
}

fn execute(iterations: u32) -> CheckSummary {
    let mut results = Vec::with_capacity(Strategy::ALL.len() * CASES.len());
    let run_start = Instant::now();

    for strategy in Strategy::ALL {
        for (input, expected) in CASES {
            let start = Instant::now();
            let mut actual = 0u32;
            for _ in 0..iterations {
                actual = strategy.count(black_box(input));
            }
            let elapsed = start.elapsed();
            black_box(actual);

            results.push(CaseResult {
                strategy,
                input,
                expected,
                actual,
                passed: actual == expected,
                elapsed_nanos: elapsed.as_nanos(),
            });
        }
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;
    CheckSummary {
        iterations,
        results,
        passed,
        failed,
        total_elapsed_nanos: run_start.elapsed().as_nanos(),
    }
}

fn print_table(summary: &CheckSummary) {
    println!(
        "{:<10} {:>12} {:>9} {:>7} {:>6}  {}",
        "strategy", "input", "expected", "actual", "status", "elapsed"
    );
    for r in &summary.results {
        println!(
            "{:<10} {:>12} {:>9} {:>7} {:>6}  {}",
            r.strategy.name(),
            r.input,
            r.expected,
            r.actual,
            if r.passed { "ok" } else { "FAIL" },
            format_elapsed(Duration::from_nanos(r.elapsed_nanos as u64)),
        );
    }
    println!(
        "\n{} passed, {} failed ({} iterations per case, {} total)",
        summary.passed,
        summary.failed,
        summary.iterations,
        format_elapsed(Duration::from_nanos(summary.total_elapsed_nanos as u64)),
    );
}

/// Format a duration with a unit suited to its magnitude.
fn format_elapsed(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
