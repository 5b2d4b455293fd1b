//! Bitweight CLI for verifying and timing popcount strategies.

mod harness;

use anyhow::Result;
use bitweight::Strategy;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "bitweight")]
#[command(about = "Popcount strategy harness", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the fixed verification cases against every strategy
    Check(harness::CheckArgs),
    /// Count the set bits in a single value
    Count(CountArgs),
}

#[derive(Debug, Parser)]
struct CountArgs {
    /// Value to count (decimal, 0x hex, or 0b binary; underscores allowed)
    #[arg(value_parser = parse_word)]
    value: u32,

    /// Strategy to use
    #[arg(short, long, default_value = "native")]
    strategy: StrategyArg,
}

#[derive(Debug, Clone, ValueEnum)]
enum StrategyArg {
    /// Bit-at-a-time scan (fixed 32 iterations)
    Scan,
    /// Kernighan's bit-clearing loop
    Kernighan,
    /// Byte-table lookup
    Table,
    /// Platform popcount intrinsic
    Native,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Strategy::Scan,
            StrategyArg::Kernighan => Strategy::Kernighan,
            StrategyArg::Table => Strategy::Table,
            StrategyArg::Native => Strategy::Native,
        }
    }
}

/// Parse a 32-bit value in decimal, hex (`0x`), or binary (`0b`) form.
fn parse_word(s: &str) -> Result<u32, String> {
    let trimmed = s.trim();
    let (digits, radix) = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = trimmed
        .strip_prefix("0b")
        .or_else(|| trimmed.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (trimmed, 10)
    };

    u32::from_str_radix(&digits.replace('_', ""), radix)
        .map_err(|e| format!("invalid 32-bit value '{}': {}", s, e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => harness::run_check(&args),
        Command::Count(args) => {
            let strategy = Strategy::from(args.strategy);
            println!("{}", strategy.count(args.value));
            Ok(())
        }
    }
}
