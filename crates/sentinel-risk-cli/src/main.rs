mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::assess::AssessArgs;
use commands::reference::ReferenceArgs;

/// Rule-based AML transaction risk scoring
#[derive(Parser)]
#[command(
    name = "sentinel",
    version,
    about = "Rule-based AML transaction risk scoring",
    long_about = "Evaluates a transaction and customer profile against a fixed set of \
                  AML risk rules: geographic exposure, amount thresholds, structuring, \
                  sanctions and PEP keyword screening, customer profile, and transaction \
                  type. Deterministic and offline; suitable as an always-available \
                  fallback when model-based analysis is unreachable."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a transaction + customer pair
    Assess(AssessArgs),
    /// Print the active reference tables
    Reference(ReferenceArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Assess(args) => commands::assess::run_assess(args),
        Commands::Reference(args) => commands::reference::run_reference(args),
        Commands::Version => {
            println!("sentinel {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
