mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::AmortizeArgs;
use commands::analysis::{BrrrrArgs, ProjectArgs, ScoreArgs};
use commands::financing::{ClosingCostsArgs, FinancingDefaultsArgs, ValidateFinancingArgs};

/// Real-estate investment deal analysis
#[derive(Parser)]
#[command(
    name = "deal",
    version,
    about = "Real-estate investment deal analysis with decimal precision",
    long_about = "A CLI for the dealsletter financial model: BRRRR three-phase \
                  analysis, N-year hold projections, financing defaults and \
                  closing costs, amortization schedules, and deal scoring."
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
    /// Run a BRRRR three-phase analysis
    Brrrr(BrrrrArgs),
    /// Project an N-year buy-and-hold
    Project(ProjectArgs),
    /// Score a deal and classify its risk
    Score(ScoreArgs),
    /// Look up financing defaults for a strategy
    FinancingDefaults(FinancingDefaultsArgs),
    /// Break down closing costs for a financing type
    ClosingCosts(ClosingCostsArgs),
    /// Monthly payment and amortization split for a loan
    Amortize(AmortizeArgs),
    /// Advisory sanity check of financing parameters
    ValidateFinancing(ValidateFinancingArgs),
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
        Commands::Brrrr(args) => commands::analysis::run_brrrr(args),
        Commands::Project(args) => commands::analysis::run_project(args),
        Commands::Score(args) => commands::analysis::run_score(args),
        Commands::FinancingDefaults(args) => commands::financing::run_financing_defaults(args),
        Commands::ClosingCosts(args) => commands::financing::run_closing_costs(args),
        Commands::Amortize(args) => commands::amortization::run_amortize(args),
        Commands::ValidateFinancing(args) => commands::financing::run_validate_financing(args),
        Commands::Version => {
            println!("deal {}", env!("CARGO_PKG_VERSION"));
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
