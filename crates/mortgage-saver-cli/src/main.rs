use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process;

use mortgage_saver_cli::commands;
use mortgage_saver_cli::commands::mortgage::{MortgageArgs, TotalValueArgs};
use mortgage_saver_cli::commands::refinance::CompareArgs;
use mortgage_saver_cli::output::{self, OutputFormat};
use mortgage_saver_cli::logging;

/// Fixed-rate mortgage calculations
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage payments, amortization and refinance breakeven",
    long_about = "Computes fixed-rate mortgage payments with cent-exact rounding, full \
                  amortization schedules, and the time needed to recover refinance \
                  closing costs. Rates on the command line are percentages (6.5)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare monthly payments at two rates and compute refinance breakeven
    Compare(CompareArgs),
    /// Payment, APY and payout summary for one loan
    Summary(MortgageArgs),
    /// Month-by-month amortization schedule
    Schedule(MortgageArgs),
    /// Principal a given monthly payment would retire
    TotalValue(TotalValueArgs),
    /// Print version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Compare(args) => {
            commands::refinance::run_compare(args, &cli.output)
        }
        Commands::Summary(args) => {
            commands::mortgage::run_summary(args).and_then(|r| output::emit(&cli.output, &r))
        }
        Commands::Schedule(args) => {
            commands::mortgage::run_schedule(args).and_then(|r| output::emit(&cli.output, &r))
        }
        Commands::TotalValue(args) => {
            commands::mortgage::run_total_value(args).and_then(|r| output::emit(&cli.output, &r))
        }
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
