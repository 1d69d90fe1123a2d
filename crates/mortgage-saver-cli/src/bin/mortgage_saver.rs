use clap::Parser;
use colored::Colorize;
use std::process;

use mortgage_saver_cli::commands::refinance::{self, CompareArgs};
use mortgage_saver_cli::logging;
use mortgage_saver_cli::output::OutputFormat;

/// Refinance comparison with the loan terms given directly on the command line
#[derive(Parser)]
#[command(
    name = "MortgageSaver",
    version,
    about = "This program will calculate the difference between two interest rates and \
             the amount of time it will take to payoff a refinance if closing costs are \
             provided."
)]
struct Cli {
    #[command(flatten)]
    compare: CompareArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Log calculation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = refinance::run_compare(cli.compare, &cli.output);

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}
