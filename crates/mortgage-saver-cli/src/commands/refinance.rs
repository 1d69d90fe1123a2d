use clap::Args;
use rust_decimal::Decimal;
use std::error::Error;

use mortgage_saver_core::refinance::{self, RefinanceInput, RefinanceOutput};
use mortgage_saver_core::ComputationOutput;

use super::{months_from_years, percent_to_rate};
use crate::output::text::{fixed, money};
use crate::output::{self, OutputFormat, Render};

/// Arguments for comparing a loan at two rates
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// The amount of the loan
    pub amount: Decimal,

    /// The interest rate before refinancing, in percent (e.g. 6.5)
    pub initial: Decimal,

    /// The interest rate after refinancing, in percent
    #[arg(value_name = "FINAL")]
    pub final_rate: Decimal,

    /// The costs to complete the refinance
    #[arg(long)]
    pub refi: Option<Decimal>,

    /// The total length of the loan in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,
}

fn refinance_input(args: &CompareArgs) -> Result<RefinanceInput, Box<dyn Error>> {
    Ok(RefinanceInput {
        amount: args.amount,
        initial_rate: percent_to_rate(args.initial),
        final_rate: percent_to_rate(args.final_rate),
        term_months: months_from_years(args.term)?,
        refi_cost: args.refi,
    })
}

/// Print the payment comparison and, with `--refi`, the breakeven.
///
/// When breakeven cannot be computed the payment block is still printed
/// before the error is returned.
pub fn run_compare(args: CompareArgs, format: &OutputFormat) -> Result<(), Box<dyn Error>> {
    let input = refinance_input(&args)?;
    match refinance::analyze_refinance(&input) {
        Ok(report) => output::emit(format, &report),
        Err(e) if input.refi_cost.is_some() => {
            let payments_only = RefinanceInput {
                refi_cost: None,
                ..input
            };
            output::emit(format, &refinance::analyze_refinance(&payments_only)?)?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

impl Render for ComputationOutput<RefinanceOutput> {
    fn render_text(&self) -> String {
        let c = &self.result.comparison;
        let mut out = String::from("*** Monthly Payment ***\n");
        out.push_str(&format!("Initial    : {}\n", money(c.initial_payment)));
        out.push_str(&format!("Final      : {}\n", money(c.final_payment)));
        out.push_str(&format!("Difference : {}\n", money(c.difference)));

        if let Some(b) = &self.result.breakeven {
            out.push_str("\n*** Refinance ***\n");
            out.push_str(&format!("Months : {}\n", fixed(b.months, 1)));
            out.push_str(&format!("Years  : {}\n", fixed(b.years, 2)));
        }
        out
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
