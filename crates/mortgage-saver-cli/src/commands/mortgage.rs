use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::error::Error;

use mortgage_saver_core::currency::{round_currency, CurrencyRounding};
use mortgage_saver_core::mortgage::{self, MortgageInput, MortgageSummary, ScheduleOutput};
use mortgage_saver_core::time_value::annuity_present_value;
use mortgage_saver_core::{ComputationOutput, Money, Rate};

use super::{months_from_years, percent_to_rate};
use crate::input;
use crate::output::text::{fixed, summary_line};
use crate::output::Render;

/// Loan terms given on the command line or as a JSON/YAML document
#[derive(Args, Debug, Clone)]
pub struct MortgageArgs {
    /// Path to a JSON or YAML file with `rate` (fraction), `months` and `amount`
    #[arg(long, conflicts_with_all = ["amount", "rate"])]
    pub input: Option<String>,

    /// The amount of the loan
    #[arg(requires = "rate")]
    pub amount: Option<Decimal>,

    /// The annual interest rate, in percent (e.g. 6.5)
    pub rate: Option<Decimal>,

    /// The total length of the loan in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,
}

/// Arguments for recovering the principal a payment supports
#[derive(Args, Debug, Clone)]
pub struct TotalValueArgs {
    /// Monthly payment
    pub payment: Decimal,

    /// The annual interest rate, in percent (e.g. 6.5)
    pub rate: Decimal,

    /// The total length of the loan in years
    #[arg(long, default_value_t = 30)]
    pub term: u32,
}

fn resolve_input(args: MortgageArgs) -> Result<MortgageInput, Box<dyn Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }
    if let (Some(amount), Some(rate)) = (args.amount, args.rate) {
        return Ok(MortgageInput {
            rate: percent_to_rate(rate),
            months: months_from_years(args.term)?,
            amount,
        });
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(data);
    }
    Err("<AMOUNT> <RATE> or --input <file> (or JSON on stdin) required".into())
}

pub fn run_summary(args: MortgageArgs) -> Result<ComputationOutput<MortgageSummary>, Box<dyn Error>> {
    let input = resolve_input(args)?;
    Ok(mortgage::analyze_mortgage(&input)?)
}

pub fn run_schedule(args: MortgageArgs) -> Result<ComputationOutput<ScheduleOutput>, Box<dyn Error>> {
    let input = resolve_input(args)?;
    Ok(mortgage::build_schedule(&input)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalValueReport {
    pub payment: Money,
    pub rate: Rate,
    pub months: u32,
    /// Largest whole-cent principal the payment retires.
    pub total_value: Money,
}

pub fn run_total_value(args: TotalValueArgs) -> Result<TotalValueReport, Box<dyn Error>> {
    let rate = percent_to_rate(args.rate);
    if rate < Decimal::ZERO {
        return Err("interest rate cannot be negative".into());
    }
    if args.payment <= Decimal::ZERO {
        return Err("payment must be positive".into());
    }
    let months = months_from_years(args.term)?;
    let value = annuity_present_value(args.payment, rate, months)?;

    Ok(TotalValueReport {
        payment: args.payment,
        rate,
        months,
        total_value: round_currency(value, CurrencyRounding::Floor),
    })
}

impl Render for ComputationOutput<MortgageSummary> {
    fn render_text(&self) -> String {
        let s = &self.result;
        [
            summary_line("Rate", &fixed(s.rate, 6)),
            summary_line("Month Growth", &fixed(s.month_growth, 6)),
            summary_line("APY", &fixed(s.apy, 6)),
            summary_line("Payoff Years", &fixed(s.loan_years, 0)),
            summary_line("Payoff Months", &s.loan_months.to_string()),
            summary_line("Amount", &fixed(s.amount, 2)),
            summary_line("Monthly Payment", &fixed(s.monthly_payment, 2)),
            summary_line("Annual Payment", &fixed(s.annual_payment, 2)),
            summary_line("Total Payout", &fixed(s.total_payout, 2)),
            summary_line("Total Interest", &fixed(s.total_interest, 2)),
        ]
        .concat()
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Render for ComputationOutput<ScheduleOutput> {
    fn render_text(&self) -> String {
        let s = &self.result;
        let mut out = format!(
            "{:>6}  {:>12}  {:>12}  {:>12}  {:>14}\n",
            "Period", "Payment", "Principal", "Interest", "Balance"
        );
        for row in &s.rows {
            out.push_str(&format!(
                "{:>6}  {:>12}  {:>12}  {:>12}  {:>14}\n",
                row.period,
                fixed(row.payment, 2),
                fixed(row.principal, 2),
                fixed(row.interest, 2),
                fixed(row.balance, 2)
            ));
        }
        out.push('\n');
        out.push_str(&summary_line("Periods", &s.periods.to_string()));
        out.push_str(&summary_line("Total Principal", &fixed(s.total_principal, 2)));
        out.push_str(&summary_line("Total Interest", &fixed(s.total_interest, 2)));
        out.push_str(&summary_line("Total Paid", &fixed(s.total_paid, 2)));
        out
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Render for TotalValueReport {
    fn render_text(&self) -> String {
        [
            summary_line("Payment", &fixed(self.payment, 2)),
            summary_line("Rate", &fixed(self.rate, 6)),
            summary_line("Payoff Months", &self.months.to_string()),
            summary_line("Total Value", &fixed(self.total_value, 2)),
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn positional(amount: Decimal, rate: Decimal, term: u32) -> MortgageArgs {
        MortgageArgs {
            input: None,
            amount: Some(amount),
            rate: Some(rate),
            term,
        }
    }

    #[test]
    fn test_summary_text() {
        let text = run_summary(positional(dec!(200000), dec!(6.5), 30))
            .unwrap()
            .render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].trim_start().starts_with("Rate:"));
        assert!(lines[0].ends_with("0.065000"));
        assert!(lines[3].ends_with(" 30"));
        assert!(lines[6].ends_with("1264.14"));
        assert!(lines[8].ends_with("455090.40"));
    }

    #[test]
    fn test_schedule_text_has_every_period() {
        let out = run_schedule(positional(dec!(12000), dec!(4.5), 2)).unwrap();
        assert_eq!(out.result.periods, 24);
        let text = out.render_text();
        assert!(text.starts_with("Period"));
        assert!(text.contains("Total Principal:"));
        assert!(text.contains("12000.00"));
    }

    #[test]
    fn test_total_value_inverts_payment() {
        let report = run_total_value(TotalValueArgs {
            payment: dec!(1264.14),
            rate: dec!(6.5),
            term: 30,
        })
        .unwrap();
        assert_eq!(report.months, 360);
        assert_eq!(report.total_value, dec!(200000.62));
    }

    #[test]
    fn test_total_value_rejects_negative_rate() {
        let args = TotalValueArgs {
            payment: dec!(100),
            rate: dec!(-1),
            term: 30,
        };
        assert!(run_total_value(args).is_err());
    }
}
