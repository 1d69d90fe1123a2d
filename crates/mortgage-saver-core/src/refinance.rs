//! Refinance comparison: monthly payment at two rates and the number of
//! months of savings needed to recover closing costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::error::MortgageError;
use crate::mortgage::Mortgage;
use crate::types::{with_metadata, ComputationOutput, Money, Rate, MONTHS_IN_YEAR};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceInput {
    /// Loan amount, identical before and after refinancing.
    pub amount: Money,
    /// Annual rate before refinancing (fraction).
    pub initial_rate: Rate,
    /// Annual rate after refinancing (fraction).
    pub final_rate: Rate,
    /// Term of both loans in months.
    pub term_months: u32,
    /// Closing costs of the refinance. No breakeven is computed without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refi_cost: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentComparison {
    pub initial_payment: Money,
    pub final_payment: Money,
    /// `initial_payment - final_payment`; positive when the refinance saves money.
    pub difference: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakeven {
    pub months: Decimal,
    pub years: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinanceOutput {
    pub comparison: PaymentComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven: Option<Breakeven>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Monthly payments for the same loan at two rates.
pub fn compare_payments(
    amount: Money,
    initial_rate: Rate,
    final_rate: Rate,
    term_months: u32,
) -> MortgageResult<PaymentComparison> {
    let initial = Mortgage::new(initial_rate, term_months, amount)?;
    let refinanced = Mortgage::new(final_rate, term_months, amount)?;

    let initial_payment = initial.monthly_payment();
    let final_payment = refinanced.monthly_payment();

    Ok(PaymentComparison {
        initial_payment,
        final_payment,
        difference: initial_payment - final_payment,
    })
}

/// Months (and years) of payment savings needed to recover `refi_cost`.
pub fn breakeven(refi_cost: Money, difference: Money) -> MortgageResult<Breakeven> {
    if refi_cost < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "refi_cost".into(),
            reason: "Refinance cost cannot be negative".into(),
        });
    }
    if difference.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "refinance breakeven: initial and final monthly payments are equal".into(),
        });
    }
    if difference < Decimal::ZERO {
        return Err(MortgageError::FinancialImpossibility(format!(
            "refinancing raises the monthly payment by {}; closing costs are never recovered",
            -difference
        )));
    }

    let months = refi_cost
        .checked_div(difference)
        .ok_or_else(|| MortgageError::Overflow {
            context: format!("refinance breakeven of {refi_cost} over {difference} a month"),
        })?;
    Ok(Breakeven {
        months,
        years: months / Decimal::from(MONTHS_IN_YEAR),
    })
}

/// Compare payments and, when closing costs are given, compute breakeven.
pub fn analyze_refinance(
    input: &RefinanceInput,
) -> MortgageResult<ComputationOutput<RefinanceOutput>> {
    let start = Instant::now();
    let comparison = compare_payments(
        input.amount,
        input.initial_rate,
        input.final_rate,
        input.term_months,
    )?;

    let mut warnings: Vec<String> = Vec::new();
    let breakeven = match input.refi_cost {
        Some(cost) => {
            let b = breakeven(cost, comparison.difference)?;
            if b.months > Decimal::from(input.term_months) {
                warnings.push(format!(
                    "Breakeven of {} months is longer than the {}-month term",
                    b.months.round_dp(1),
                    input.term_months
                ));
            }
            Some(b)
        }
        None => None,
    };

    debug!(
        difference = %comparison.difference,
        breakeven_months = ?breakeven.as_ref().map(|b| b.months),
        "refinance analyzed"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Refinance Breakeven (closing cost / monthly payment difference)",
        input,
        warnings,
        elapsed,
        RefinanceOutput {
            comparison,
            breakeven,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakeven_simple() {
        let b = breakeven(dec!(1200), dec!(100)).unwrap();
        assert_eq!(b.months, dec!(12));
        assert_eq!(b.years, dec!(1));
    }

    #[test]
    fn test_breakeven_equal_payments_is_division_error() {
        assert!(matches!(
            breakeven(dec!(4000), Decimal::ZERO),
            Err(MortgageError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_breakeven_higher_payment_is_impossible() {
        assert!(matches!(
            breakeven(dec!(4000), dec!(-25.00)),
            Err(MortgageError::FinancialImpossibility(_))
        ));
    }

    #[test]
    fn test_breakeven_huge_cost_is_overflow_error() {
        assert!(matches!(
            breakeven(Decimal::MAX, dec!(0.01)),
            Err(MortgageError::Overflow { .. })
        ));
    }

    #[test]
    fn test_breakeven_negative_cost() {
        assert!(matches!(
            breakeven(dec!(-1), dec!(10)),
            Err(MortgageError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_compare_same_rate() {
        let c = compare_payments(dec!(300000), dec!(0.05), dec!(0.05), 360).unwrap();
        assert_eq!(c.initial_payment, c.final_payment);
        assert!(c.difference.is_zero());
    }

    #[test]
    fn test_analyze_without_cost_has_no_breakeven() {
        let input = RefinanceInput {
            amount: dec!(300000),
            initial_rate: dec!(0.065),
            final_rate: dec!(0.055),
            term_months: 360,
            refi_cost: None,
        };
        let out = analyze_refinance(&input).unwrap();
        assert!(out.result.breakeven.is_none());
        assert!(out.result.comparison.difference > Decimal::ZERO);
    }

    #[test]
    fn test_analyze_warns_when_breakeven_exceeds_term() {
        let input = RefinanceInput {
            amount: dec!(10000),
            initial_rate: dec!(0.051),
            final_rate: dec!(0.050),
            term_months: 12,
            refi_cost: Some(dec!(5000)),
        };
        let out = analyze_refinance(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
    }
}
