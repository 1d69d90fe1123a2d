//! Fixed-rate mortgage: payment, APY, payout, and inverse present value.
//!
//! The monthly payment is fixed once at construction and ceiling-rounded to
//! the cent. Annual payment and total payout scale that rounded value, so
//! they always agree with what the amortization schedule charges.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::currency::{decimal_from_f64, dollar};
use crate::error::MortgageError;
use crate::mortgage::schedule::AmortizationSchedule;
use crate::time_value::{annuity_payment, annuity_present_value, monthly_growth};
use crate::types::{with_metadata, ComputationOutput, Money, Rate, MONTHS_IN_YEAR};
use crate::MortgageResult;

/// Rates above this draw a warning in [`analyze_mortgage`].
const HIGH_RATE_WARNING: Rate = dec!(0.25);

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Serializable mortgage terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Nominal annual rate as a fraction (0.065 = 6.5%).
    pub rate: Rate,
    /// Term in whole months.
    pub months: u32,
    /// Principal borrowed.
    pub amount: Money,
}

/// Every derived figure of a mortgage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub rate: Rate,
    pub month_growth: Decimal,
    pub apy: Rate,
    pub loan_years: Decimal,
    pub loan_months: u32,
    pub amount: Money,
    pub monthly_payment: Money,
    pub annual_payment: Money,
    pub total_payout: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

/// An immutable fixed-rate mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mortgage {
    rate: Rate,
    months: u32,
    amount: Money,
    payment: Money,
}

impl Mortgage {
    /// Build a mortgage from a fractional annual rate, a term in months and
    /// a principal. The principal is ceiling-rounded to the cent.
    pub fn new(rate: Rate, months: u32, amount: Money) -> MortgageResult<Self> {
        validate(rate, months, amount)?;

        let amount = dollar(amount);
        let growth = monthly_growth(rate);
        if growth.checked_powu(u64::from(MONTHS_IN_YEAR)).is_none() {
            return Err(MortgageError::Overflow {
                context: format!("annual compounding of rate {rate}"),
            });
        }
        let payment = dollar(annuity_payment(amount, rate, months)?);
        // Annual payment and total payout scale the payment without further checks.
        let scaled = [MONTHS_IN_YEAR, months]
            .iter()
            .all(|n| payment.checked_mul(Decimal::from(*n)).is_some());
        if !scaled {
            return Err(MortgageError::Overflow {
                context: format!("total payout of {months} payments of {payment}"),
            });
        }

        debug!(%rate, months, %amount, %payment, "mortgage constructed");

        Ok(Self {
            rate,
            months,
            amount,
            payment,
        })
    }

    /// Same as [`Mortgage::new`] for binary-float inputs.
    pub fn from_f64(rate: f64, months: u32, amount: f64) -> MortgageResult<Self> {
        Self::new(
            decimal_from_f64(rate, "rate")?,
            months,
            decimal_from_f64(amount, "amount")?,
        )
    }

    /// Build from a rate in percent (6.5) and a term in whole years.
    pub fn from_annual_percent(percent: Decimal, years: u32, amount: Money) -> MortgageResult<Self> {
        let months = years
            .checked_mul(MONTHS_IN_YEAR)
            .ok_or_else(|| MortgageError::InvalidInput {
                field: "term".into(),
                reason: format!("{years} years does not fit in a month count"),
            })?;
        Self::new(percent / dec!(100), months, amount)
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn month_growth(&self) -> Decimal {
        monthly_growth(self.rate)
    }

    /// Effective annual yield after monthly compounding.
    pub fn apy(&self) -> Rate {
        // Overflow was ruled out in `new`.
        self.month_growth().powu(u64::from(MONTHS_IN_YEAR)) - Decimal::ONE
    }

    pub fn loan_years(&self) -> Decimal {
        Decimal::from(self.months) / Decimal::from(MONTHS_IN_YEAR)
    }

    pub fn loan_months(&self) -> u32 {
        self.months
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn monthly_payment(&self) -> Money {
        self.payment
    }

    pub fn annual_payment(&self) -> Money {
        self.payment * Decimal::from(MONTHS_IN_YEAR)
    }

    pub fn total_payout(&self) -> Money {
        self.payment * Decimal::from(self.months)
    }

    pub fn total_interest(&self) -> Money {
        self.total_payout() - self.amount
    }

    /// Principal that `payment` would retire over this mortgage's rate and
    /// term. Used for what-if payment scenarios.
    pub fn total_value(&self, payment: Money) -> MortgageResult<Decimal> {
        annuity_present_value(payment, self.rate, self.months)
    }

    /// A fresh, lazily evaluated amortization schedule.
    pub fn schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule::new(self)
    }

    pub fn summary(&self) -> MortgageSummary {
        MortgageSummary {
            rate: self.rate,
            month_growth: self.month_growth(),
            apy: self.apy(),
            loan_years: self.loan_years(),
            loan_months: self.months,
            amount: self.amount,
            monthly_payment: self.payment,
            annual_payment: self.annual_payment(),
            total_payout: self.total_payout(),
            total_interest: self.total_interest(),
        }
    }
}

impl TryFrom<&MortgageInput> for Mortgage {
    type Error = MortgageError;

    fn try_from(input: &MortgageInput) -> MortgageResult<Self> {
        Mortgage::new(input.rate, input.months, input.amount)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the full payment summary for a mortgage.
pub fn analyze_mortgage(input: &MortgageInput) -> MortgageResult<ComputationOutput<MortgageSummary>> {
    let start = Instant::now();
    let mortgage = Mortgage::try_from(input)?;

    let mut warnings: Vec<String> = Vec::new();
    if mortgage.rate().is_zero() {
        warnings.push("Zero interest rate: payment is principal divided by term".into());
    } else if mortgage.rate() > HIGH_RATE_WARNING {
        warnings.push(format!(
            "Rate of {}% is unusually high for a mortgage",
            mortgage.rate() * dec!(100)
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Annuity (ceiling-rounded payment)",
        input,
        warnings,
        elapsed,
        mortgage.summary(),
    ))
}

fn validate(rate: Rate, months: u32, amount: Money) -> MortgageResult<()> {
    if months == 0 {
        return Err(MortgageError::InvalidInput {
            field: "months".into(),
            reason: "Term must be at least one month".into(),
        });
    }
    if rate < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if amount <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "amount".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    Ok(())
}
