//! Lazy amortization schedule.
//!
//! Interest is computed on a six-decimal copy of the nominal rate and
//! rounded half-up to the cent. The period that can be cleared by one
//! payment (or the last nominal period) takes the whole remaining balance
//! as principal, so the principal column always sums to the loan amount.

use std::iter::FusedIterator;
use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::{quantize_rate, round_currency, CurrencyRounding};
use crate::mortgage::loan::{Mortgage, MortgageInput};
use crate::types::{with_metadata, ComputationOutput, Money, Rate, MONTHS_IN_YEAR};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Lazy schedule
// ---------------------------------------------------------------------------

/// One period of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based payment number.
    pub period: u32,
    pub principal: Money,
    pub interest: Money,
}

impl ScheduleEntry {
    /// Cash paid this period. Equals the monthly payment except on the last one.
    pub fn payment(&self) -> Money {
        self.principal + self.interest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleState {
    Accumulating { balance: Money },
    Done,
}

/// Pull-based sequence of [`ScheduleEntry`] values in period order.
///
/// Obtained from [`Mortgage::schedule`]. Finite (at most the loan term) and
/// not restartable: once exhausted it keeps returning `None`.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    payment: Money,
    rate: Rate,
    months: u32,
    period: u32,
    state: ScheduleState,
}

impl AmortizationSchedule {
    pub(crate) fn new(mortgage: &Mortgage) -> Self {
        Self {
            payment: mortgage.monthly_payment(),
            rate: quantize_rate(mortgage.rate()),
            months: mortgage.loan_months(),
            period: 0,
            state: ScheduleState::Accumulating {
                balance: mortgage.amount(),
            },
        }
    }

    /// Balance still owed before the next entry, or zero once finished.
    pub fn remaining_balance(&self) -> Money {
        match self.state {
            ScheduleState::Accumulating { balance } => balance,
            ScheduleState::Done => Decimal::ZERO,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == ScheduleState::Done
    }
}

impl Iterator for AmortizationSchedule {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<ScheduleEntry> {
        let balance = match self.state {
            ScheduleState::Accumulating { balance } => balance,
            ScheduleState::Done => return None,
        };
        self.period += 1;

        let interest = round_currency(
            balance * self.rate / Decimal::from(MONTHS_IN_YEAR),
            CurrencyRounding::HalfUp,
        );

        if self.payment >= balance + interest || self.period >= self.months {
            self.state = ScheduleState::Done;
            debug!(
                period = self.period,
                months = self.months,
                final_principal = %balance,
                "amortization schedule complete"
            );
            return Some(ScheduleEntry {
                period: self.period,
                principal: balance,
                interest,
            });
        }

        let principal = self.payment - interest;
        self.state = ScheduleState::Accumulating {
            balance: balance - principal,
        };
        Some(ScheduleEntry {
            period: self.period,
            principal,
            interest,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            ScheduleState::Accumulating { .. } => {
                (1, Some(self.months.saturating_sub(self.period) as usize))
            }
            ScheduleState::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for AmortizationSchedule {}

// ---------------------------------------------------------------------------
// Eager schedule table
// ---------------------------------------------------------------------------

/// A schedule period with the balance left after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub monthly_payment: Money,
    pub rows: Vec<ScheduleRow>,
    pub periods: u32,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_paid: Money,
}

/// Materialize the full amortization table for a mortgage.
pub fn build_schedule(input: &MortgageInput) -> MortgageResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mortgage = Mortgage::try_from(input)?;

    let mut balance = mortgage.amount();
    let mut total_principal = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut rows = Vec::with_capacity(mortgage.loan_months() as usize);

    for entry in mortgage.schedule() {
        balance -= entry.principal;
        total_principal += entry.principal;
        total_interest += entry.interest;
        rows.push(ScheduleRow {
            period: entry.period,
            payment: entry.payment(),
            principal: entry.principal,
            interest: entry.interest,
            balance,
        });
    }

    let periods = rows.len() as u32;
    let mut warnings: Vec<String> = Vec::new();
    if periods < mortgage.loan_months() {
        warnings.push(format!(
            "Rounding retires the loan after {periods} of {} scheduled months",
            mortgage.loan_months()
        ));
    }

    let output = ScheduleOutput {
        monthly_payment: mortgage.monthly_payment(),
        rows,
        periods,
        total_principal,
        total_interest,
        total_paid: total_principal + total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Amortization (half-up interest, balance-clearing final period)",
        input,
        warnings,
        elapsed,
        output,
    ))
}
