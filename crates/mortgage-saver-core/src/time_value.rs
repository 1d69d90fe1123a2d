use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::types::{Money, Rate, MONTHS_IN_YEAR};
use crate::MortgageResult;

/// Monthly compounding factor for a nominal annual rate: `1 + rate / 12`.
pub fn monthly_growth(rate: Rate) -> Decimal {
    Decimal::ONE + rate / Decimal::from(MONTHS_IN_YEAR)
}

/// `1 - growth^-months`, the share of a level-pay annuity's undiscounted
/// payments that survives discounting back to today.
pub fn discount_factor(rate: Rate, months: u32) -> MortgageResult<Decimal> {
    let growth = monthly_growth(rate);
    let compounded = growth
        .checked_powu(u64::from(months))
        .ok_or_else(|| MortgageError::Overflow {
            context: format!("compounding {growth} over {months} months"),
        })?;

    if compounded.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "monthly compounding factor".into(),
        });
    }

    Ok(Decimal::ONE - Decimal::ONE / compounded)
}

/// Level monthly payment (unrounded) that retires `principal` over `months`.
pub fn annuity_payment(principal: Money, rate: Rate, months: u32) -> MortgageResult<Decimal> {
    if months == 0 {
        return Err(MortgageError::InvalidInput {
            field: "months".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let discount = discount_factor(rate, months)?;
    if discount.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity discount factor".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(Decimal::from(MONTHS_IN_YEAR) * discount))
        .ok_or_else(|| overflow(format!("annuity payment on {principal}")))
}

/// Present value of `months` level payments, the inverse of [`annuity_payment`].
pub fn annuity_present_value(payment: Money, rate: Rate, months: u32) -> MortgageResult<Decimal> {
    let value = if rate.is_zero() {
        payment.checked_mul(Decimal::from(months))
    } else {
        let discount = discount_factor(rate, months)?;
        payment
            .checked_div(rate)
            .and_then(|v| v.checked_mul(Decimal::from(MONTHS_IN_YEAR) * discount))
    };
    value.ok_or_else(|| overflow(format!("present value of a {payment} payment")))
}

fn overflow(context: String) -> MortgageError {
    MortgageError::Overflow { context }
}
