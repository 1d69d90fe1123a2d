pub mod mortgage;
pub mod refinance;

use mortgage_saver_core::{Rate, MONTHS_IN_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::error::Error;

/// `--term` years to a month count.
pub(crate) fn months_from_years(years: u32) -> Result<u32, Box<dyn Error>> {
    if years == 0 {
        return Err("--term must be at least 1 year".into());
    }
    years
        .checked_mul(MONTHS_IN_YEAR)
        .ok_or_else(|| format!("--term {years} is too long").into())
}

/// Command-line rates are percentages (6.5); the core works in fractions.
pub(crate) fn percent_to_rate(percent: Decimal) -> Rate {
    percent / dec!(100)
}
