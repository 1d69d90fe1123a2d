//! Currency rounding for a single two-decimal currency unit.
//!
//! Every value that becomes money passes through [`round_currency`]. Rates
//! and compounding factors stay unrounded `Decimal`; only the figures a
//! borrower would actually pay or owe are quantized.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Fractional digits of the currency unit (cents).
pub const CURRENCY_SCALE: u32 = 2;

/// Fractional digits kept on a nominal rate before computing monthly interest.
pub const RATE_SCALE: u32 = 6;

/// Rounding rule applied when quantizing to the currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyRounding {
    /// Toward positive infinity. Used for payments so the lender is never short.
    #[default]
    Ceiling,
    /// Nearest cent, ties away from zero. Used for computed interest.
    HalfUp,
    /// Nearest cent, ties to even.
    HalfEven,
    /// Toward negative infinity.
    Floor,
}

impl CurrencyRounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            CurrencyRounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
            CurrencyRounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            CurrencyRounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            CurrencyRounding::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Quantize `value` to exactly two fractional digits under `mode`.
///
/// The result always carries scale 2, so `100` becomes `100.00`. Re-rounding
/// an already rounded amount returns it unchanged.
pub fn round_currency(value: impl Into<Decimal>, mode: CurrencyRounding) -> Money {
    let mut rounded = value
        .into()
        .round_dp_with_strategy(CURRENCY_SCALE, mode.strategy());
    rounded.rescale(CURRENCY_SCALE);
    rounded
}

/// Ceiling-rounded currency amount.
pub fn dollar(value: impl Into<Decimal>) -> Money {
    round_currency(value, CurrencyRounding::Ceiling)
}

/// Convert a binary float to a currency amount.
///
/// The float is read through its shortest decimal representation, so `0.1`
/// is treated as one tenth rather than its binary expansion.
pub fn currency_from_f64(value: f64, mode: CurrencyRounding) -> MortgageResult<Money> {
    Ok(round_currency(decimal_from_f64(value, "value")?, mode))
}

/// Read a binary float as the decimal it prints as. Non-finite input is rejected.
pub fn decimal_from_f64(value: f64, field: &str) -> MortgageResult<Decimal> {
    if !value.is_finite() {
        return Err(MortgageError::InvalidInput {
            field: field.into(),
            reason: format!("{value} is not a finite number"),
        });
    }
    Decimal::from_str(&value.to_string()).map_err(|e| MortgageError::InvalidInput {
        field: field.into(),
        reason: format!("{value} is not representable as a decimal: {e}"),
    })
}

/// Reduce a nominal rate to six fractional digits (ties to even).
pub fn quantize_rate(rate: Rate) -> Rate {
    rate.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MODES: [CurrencyRounding; 4] = [
        CurrencyRounding::Ceiling,
        CurrencyRounding::HalfUp,
        CurrencyRounding::HalfEven,
        CurrencyRounding::Floor,
    ];

    #[test]
    fn test_default_mode_is_ceiling() {
        assert_eq!(CurrencyRounding::default(), CurrencyRounding::Ceiling);
        assert_eq!(dollar(dec!(1264.136046)), dec!(1264.14));
    }

    #[test]
    fn test_ceiling_rounds_up_any_fraction() {
        assert_eq!(round_currency(dec!(10.001), CurrencyRounding::Ceiling), dec!(10.01));
        assert_eq!(round_currency(dec!(10.009), CurrencyRounding::Ceiling), dec!(10.01));
        assert_eq!(round_currency(dec!(-10.009), CurrencyRounding::Ceiling), dec!(-10.00));
    }

    #[test]
    fn test_half_up_ties_away_from_zero() {
        assert_eq!(round_currency(dec!(2.345), CurrencyRounding::HalfUp), dec!(2.35));
        assert_eq!(round_currency(dec!(2.355), CurrencyRounding::HalfUp), dec!(2.36));
        assert_eq!(round_currency(dec!(2.344), CurrencyRounding::HalfUp), dec!(2.34));
        assert_eq!(round_currency(dec!(-2.345), CurrencyRounding::HalfUp), dec!(-2.35));
    }

    #[test]
    fn test_half_even_and_floor() {
        assert_eq!(round_currency(dec!(2.345), CurrencyRounding::HalfEven), dec!(2.34));
        assert_eq!(round_currency(dec!(2.355), CurrencyRounding::HalfEven), dec!(2.36));
        assert_eq!(round_currency(dec!(2.349), CurrencyRounding::Floor), dec!(2.34));
    }

    #[test]
    fn test_result_has_currency_scale() {
        let whole = dollar(100);
        assert_eq!(whole.scale(), 2);
        assert_eq!(whole.to_string(), "100.00");
        assert_eq!(round_currency(dec!(0.5), CurrencyRounding::HalfUp).to_string(), "0.50");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let samples = [
            dec!(0),
            dec!(0.004),
            dec!(0.005),
            dec!(1083.333333),
            dec!(-17.125),
            dec!(199999.995),
            dec!(12.34),
        ];
        for mode in MODES {
            for x in samples {
                let once = round_currency(x, mode);
                assert_eq!(round_currency(once, mode), once, "mode {mode:?}, value {x}");
            }
        }
    }

    #[test]
    fn test_from_f64_uses_shortest_repr() {
        // 0.1 + 0.2 prints as 0.30000000000000004; ceiling pushes it to a cent above
        let v = currency_from_f64(0.1 + 0.2, CurrencyRounding::Ceiling).unwrap();
        assert_eq!(v, dec!(0.31));
        let v = currency_from_f64(0.3, CurrencyRounding::Ceiling).unwrap();
        assert_eq!(v, dec!(0.30));
        let v = currency_from_f64(200000.0, CurrencyRounding::Ceiling).unwrap();
        assert_eq!(v, dec!(200000.00));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(currency_from_f64(f64::NAN, CurrencyRounding::Ceiling).is_err());
        assert!(currency_from_f64(f64::INFINITY, CurrencyRounding::HalfUp).is_err());
    }

    #[test]
    fn test_quantize_rate_six_places() {
        assert_eq!(quantize_rate(dec!(0.065)), dec!(0.065));
        assert_eq!(quantize_rate(dec!(0.0654321987)), dec!(0.065432));
        assert_eq!(quantize_rate(dec!(0.0000005)), dec!(0.000000));
        assert_eq!(quantize_rate(dec!(0.0000015)), dec!(0.000002));
    }
}
