use mortgage_saver_core::currency::{round_currency, CurrencyRounding};
use rust_decimal::{Decimal, RoundingStrategy};

/// `$1234.50` style amount, always two decimals.
pub fn money(value: Decimal) -> String {
    format!("${}", round_currency(value, CurrencyRounding::HalfUp))
}

/// Fixed number of decimals, ties to even.
pub fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Right-aligned `label:  value` line used by the summary report.
pub fn summary_line(label: &str, value: &str) -> String {
    format!("{label:>25}:  {value:>12}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money() {
        assert_eq!(money(dec!(1896.21)), "$1896.21");
        assert_eq!(money(dec!(192.8)), "$192.80");
        assert_eq!(money(dec!(-25)), "$-25.00");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(dec!(20.74258452), 1), "20.7");
        assert_eq!(fixed(dec!(1.72854871), 2), "1.73");
        assert_eq!(fixed(dec!(30), 0), "30");
        assert_eq!(fixed(dec!(0.065), 6), "0.065000");
    }

    #[test]
    fn test_summary_line_alignment() {
        let line = summary_line("Rate", "0.065000");
        assert_eq!(line, format!("{}Rate:      0.065000\n", " ".repeat(21)));
    }
}
