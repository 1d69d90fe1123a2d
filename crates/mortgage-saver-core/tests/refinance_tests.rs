use mortgage_saver_core::refinance::{analyze_refinance, RefinanceInput};
use mortgage_saver_core::MortgageError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn thirty_year_refi(refi_cost: Option<Decimal>) -> RefinanceInput {
    RefinanceInput {
        amount: dec!(300000),
        initial_rate: dec!(0.065),
        final_rate: dec!(0.055),
        term_months: 360,
        refi_cost,
    }
}

#[test]
fn test_refinance_breakeven_reference() {
    let out = analyze_refinance(&thirty_year_refi(Some(dec!(4000)))).unwrap();
    let c = &out.result.comparison;

    // 300k at 6.5% is ~1896.20, at 5.5% ~1703.37
    assert!((c.initial_payment - dec!(1896.20)).abs() <= dec!(0.02));
    assert!((c.final_payment - dec!(1703.37)).abs() <= dec!(0.02));
    assert_eq!(c.difference, c.initial_payment - c.final_payment);

    let b = out.result.breakeven.expect("breakeven with refi cost");
    assert!(b.months > Decimal::ZERO);
    assert_eq!(b.months, dec!(4000) / c.difference);
    assert_eq!(b.years, b.months / dec!(12));
    // ~20.7 months
    assert!((b.months - dec!(20.7)).abs() < dec!(0.1), "got {}", b.months);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_refinance_without_cost() {
    let out = analyze_refinance(&thirty_year_refi(None)).unwrap();
    assert!(out.result.breakeven.is_none());
    let json = serde_json::to_value(&out.result).unwrap();
    assert!(json.get("breakeven").is_none());
}

#[test]
fn test_refinance_identical_rates_is_reported() {
    let mut input = thirty_year_refi(Some(dec!(4000)));
    input.final_rate = input.initial_rate;
    let err = analyze_refinance(&input).unwrap_err();
    assert!(matches!(err, MortgageError::DivisionByZero { .. }));
    assert!(err.to_string().contains("equal"));
}

#[test]
fn test_refinance_to_higher_rate_is_reported() {
    let mut input = thirty_year_refi(Some(dec!(4000)));
    input.final_rate = dec!(0.07);
    assert!(matches!(
        analyze_refinance(&input),
        Err(MortgageError::FinancialImpossibility(_))
    ));
}

#[test]
fn test_refinance_input_from_json() {
    let input: RefinanceInput = serde_json::from_str(
        r#"{"amount":"300000","initial_rate":"0.065","final_rate":"0.055","term_months":360}"#,
    )
    .unwrap();
    assert!(input.refi_cost.is_none());
    assert_eq!(input.amount, dec!(300000));
}
