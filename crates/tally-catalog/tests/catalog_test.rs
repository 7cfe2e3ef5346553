use std::collections::HashMap;

use tally_catalog::business::break_even::BreakEvenCalculator;
use tally_catalog::business::roi::RoiCalculator;
use tally_catalog::business::tco::TcoCalculator;
use tally_catalog::construction::concrete_slab::ConcreteSlabCalculator;
use tally_catalog::finance::compound_interest::CompoundInterestCalculator;
use tally_catalog::finance::loan_payment::LoanPaymentCalculator;
use tally_catalog::finance::rate_lock::RateLockCalculator;
use tally_catalog::health::bmi::BmiCalculator;
use tally_catalog::health::bmr_tdee::BmrTdeeCalculator;
use tally_catalog::legal::personal_injury::PersonalInjuryCalculator;
use tally_catalog::math::percentage_change::PercentageChangeCalculator;
use tally_registry::{CalcError, Calculator, CalculatorInputs, Outcome};
use tally_types::{CalcValue, RiskLevel};

fn try_calculate_with<C: Calculator>(
    calculator: &C,
    inputs: &[(&str, CalcValue)],
) -> Result<Outcome, CalcError> {
    let variables: HashMap<String, CalcValue> =
        inputs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    calculator.calculate(&CalculatorInputs::new(&variables))
}

fn calculate_with<C: Calculator>(calculator: &C, inputs: &[(&str, CalcValue)]) -> Outcome {
    try_calculate_with(calculator, inputs).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}

#[test]
fn roi_calculator_works() {
    let outcome = calculate_with(
        &RoiCalculator,
        &[
            ("initial_investment", CalcValue::Float(1000.0)),
            ("final_value", CalcValue::Float(1500.0)),
            ("investment_period_months", CalcValue::Integer(12)),
        ],
    );
    assert_close(outcome.metric("roi_pct").unwrap(), 50.0);
    assert_close(outcome.metric("annualized_roi_pct").unwrap(), 50.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn roi_flags_losing_investments_as_high_risk() {
    let outcome = calculate_with(
        &RoiCalculator,
        &[
            ("initial_investment", CalcValue::Float(1000.0)),
            ("final_value", CalcValue::Float(800.0)),
        ],
    );
    assert_close(outcome.metric("roi_pct").unwrap(), -20.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
    assert!(outcome.metric("annualized_roi_pct").is_none());
}

#[test]
fn break_even_calculator_works() {
    let outcome = calculate_with(
        &BreakEvenCalculator,
        &[
            ("fixed_costs", CalcValue::Float(10_000.0)),
            ("price_per_unit", CalcValue::Float(50.0)),
            ("variable_cost_per_unit", CalcValue::Float(30.0)),
        ],
    );
    assert_close(outcome.metric("break_even_units").unwrap(), 500.0);
    assert_close(outcome.metric("break_even_revenue").unwrap(), 25_000.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn break_even_rejects_unreachable_margin() {
    let err = try_calculate_with(
        &BreakEvenCalculator,
        &[
            ("fixed_costs", CalcValue::Float(10_000.0)),
            ("price_per_unit", CalcValue::Float(30.0)),
            ("variable_cost_per_unit", CalcValue::Float(30.0)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
}

#[test]
fn tco_calculator_works() {
    let outcome = calculate_with(
        &TcoCalculator,
        &[
            ("purchase_price", CalcValue::Float(30_000.0)),
            ("annual_operating_cost", CalcValue::Float(2_000.0)),
            ("annual_maintenance_cost", CalcValue::Float(1_000.0)),
            ("holding_period_years", CalcValue::Float(5.0)),
            ("resale_value", CalcValue::Float(10_000.0)),
        ],
    );
    assert_close(outcome.metric("total_cost").unwrap(), 35_000.0);
    assert_close(outcome.metric("annual_cost").unwrap(), 7_000.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn loan_payment_matches_standard_amortization() {
    let outcome = calculate_with(
        &LoanPaymentCalculator,
        &[
            ("principal", CalcValue::Float(200_000.0)),
            ("annual_rate_pct", CalcValue::Float(6.0)),
            ("term_months", CalcValue::Float(360.0)),
        ],
    );
    let payment = outcome.metric("monthly_payment").unwrap();
    assert!((payment - 1199.10).abs() < 0.01, "payment was {payment}");
    assert_close(outcome.metric("total_paid").unwrap(), payment * 360.0);
}

#[test]
fn zero_rate_loan_divides_principal_evenly() {
    let outcome = calculate_with(
        &LoanPaymentCalculator,
        &[
            ("principal", CalcValue::Float(1_200.0)),
            ("annual_rate_pct", CalcValue::Float(0.0)),
            ("term_months", CalcValue::Float(12.0)),
        ],
    );
    assert_close(outcome.metric("monthly_payment").unwrap(), 100.0);
    assert_close(outcome.metric("total_interest").unwrap(), 0.0);
}

#[test]
fn compound_interest_calculator_works() {
    let outcome = calculate_with(
        &CompoundInterestCalculator,
        &[
            ("principal", CalcValue::Float(1_000.0)),
            ("annual_rate_pct", CalcValue::Float(10.0)),
            ("years", CalcValue::Float(2.0)),
            ("compounds_per_year", CalcValue::Float(1.0)),
        ],
    );
    assert_close(outcome.metric("future_value").unwrap(), 1_210.0);
    assert_close(outcome.metric("interest_earned").unwrap(), 210.0);
}

#[test]
fn rate_lock_with_cushion_is_low_risk() {
    let outcome = calculate_with(
        &RateLockCalculator,
        &[
            ("lock_date", CalcValue::String("2024-01-01T00:00:00Z".into())),
            ("closing_date", CalcValue::String("2024-01-31T00:00:00Z".into())),
            ("lock_period_days", CalcValue::Float(45.0)),
        ],
    );
    assert_close(outcome.metric("days_to_closing").unwrap(), 30.0);
    assert_close(outcome.metric("days_remaining").unwrap(), 15.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn expired_rate_lock_is_high_risk() {
    let outcome = calculate_with(
        &RateLockCalculator,
        &[
            ("lock_date", CalcValue::String("2024-01-01T00:00:00Z".into())),
            ("closing_date", CalcValue::String("2024-01-31T00:00:00Z".into())),
            ("lock_period_days", CalcValue::Float(20.0)),
        ],
    );
    assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
}

#[test]
fn rate_lock_rejects_unparseable_dates() {
    let err = try_calculate_with(
        &RateLockCalculator,
        &[
            ("lock_date", CalcValue::String("January 1st".into())),
            ("closing_date", CalcValue::String("2024-01-31T00:00:00Z".into())),
            ("lock_period_days", CalcValue::Float(45.0)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
}

#[test]
fn bmi_calculator_works() {
    let outcome = calculate_with(
        &BmiCalculator,
        &[
            ("weight_kg", CalcValue::Float(70.0)),
            ("height_cm", CalcValue::Float(175.0)),
        ],
    );
    let bmi = outcome.metric("bmi").unwrap();
    assert!((bmi - 22.857).abs() < 0.01, "bmi was {bmi}");
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn bmi_obese_range_is_high_risk() {
    let outcome = calculate_with(
        &BmiCalculator,
        &[
            ("weight_kg", CalcValue::Float(110.0)),
            ("height_cm", CalcValue::Float(170.0)),
        ],
    );
    assert_eq!(outcome.analysis.risk_level, RiskLevel::High);
}

#[test]
fn bmr_tdee_uses_mifflin_st_jeor() {
    let outcome = calculate_with(
        &BmrTdeeCalculator,
        &[
            ("weight_kg", CalcValue::Float(80.0)),
            ("height_cm", CalcValue::Float(180.0)),
            ("age_years", CalcValue::Float(30.0)),
            ("sex", CalcValue::String("male".into())),
            ("activity_level", CalcValue::String("sedentary".into())),
        ],
    );
    assert_close(outcome.metric("bmr").unwrap(), 1_780.0);
    assert_close(outcome.metric("tdee").unwrap(), 2_136.0);
}

#[test]
fn bmr_tdee_rejects_unknown_activity_level() {
    let err = try_calculate_with(
        &BmrTdeeCalculator,
        &[
            ("weight_kg", CalcValue::Float(80.0)),
            ("height_cm", CalcValue::Float(180.0)),
            ("age_years", CalcValue::Float(30.0)),
            ("sex", CalcValue::String("male".into())),
            ("activity_level", CalcValue::String("heroic".into())),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
}

#[test]
fn personal_injury_calculator_works() {
    let outcome = calculate_with(
        &PersonalInjuryCalculator,
        &[
            ("medical_expenses", CalcValue::Float(20_000.0)),
            ("lost_wages", CalcValue::Float(5_000.0)),
            ("multiplier", CalcValue::Float(2.0)),
        ],
    );
    assert_close(outcome.metric("estimated_settlement").unwrap(), 45_000.0);
    assert_close(outcome.metric("pain_and_suffering").unwrap(), 40_000.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Low);
}

#[test]
fn personal_injury_rejects_out_of_band_multiplier() {
    let err = try_calculate_with(
        &PersonalInjuryCalculator,
        &[
            ("medical_expenses", CalcValue::Float(20_000.0)),
            ("lost_wages", CalcValue::Float(0.0)),
            ("multiplier", CalcValue::Float(9.0)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
}

#[test]
fn concrete_slab_calculator_works() {
    let outcome = calculate_with(
        &ConcreteSlabCalculator,
        &[
            ("length_ft", CalcValue::Float(10.0)),
            ("width_ft", CalcValue::Float(10.0)),
            ("thickness_in", CalcValue::Float(4.0)),
        ],
    );
    // 10 * 10 * (4/12) * 1.10 waste = 36.667 cubic feet
    let yards = outcome.metric("volume_cubic_yards").unwrap();
    assert!((yards - 1.358).abs() < 0.01, "volume was {yards}");
    assert_close(outcome.metric("bags_80lb").unwrap(), 62.0);
    assert_eq!(outcome.analysis.risk_level, RiskLevel::Medium);
}

#[test]
fn percentage_change_calculator_works() {
    let outcome = calculate_with(
        &PercentageChangeCalculator,
        &[
            ("original_value", CalcValue::Float(200.0)),
            ("new_value", CalcValue::Float(250.0)),
        ],
    );
    assert_close(outcome.metric("change_pct").unwrap(), 25.0);
    assert_close(outcome.metric("change").unwrap(), 50.0);
}

#[test]
fn percentage_change_from_zero_is_rejected() {
    let err = try_calculate_with(
        &PercentageChangeCalculator,
        &[
            ("original_value", CalcValue::Float(0.0)),
            ("new_value", CalcValue::Float(10.0)),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { .. }));
}

#[test]
fn missing_required_field_is_a_structured_error() {
    let err = try_calculate_with(&BmiCalculator, &[("weight_kg", CalcValue::Float(70.0))])
        .unwrap_err();
    assert_eq!(err, CalcError::MissingInput { name: "height_cm".into() });
}

#[test]
fn outcome_serializes_with_metrics_and_analysis() {
    let outcome = calculate_with(
        &BmiCalculator,
        &[
            ("weight_kg", CalcValue::Float(70.0)),
            ("height_cm", CalcValue::Float(175.0)),
        ],
    );
    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json["metrics"]["bmi"].is_number());
    assert_eq!(json["analysis"]["risk_level"], "Low");
    assert!(json["analysis"]["recommendation"].is_string());
}
