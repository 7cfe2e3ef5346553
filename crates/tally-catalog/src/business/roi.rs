//! Return-on-investment calculator.
//!
//! # Inputs
//! * `initial_investment` - amount originally invested, must be positive
//! * `final_value` - value of the investment at the end of the period
//! * `investment_period_months` - optional; enables annualized ROI
//!
//! # Metrics
//! * `roi_pct` - total return as a percentage of the initial investment
//! * `annualized_roi_pct` - only when a period was supplied

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

struct RoiInputs {
    initial_investment: f64,
    final_value: f64,
    investment_period_months: Option<f64>,
}

impl RoiInputs {
    fn parse(inputs: &CalculatorInputs) -> Result<Self, CalcError> {
        let initial_investment = inputs.get_f64("initial_investment")?;
        if initial_investment <= 0.0 {
            return Err(CalcError::invalid("initial_investment must be positive"));
        }
        let final_value = inputs.get_f64("final_value")?;
        if final_value < 0.0 {
            return Err(CalcError::invalid("final_value must not be negative"));
        }
        let investment_period_months = inputs.get_f64_opt("investment_period_months")?;
        if let Some(months) = investment_period_months {
            if months <= 0.0 {
                return Err(CalcError::invalid("investment_period_months must be positive"));
            }
        }
        Ok(Self { initial_investment, final_value, investment_period_months })
    }
}

#[derive(Debug, Default)]
pub struct RoiCalculator;

impl Calculator for RoiCalculator {
    fn slug(&self) -> &str {
        "roi-calculator"
    }

    fn name(&self) -> &str {
        "ROI Calculator"
    }

    fn category(&self) -> Category {
        Category::Business
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let parsed = RoiInputs::parse(inputs)?;

        let roi = (parsed.final_value - parsed.initial_investment) / parsed.initial_investment;
        let roi_pct = roi * 100.0;

        let analysis = if roi_pct < 0.0 {
            Analysis::new(
                RiskLevel::High,
                "The investment lost value over the period. Reassess before committing further capital.",
            )
        } else if roi_pct < 10.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Returns are positive but modest. Compare against low-risk alternatives before continuing.",
            )
        } else {
            Analysis::new(
                RiskLevel::Low,
                "Returns comfortably exceed typical low-risk benchmarks.",
            )
        };

        let mut outcome = Outcome::single("roi_pct", roi_pct, analysis);
        if let Some(months) = parsed.investment_period_months {
            let annualized = ((1.0 + roi).powf(12.0 / months) - 1.0) * 100.0;
            outcome = outcome.with_metric("annualized_roi_pct", annualized);
        }
        Ok(outcome)
    }
}

/// Registers the ROI calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(RoiCalculator))
}
