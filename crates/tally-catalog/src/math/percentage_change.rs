//! Percentage change between two values.

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

#[derive(Debug, Default)]
pub struct PercentageChangeCalculator;

impl Calculator for PercentageChangeCalculator {
    fn slug(&self) -> &str {
        "percentage-change"
    }

    fn name(&self) -> &str {
        "Percentage Change"
    }

    fn category(&self) -> Category {
        Category::Math
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let original = inputs.get_f64("original_value")?;
        let new_value = inputs.get_f64("new_value")?;
        if original == 0.0 {
            return Err(CalcError::invalid(
                "original_value must be non-zero; relative change is undefined from zero",
            ));
        }

        let change = new_value - original;
        let change_pct = change / original.abs() * 100.0;

        let analysis = if change_pct.abs() > 50.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Change exceeds 50%; double-check the inputs are on the same basis.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Change is within an ordinary range.")
        };

        Ok(Outcome::single("change_pct", change_pct, analysis).with_metric("change", change))
    }
}

/// Registers the percentage change calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(PercentageChangeCalculator))
}
