//! Body-mass index calculator with WHO classification.

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

#[derive(Debug, Default)]
pub struct BmiCalculator;

impl Calculator for BmiCalculator {
    fn slug(&self) -> &str {
        "bmi"
    }

    fn name(&self) -> &str {
        "BMI Calculator"
    }

    fn category(&self) -> Category {
        Category::Health
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let weight_kg = inputs.get_f64("weight_kg")?;
        let height_cm = inputs.get_f64("height_cm")?;
        if weight_kg <= 0.0 {
            return Err(CalcError::invalid("weight_kg must be positive"));
        }
        if height_cm <= 0.0 {
            return Err(CalcError::invalid("height_cm must be positive"));
        }

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);

        let analysis = if bmi < 18.5 {
            Analysis::new(
                RiskLevel::Medium,
                "Below the healthy range (underweight). A nutrition review is advisable.",
            )
        } else if bmi < 25.0 {
            Analysis::new(RiskLevel::Low, "Within the healthy range.")
        } else if bmi < 30.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Above the healthy range (overweight). Gradual lifestyle changes are effective here.",
            )
        } else {
            Analysis::new(
                RiskLevel::High,
                "In the obese range. Discuss a plan with a healthcare provider.",
            )
        };

        Ok(Outcome::single("bmi", bmi, analysis))
    }
}

/// Registers the BMI calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(BmiCalculator))
}
