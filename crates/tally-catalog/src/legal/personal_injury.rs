//! Personal injury settlement estimator.
//!
//! Special damages times a pain-and-suffering multiplier, plus lost wages.
//! The multiplier conventionally runs from 1.5 (minor injury) to 5
//! (severe, lasting injury); values outside that band are rejected.

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

#[derive(Debug, Default)]
pub struct PersonalInjuryCalculator;

impl Calculator for PersonalInjuryCalculator {
    fn slug(&self) -> &str {
        "personal-injury"
    }

    fn name(&self) -> &str {
        "Personal Injury Settlement"
    }

    fn category(&self) -> Category {
        Category::Legal
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let medical_expenses = inputs.get_f64("medical_expenses")?;
        let lost_wages = inputs.get_f64("lost_wages")?;
        let multiplier = inputs.get_f64("multiplier")?;

        if medical_expenses < 0.0 {
            return Err(CalcError::invalid("medical_expenses must not be negative"));
        }
        if lost_wages < 0.0 {
            return Err(CalcError::invalid("lost_wages must not be negative"));
        }
        if !(1.5..=5.0).contains(&multiplier) {
            return Err(CalcError::invalid("multiplier must be between 1.5 and 5.0"));
        }

        let pain_and_suffering = medical_expenses * multiplier;
        let estimated_settlement = pain_and_suffering + lost_wages;

        let analysis = if multiplier >= 4.0 {
            Analysis::new(
                RiskLevel::High,
                "High-multiplier claims face close scrutiny; thorough documentation is essential.",
            )
        } else if multiplier >= 2.5 {
            Analysis::new(
                RiskLevel::Medium,
                "A moderate multiplier needs medical records supporting ongoing impact.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Estimate is within typical ranges for minor injuries.")
        };

        Ok(Outcome::single("estimated_settlement", estimated_settlement, analysis)
            .with_metric("pain_and_suffering", pain_and_suffering))
    }
}

/// Registers the personal injury settlement calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(PersonalInjuryCalculator))
}
