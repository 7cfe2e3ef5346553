//! BMR and TDEE calculator.
//!
//! Basal metabolic rate via Mifflin-St Jeor, scaled to total daily energy
//! expenditure by a standard activity multiplier.
//!
//! # Inputs
//! * `weight_kg`, `height_cm`, `age_years` - positive numbers
//! * `sex` - `male` or `female`
//! * `activity_level` - one of `sedentary`, `lightly_active`,
//!   `moderately_active`, `very_active`, `extremely_active`

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

fn activity_multiplier(level: &str) -> Result<f64, CalcError> {
    match level {
        "sedentary" => Ok(1.2),
        "lightly_active" => Ok(1.375),
        "moderately_active" => Ok(1.55),
        "very_active" => Ok(1.725),
        "extremely_active" => Ok(1.9),
        other => Err(CalcError::invalid(format!("unknown activity_level '{other}'"))),
    }
}

#[derive(Debug, Default)]
pub struct BmrTdeeCalculator;

impl Calculator for BmrTdeeCalculator {
    fn slug(&self) -> &str {
        "bmr-tdee"
    }

    fn name(&self) -> &str {
        "BMR & TDEE Calculator"
    }

    fn category(&self) -> Category {
        Category::Health
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let weight_kg = inputs.get_f64("weight_kg")?;
        let height_cm = inputs.get_f64("height_cm")?;
        let age_years = inputs.get_f64("age_years")?;
        let sex = inputs.get_string("sex")?;
        let activity_level = inputs.get_string("activity_level")?;

        for (name, value) in
            [("weight_kg", weight_kg), ("height_cm", height_cm), ("age_years", age_years)]
        {
            if value <= 0.0 {
                return Err(CalcError::invalid(format!("{name} must be positive")));
            }
        }

        // Mifflin-St Jeor
        let sex_offset = match sex.as_str() {
            "male" => 5.0,
            "female" => -161.0,
            other => {
                return Err(CalcError::invalid(format!(
                    "sex must be 'male' or 'female', got '{other}'"
                )));
            }
        };
        let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + sex_offset;
        let tdee = bmr * activity_multiplier(&activity_level)?;

        let analysis = if tdee < 1400.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Estimated daily expenditure is low; aggressive calorie deficits are not advisable.",
            )
        } else {
            Analysis::new(
                RiskLevel::Low,
                "Eat near the TDEE figure to maintain current weight; adjust in small steps toward your goal.",
            )
        };

        Ok(Outcome::single("bmr", bmr, analysis).with_metric("tdee", tdee))
    }
}

/// Registers the BMR/TDEE calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(BmrTdeeCalculator))
}
