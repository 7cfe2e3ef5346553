//! Break-even point calculator.
//!
//! Units and revenue at which contribution margin covers fixed costs.

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

struct BreakEvenInputs {
    fixed_costs: f64,
    price_per_unit: f64,
    variable_cost_per_unit: f64,
}

impl BreakEvenInputs {
    fn parse(inputs: &CalculatorInputs) -> Result<Self, CalcError> {
        let fixed_costs = inputs.get_f64("fixed_costs")?;
        let price_per_unit = inputs.get_f64("price_per_unit")?;
        let variable_cost_per_unit = inputs.get_f64("variable_cost_per_unit")?;
        if fixed_costs < 0.0 {
            return Err(CalcError::invalid("fixed_costs must not be negative"));
        }
        if price_per_unit <= 0.0 {
            return Err(CalcError::invalid("price_per_unit must be positive"));
        }
        if variable_cost_per_unit < 0.0 {
            return Err(CalcError::invalid("variable_cost_per_unit must not be negative"));
        }
        if variable_cost_per_unit >= price_per_unit {
            return Err(CalcError::invalid(
                "price_per_unit must exceed variable_cost_per_unit, otherwise break-even is unreachable",
            ));
        }
        Ok(Self { fixed_costs, price_per_unit, variable_cost_per_unit })
    }
}

#[derive(Debug, Default)]
pub struct BreakEvenCalculator;

impl Calculator for BreakEvenCalculator {
    fn slug(&self) -> &str {
        "break-even"
    }

    fn name(&self) -> &str {
        "Break-Even Analysis"
    }

    fn category(&self) -> Category {
        Category::Business
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let parsed = BreakEvenInputs::parse(inputs)?;

        let contribution_margin = parsed.price_per_unit - parsed.variable_cost_per_unit;
        let break_even_units = (parsed.fixed_costs / contribution_margin).ceil();
        let break_even_revenue = break_even_units * parsed.price_per_unit;
        let margin_ratio = contribution_margin / parsed.price_per_unit;

        let analysis = if margin_ratio < 0.2 {
            Analysis::new(
                RiskLevel::High,
                "Contribution margin is thin; small cost increases push break-even sharply higher.",
            )
        } else if margin_ratio < 0.4 {
            Analysis::new(
                RiskLevel::Medium,
                "Margins leave moderate headroom. Watch variable costs closely.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Healthy contribution margin; break-even is resilient.")
        };

        Ok(Outcome::single("break_even_units", break_even_units, analysis)
            .with_metric("break_even_revenue", break_even_revenue)
            .with_metric("contribution_margin", contribution_margin))
    }
}

/// Registers the break-even calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(BreakEvenCalculator))
}
