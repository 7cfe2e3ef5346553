//! Total cost of ownership calculator.
//!
//! # Inputs
//! * `purchase_price`
//! * `annual_operating_cost`
//! * `annual_maintenance_cost`
//! * `holding_period_years` - must be positive
//! * `resale_value` - optional, defaults to 0

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

struct TcoInputs {
    purchase_price: f64,
    annual_operating_cost: f64,
    annual_maintenance_cost: f64,
    holding_period_years: f64,
    resale_value: f64,
}

impl TcoInputs {
    fn parse(inputs: &CalculatorInputs) -> Result<Self, CalcError> {
        let purchase_price = inputs.get_f64("purchase_price")?;
        let annual_operating_cost = inputs.get_f64("annual_operating_cost")?;
        let annual_maintenance_cost = inputs.get_f64("annual_maintenance_cost")?;
        let holding_period_years = inputs.get_f64("holding_period_years")?;
        let resale_value = inputs.get_f64_opt("resale_value")?.unwrap_or(0.0);

        for (name, value) in [
            ("purchase_price", purchase_price),
            ("annual_operating_cost", annual_operating_cost),
            ("annual_maintenance_cost", annual_maintenance_cost),
            ("resale_value", resale_value),
        ] {
            if value < 0.0 {
                return Err(CalcError::invalid(format!("{name} must not be negative")));
            }
        }
        if holding_period_years <= 0.0 {
            return Err(CalcError::invalid("holding_period_years must be positive"));
        }
        Ok(Self {
            purchase_price,
            annual_operating_cost,
            annual_maintenance_cost,
            holding_period_years,
            resale_value,
        })
    }
}

#[derive(Debug, Default)]
pub struct TcoCalculator;

impl Calculator for TcoCalculator {
    fn slug(&self) -> &str {
        "tco-calculator"
    }

    fn name(&self) -> &str {
        "Total Cost of Ownership"
    }

    fn category(&self) -> Category {
        Category::Business
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let parsed = TcoInputs::parse(inputs)?;

        let running_costs = (parsed.annual_operating_cost + parsed.annual_maintenance_cost)
            * parsed.holding_period_years;
        let total_cost = parsed.purchase_price + running_costs - parsed.resale_value;
        let annual_cost = total_cost / parsed.holding_period_years;

        let analysis = if running_costs > 2.0 * parsed.purchase_price {
            Analysis::new(
                RiskLevel::High,
                "Running costs dwarf the purchase price; the sticker price is misleading here.",
            )
        } else if running_costs > parsed.purchase_price {
            Analysis::new(
                RiskLevel::Medium,
                "Running costs exceed the purchase price over the holding period.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Ownership cost is dominated by the purchase itself.")
        };

        Ok(Outcome::single("total_cost", total_cost, analysis)
            .with_metric("annual_cost", annual_cost)
            .with_metric("running_costs", running_costs))
    }
}

/// Registers the TCO calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(TcoCalculator))
}
