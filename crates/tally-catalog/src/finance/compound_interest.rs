//! Compound interest / future value calculator.

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

struct CompoundInputs {
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    compounds_per_year: f64,
}

impl CompoundInputs {
    fn parse(inputs: &CalculatorInputs) -> Result<Self, CalcError> {
        let principal = inputs.get_f64("principal")?;
        let annual_rate_pct = inputs.get_f64("annual_rate_pct")?;
        let years = inputs.get_f64("years")?;
        let compounds_per_year = inputs.get_f64_opt("compounds_per_year")?.unwrap_or(12.0);
        if principal < 0.0 {
            return Err(CalcError::invalid("principal must not be negative"));
        }
        if annual_rate_pct < 0.0 {
            return Err(CalcError::invalid("annual_rate_pct must not be negative"));
        }
        if years <= 0.0 {
            return Err(CalcError::invalid("years must be positive"));
        }
        if compounds_per_year < 1.0 {
            return Err(CalcError::invalid("compounds_per_year must be at least 1"));
        }
        Ok(Self { principal, annual_rate_pct, years, compounds_per_year })
    }
}

#[derive(Debug, Default)]
pub struct CompoundInterestCalculator;

impl Calculator for CompoundInterestCalculator {
    fn slug(&self) -> &str {
        "compound-interest"
    }

    fn name(&self) -> &str {
        "Compound Interest Calculator"
    }

    fn category(&self) -> Category {
        Category::Finance
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let parsed = CompoundInputs::parse(inputs)?;

        let rate = parsed.annual_rate_pct / 100.0;
        let future_value = parsed.principal
            * (1.0 + rate / parsed.compounds_per_year)
                .powf(parsed.compounds_per_year * parsed.years);
        let interest_earned = future_value - parsed.principal;

        let analysis = if parsed.annual_rate_pct > 12.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Projections above 12% per year rarely hold over long horizons; treat as optimistic.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Projection uses a conservative, sustainable rate.")
        };

        Ok(Outcome::single("future_value", future_value, analysis)
            .with_metric("interest_earned", interest_earned))
    }
}

/// Registers the compound interest calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(CompoundInterestCalculator))
}
