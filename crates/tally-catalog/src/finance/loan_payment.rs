//! Amortized loan payment calculator.
//!
//! # Inputs
//! * `principal` - loan amount, must be positive
//! * `annual_rate_pct` - nominal annual interest rate in percent
//! * `term_months` - repayment term, must be positive
//!
//! # Metrics
//! * `monthly_payment`
//! * `total_paid`
//! * `total_interest`

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

struct LoanInputs {
    principal: f64,
    annual_rate_pct: f64,
    term_months: f64,
}

impl LoanInputs {
    fn parse(inputs: &CalculatorInputs) -> Result<Self, CalcError> {
        let principal = inputs.get_f64("principal")?;
        let annual_rate_pct = inputs.get_f64("annual_rate_pct")?;
        let term_months = inputs.get_f64("term_months")?;
        if principal <= 0.0 {
            return Err(CalcError::invalid("principal must be positive"));
        }
        if annual_rate_pct < 0.0 {
            return Err(CalcError::invalid("annual_rate_pct must not be negative"));
        }
        if term_months <= 0.0 {
            return Err(CalcError::invalid("term_months must be positive"));
        }
        Ok(Self { principal, annual_rate_pct, term_months })
    }
}

#[derive(Debug, Default)]
pub struct LoanPaymentCalculator;

impl Calculator for LoanPaymentCalculator {
    fn slug(&self) -> &str {
        "loan-payment"
    }

    fn name(&self) -> &str {
        "Loan Payment Calculator"
    }

    fn category(&self) -> Category {
        Category::Finance
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let parsed = LoanInputs::parse(inputs)?;

        let monthly_rate = parsed.annual_rate_pct / 100.0 / 12.0;
        let monthly_payment = if monthly_rate == 0.0 {
            parsed.principal / parsed.term_months
        } else {
            parsed.principal * monthly_rate
                / (1.0 - (1.0 + monthly_rate).powf(-parsed.term_months))
        };
        let total_paid = monthly_payment * parsed.term_months;
        let total_interest = total_paid - parsed.principal;

        let analysis = if parsed.annual_rate_pct >= 15.0 {
            Analysis::new(
                RiskLevel::High,
                "This rate is in high-cost credit territory. Refinancing options deserve a look.",
            )
        } else if parsed.annual_rate_pct >= 8.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Interest forms a substantial share of the total repayment.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Rate is within common secured-lending ranges.")
        };

        Ok(Outcome::single("monthly_payment", monthly_payment, analysis)
            .with_metric("total_paid", total_paid)
            .with_metric("total_interest", total_interest))
    }
}

/// Registers the loan payment calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(LoanPaymentCalculator))
}
