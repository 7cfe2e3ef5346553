//! Mortgage rate lock calculator.
//!
//! Compares the lock window against the expected closing timeline.
//!
//! # Inputs
//! * `lock_date` - RFC-3339 datetime the rate was locked
//! * `closing_date` - RFC-3339 datetime of the scheduled closing
//! * `lock_period_days` - length of the lock, must be positive

use chrono::{DateTime, Utc};
use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

fn parse_datetime(name: &str, value: &str) -> Result<DateTime<Utc>, CalcError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CalcError::invalid(format!("{name} '{value}' is not a valid datetime: {e}")))
}

#[derive(Debug, Default)]
pub struct RateLockCalculator;

impl Calculator for RateLockCalculator {
    fn slug(&self) -> &str {
        "mortgage-rate-lock"
    }

    fn name(&self) -> &str {
        "Mortgage Rate Lock"
    }

    fn category(&self) -> Category {
        Category::Finance
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let lock_raw = inputs.get_string("lock_date")?;
        let closing_raw = inputs.get_string("closing_date")?;
        let lock_period_days = inputs.get_f64("lock_period_days")?;
        if lock_period_days <= 0.0 {
            return Err(CalcError::invalid("lock_period_days must be positive"));
        }

        let lock_date = parse_datetime("lock_date", &lock_raw)?;
        let closing_date = parse_datetime("closing_date", &closing_raw)?;
        if closing_date < lock_date {
            return Err(CalcError::invalid("closing_date must not precede lock_date"));
        }

        let days_to_closing = (closing_date - lock_date).num_seconds() as f64 / 86_400.0;
        let days_remaining = lock_period_days - days_to_closing;

        let analysis = if days_remaining < 0.0 {
            Analysis::new(
                RiskLevel::High,
                "The lock expires before closing. Negotiate an extension now or budget for a re-lock fee.",
            )
        } else if days_remaining < 7.0 {
            Analysis::new(
                RiskLevel::Medium,
                "Less than a week of cushion. A closing delay would void the lock.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "The lock comfortably covers the closing timeline.")
        };

        Ok(Outcome::single("days_to_closing", days_to_closing, analysis)
            .with_metric("days_remaining", days_remaining))
    }
}

/// Registers the mortgage rate lock calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(RateLockCalculator))
}
