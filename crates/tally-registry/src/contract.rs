//! The uniform contract every calculator satisfies.
//!
//! A generic caller resolves a calculator by slug and invokes it through
//! this trait without any compile-time knowledge of the concrete type.
//! Concrete calculators keep their own typed input structs; parsing from
//! [`CalculatorInputs`] into that struct happens at the top of
//! `calculate`, so static type safety is preserved per-calculator while
//! the registry stays uniform.

use crate::error::CalcError;
use crate::inputs::CalculatorInputs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tally_types::Analysis;

/// Grouping label used for enumeration and browsing, never for dispatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Business & operations
    Business,
    /// Finance & investment
    Finance,
    /// Health & fitness
    Health,
    /// Legal & insurance
    Legal,
    /// Construction & industrial
    Construction,
    /// Lifestyle & automotive
    Lifestyle,
    /// Math & science
    Math,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Business => "business",
            Self::Finance => "finance",
            Self::Health => "health",
            Self::Legal => "legal",
            Self::Construction => "construction",
            Self::Lifestyle => "lifestyle",
            Self::Math => "math",
        };
        write!(f, "{label}")
    }
}

/// Identity and metadata for one registered calculator, returned by
/// enumeration. Distinct from the calculator instance itself.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Descriptor {
    /// Unique, stable slug the calculator is registered under.
    pub slug: String,
    /// Human-readable label for browsing.
    pub name: String,
    /// Grouping label.
    pub category: Category,
}

/// The numeric half of a calculation result: one or more named metrics
/// plus the qualitative [`Analysis`].
///
/// Metrics live in a `BTreeMap` so serialized output and iteration order
/// are deterministic.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Outcome {
    /// Named numeric results. Always contains at least one entry.
    pub metrics: BTreeMap<String, f64>,
    /// Recommendation and risk classification.
    pub analysis: Analysis,
}

impl Outcome {
    /// Creates an outcome with a single named metric.
    pub fn single(metric: impl Into<String>, value: f64, analysis: Analysis) -> Self {
        let mut metrics = BTreeMap::new();
        metrics.insert(metric.into(), value);
        Self { metrics, analysis }
    }

    /// Adds a further named metric, builder style.
    #[must_use]
    pub fn with_metric(mut self, metric: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(metric.into(), value);
        self
    }

    /// Looks up a metric by name.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// A trait for all calculators.
///
/// Calculators are stateless and thread-safe; `calculate` is pure and
/// deterministic for a given set of inputs.
pub trait Calculator: Send + Sync {
    /// The unique slug this calculator registers under. Passed explicitly
    /// by the implementation; the registry never infers identity from type
    /// or module names.
    fn slug(&self) -> &str;

    /// Human-readable name for browsing.
    fn name(&self) -> &str;

    /// Grouping label for enumeration.
    fn category(&self) -> Category;

    /// Performs the calculation. Missing or mistyped required fields fail
    /// with a structured [`CalcError`] rather than propagating NaN.
    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError>;

    /// The descriptor advertised through enumeration.
    fn descriptor(&self) -> Descriptor {
        Descriptor {
            slug: self.slug().to_string(),
            name: self.name().to_string(),
            category: self.category(),
        }
    }
}
