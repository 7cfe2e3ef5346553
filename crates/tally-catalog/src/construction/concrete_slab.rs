//! Concrete slab volume calculator.
//!
//! # Inputs
//! * `length_ft`, `width_ft` - slab footprint in feet
//! * `thickness_in` - slab thickness in inches
//! * `waste_pct` - optional over-order allowance, defaults to 10
//!
//! # Metrics
//! * `volume_cubic_yards` - including waste allowance
//! * `bags_80lb` - equivalent count of 80 lb premix bags

use tally_registry::{
    CalcError, Calculator, CalculatorInputs, Category, Outcome, Registry, RegistryError,
};
use tally_types::{Analysis, RiskLevel};

// An 80 lb bag yields roughly 0.60 cubic feet of mixed concrete.
const CUBIC_FEET_PER_80LB_BAG: f64 = 0.60;

#[derive(Debug, Default)]
pub struct ConcreteSlabCalculator;

impl Calculator for ConcreteSlabCalculator {
    fn slug(&self) -> &str {
        "concrete-slab"
    }

    fn name(&self) -> &str {
        "Concrete Slab Calculator"
    }

    fn category(&self) -> Category {
        Category::Construction
    }

    fn calculate(&self, inputs: &CalculatorInputs) -> Result<Outcome, CalcError> {
        let length_ft = inputs.get_f64("length_ft")?;
        let width_ft = inputs.get_f64("width_ft")?;
        let thickness_in = inputs.get_f64("thickness_in")?;
        let waste_pct = inputs.get_f64_opt("waste_pct")?.unwrap_or(10.0);

        for (name, value) in
            [("length_ft", length_ft), ("width_ft", width_ft), ("thickness_in", thickness_in)]
        {
            if value <= 0.0 {
                return Err(CalcError::invalid(format!("{name} must be positive")));
            }
        }
        if !(0.0..=50.0).contains(&waste_pct) {
            return Err(CalcError::invalid("waste_pct must be between 0 and 50"));
        }

        let volume_cubic_feet =
            length_ft * width_ft * (thickness_in / 12.0) * (1.0 + waste_pct / 100.0);
        let volume_cubic_yards = volume_cubic_feet / 27.0;
        let bags_80lb = (volume_cubic_feet / CUBIC_FEET_PER_80LB_BAG).ceil();

        let analysis = if volume_cubic_yards >= 1.0 {
            Analysis::new(
                RiskLevel::Medium,
                "At this volume, ready-mix delivery beats bagged concrete on both cost and cure quality.",
            )
        } else {
            Analysis::new(RiskLevel::Low, "Small pour; bagged premix is practical.")
        };

        Ok(Outcome::single("volume_cubic_yards", volume_cubic_yards, analysis)
            .with_metric("bags_80lb", bags_80lb))
    }
}

/// Registers the concrete slab calculator.
pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register(Box::new(ConcreteSlabCalculator))
}
