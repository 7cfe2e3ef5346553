//! Business & operations calculators.

pub mod break_even;
pub mod roi;
pub mod tco;
