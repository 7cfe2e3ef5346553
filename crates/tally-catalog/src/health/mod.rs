//! Health & fitness calculators.

pub mod bmi;
pub mod bmr_tdee;
