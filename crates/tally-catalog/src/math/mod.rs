//! Math & science calculators.

pub mod percentage_change;
