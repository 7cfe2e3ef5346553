//! Construction & industrial calculators.

pub mod concrete_slab;
