//! Legal & insurance calculators.

pub mod personal_injury;
