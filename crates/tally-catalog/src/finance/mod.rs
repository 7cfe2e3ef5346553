//! Finance & investment calculators.

pub mod compound_interest;
pub mod loan_payment;
pub mod rate_lock;
