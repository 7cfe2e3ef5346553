#![deny(warnings)]
//! The built-in calculator catalog for the Tally registry.
//!
//! One module per domain category, mirroring how the catalog is browsed.
//! Each calculator module exposes a `register` function that constructs
//! the calculator and hands it to the registry under its explicit slug;
//! [`register_all`] is the bootstrap driver that invokes every one of
//! them exactly once.

pub mod business;
pub mod construction;
pub mod finance;
pub mod health;
pub mod legal;
pub mod math;

use tally_registry::{Registry, RegistryError};
use tracing::{info, warn};

/// Every registration function in the catalog. New calculators are added
/// here and nowhere else.
const REGISTRATIONS: &[fn(&mut Registry) -> Result<(), RegistryError>] = &[
    business::break_even::register,
    business::roi::register,
    business::tco::register,
    construction::concrete_slab::register,
    finance::compound_interest::register,
    finance::loan_payment::register,
    finance::rate_lock::register,
    health::bmi::register,
    health::bmr_tdee::register,
    legal::personal_injury::register,
    math::percentage_change::register,
];

/// Registers every catalog calculator with `registry` and returns how many
/// registrations succeeded.
///
/// Failed registrations (duplicates from an accidental double-bootstrap, a
/// sealed registry) are logged and skipped rather than aborting the
/// traversal, so one bad entry never costs the rest of the catalog.
pub fn register_all(registry: &mut Registry) -> usize {
    let mut registered = 0;
    for register in REGISTRATIONS {
        match register(registry) {
            Ok(()) => registered += 1,
            Err(err) => warn!(error = %err, "catalog registration skipped"),
        }
    }
    info!(registered, total = registry.len(), "catalog bootstrap complete");
    registered
}
