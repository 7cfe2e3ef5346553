#![deny(warnings)]
//! The registration and dispatch core for the Tally calculator catalog.
//!
//! This crate provides the [`Calculator`] trait every computation unit
//! satisfies, the [`CalculatorInputs`] accessor for its open input record,
//! and the [`Registry`] that maps unique slugs to type-erased instances.
//! A UI or API layer resolves calculators by slug and invokes them
//! generically; no caller ever branches on a concrete calculator type.

pub mod contract;
pub mod error;
pub mod inputs;
pub mod registry;
pub mod slug;

pub use contract::{Calculator, Category, Descriptor, Outcome};
pub use error::{CalcError, DispatchError, RegistryError};
pub use inputs::CalculatorInputs;
pub use registry::Registry;
