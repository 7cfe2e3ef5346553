//! Tally Types
//!
//! This crate defines the value model shared by the Tally calculator
//! ecosystem (`tally-registry` and `tally-catalog`). It provides the
//! dynamic [`CalcValue`] used at the type-erased dispatch boundary and the
//! qualitative [`Analysis`] record every calculator attaches to its result.

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

mod analysis;
mod value;

pub use analysis::{Analysis, RiskLevel};
pub use value::{CalcValue, UnsupportedNumber};
