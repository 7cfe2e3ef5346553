//! Structured error types for registration and dispatch.
//!
//! All registry-level failures are reported as values so that bootstrap can
//! keep traversing the catalog even when individual registrations are
//! malformed. Nothing in this crate panics on caller input.

use thiserror::Error;

/// Errors raised while populating the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A calculator with this slug is already registered. The first
    /// registration is kept.
    #[error("calculator '{slug}' is already registered; first registration wins")]
    Duplicate {
        /// The conflicting slug.
        slug: String,
    },

    /// The registry has been sealed; the bootstrap phase is over.
    #[error("registry is sealed; cannot register calculator '{slug}'")]
    Sealed {
        /// The slug whose registration was refused.
        slug: String,
    },

    /// The slug does not meet the naming rules.
    #[error("invalid slug '{slug}': {reason}")]
    InvalidSlug {
        /// The offending slug.
        slug: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Errors raised by an individual calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required input field was absent.
    #[error("required input '{name}' was not found")]
    MissingInput {
        /// Name of the missing field.
        name: String,
    },

    /// An input field was present but carried the wrong type.
    #[error("input '{name}' has type {actual}, expected {expected}")]
    InvalidType {
        /// Name of the offending field.
        name: String,
        /// Type the calculator required.
        expected: &'static str,
        /// Type that was actually supplied.
        actual: &'static str,
    },

    /// Inputs were well-typed but semantically unusable
    /// (zero denominator, negative quantity, unparseable date, ...).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable description of the problem.
        message: String,
    },
}

impl CalcError {
    /// Shorthand for an [`CalcError::InvalidInput`] with a formatted message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }
}

/// Errors raised when dispatching a calculation through the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No calculator is registered under the requested slug.
    #[error("no calculator registered under '{slug}'")]
    NotFound {
        /// The slug that was looked up.
        slug: String,
    },

    /// The calculator was found but the calculation itself failed.
    #[error(transparent)]
    Calc(#[from] CalcError),
}
