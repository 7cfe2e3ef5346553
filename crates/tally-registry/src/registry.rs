//! The keyed store of calculator instances.

use crate::contract::{Calculator, Descriptor, Outcome};
use crate::error::{DispatchError, RegistryError};
use crate::inputs::CalculatorInputs;
use crate::slug;
use std::collections::HashMap;
use tally_types::CalcValue;
use tracing::{debug, warn};

/// Keyed collection mapping a unique slug to one calculator instance.
///
/// The registry is an explicit, constructible object with the lifecycle
/// `new -> populate -> seal`: it is created empty, populated once by a
/// bootstrap driver calling [`register`](Self::register) per calculator,
/// then sealed and treated as immutable while lookups are served. The
/// registry owns every instance registered with it.
///
/// Duplicate policy: FIRST-WINS. A second registration under an existing
/// slug is rejected with [`RegistryError::Duplicate`] and logged, so a
/// calculator is never silently lost to a later collision.
pub struct Registry {
    entries: HashMap<String, Box<dyn Calculator>>,
    sealed: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty, unsealed registry.
    pub fn new() -> Self {
        Self { entries: HashMap::new(), sealed: false }
    }

    /// Registers a calculator under its own slug.
    ///
    /// Fails without mutating state when the slug is malformed, already
    /// taken, or the registry has been sealed.
    pub fn register(&mut self, calculator: Box<dyn Calculator>) -> Result<(), RegistryError> {
        let slug = calculator.slug().to_string();
        if self.sealed {
            return Err(RegistryError::Sealed { slug });
        }
        slug::validate(&slug)?;
        if self.entries.contains_key(&slug) {
            warn!(slug = %slug, "duplicate registration rejected; keeping first instance");
            return Err(RegistryError::Duplicate { slug });
        }
        debug!(slug = %slug, category = %calculator.category(), "calculator registered");
        self.entries.insert(slug, calculator);
        Ok(())
    }

    /// Returns the calculator registered under `slug`, if any.
    pub fn get(&self, slug: &str) -> Option<&dyn Calculator> {
        self.entries.get(slug).map(|c| c.as_ref())
    }

    /// Existence check without retrieving the instance.
    pub fn has(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Number of registered calculators.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no calculator has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enumerates descriptors for every registered calculator, ordered by
    /// slug. The iterator is finite and restartable; two consecutive calls
    /// with no intervening registration yield identical sequences.
    pub fn list(&self) -> impl Iterator<Item = Descriptor> + '_ {
        let mut slugs: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        slugs.sort_unstable();
        slugs.into_iter().map(|slug| self.entries[slug].descriptor())
    }

    /// Resolves `slug` and invokes the calculator on `variables`.
    ///
    /// The uniform dispatch surface for callers with no compile-time
    /// knowledge of any concrete calculator. An unknown slug is reported as
    /// [`DispatchError::NotFound`], never a panic.
    pub fn execute(
        &self,
        slug: &str,
        variables: &HashMap<String, CalcValue>,
    ) -> Result<Outcome, DispatchError> {
        let calculator = self
            .get(slug)
            .ok_or_else(|| DispatchError::NotFound { slug: slug.to_string() })?;
        let outcome = calculator.calculate(&CalculatorInputs::new(variables))?;
        Ok(outcome)
    }

    /// Ends the bootstrap phase. Subsequent `register` calls fail with
    /// [`RegistryError::Sealed`]; lookups are unaffected. Sealing twice is
    /// a no-op.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the bootstrap phase has ended.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Groups of registered slugs that collide after punctuation/case
    /// folding, flagged for manual review rather than merged.
    pub fn near_duplicate_slugs(&self) -> Vec<Vec<String>> {
        slug::near_duplicates(self.entries.keys().map(String::as_str))
    }
}
