//! Algorithm registry for building typed parameters from flat records
//!
//! This module provides a registry that:
//! - Maps an [`AlgorithmId`] to the definition that constructs its parameters
//! - Builds and populates a typed parameter object from a [`FlannParameters`]
//! - Lets callers add or replace algorithms without touching core code
//!
//! # Lifecycle
//!
//! An explicit [`ParamsRegistry`] value is plain owned data. The process-wide
//! instance behind [`global_registry`] is filled with the built-in algorithms
//! on first access and guarded by a read/write lock; lookups take the read
//! side, late registrations must take the write side.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::IndexParams;
use crate::error::{ParamsError, ParamsResult};
use crate::record::FlannParameters;
use crate::types::AlgorithmId;

/// Trait for algorithm modules to implement
///
/// Each algorithm provides a static definition that the registry uses for
/// lookup and instantiation.
pub trait AlgorithmDefinition: Send + Sync {
    /// Tag this definition answers to. `create_params()` must produce
    /// parameters reporting the same tag.
    fn id(&self) -> AlgorithmId;

    /// Human-readable name (e.g., "KD-Tree")
    fn name(&self) -> &'static str;

    /// One-line summary for listings
    fn description(&self) -> &'static str {
        ""
    }

    /// Create parameters holding this algorithm's defaults
    fn create_params(&self) -> Box<dyn IndexParams>;
}

/// Registry mapping algorithm tags to their definitions
pub struct ParamsRegistry {
    definitions: HashMap<AlgorithmId, Arc<dyn AlgorithmDefinition>>,
}

impl ParamsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in algorithm
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        initialize_registry(&mut registry);
        registry
    }

    /// Register an algorithm definition
    ///
    /// A later registration for the same tag replaces the earlier one; the
    /// replaced definition is returned.
    pub fn register(
        &mut self,
        definition: Arc<dyn AlgorithmDefinition>,
    ) -> Option<Arc<dyn AlgorithmDefinition>> {
        let id = definition.id();
        let previous = self.definitions.insert(id, definition);

        if previous.is_some() {
            debug!(algorithm = %id, "replaced algorithm definition");
        } else {
            debug!(algorithm = %id, "registered algorithm definition");
        }

        previous
    }

    /// Get a definition by tag
    #[must_use]
    pub fn get(&self, id: AlgorithmId) -> Option<&dyn AlgorithmDefinition> {
        self.definitions.get(&id).map(|def| def.as_ref())
    }

    #[must_use]
    pub fn is_registered(&self, id: AlgorithmId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Iterate over definitions in ascending tag order
    pub fn iter(&self) -> impl Iterator<Item = &dyn AlgorithmDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().map(|def| def.as_ref()).collect();
        definitions.sort_by_key(|def| def.id());
        definitions.into_iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Create default parameters for an algorithm
    ///
    /// Fails if the tag is not registered, or if its definition produces
    /// parameters for a different algorithm.
    pub fn create_params(&self, id: AlgorithmId) -> ParamsResult<Box<dyn IndexParams>> {
        let definition = self
            .get(id)
            .ok_or(ParamsError::UnknownAlgorithm { id })?;

        let params = definition.create_params();
        let found = params.index_type();
        if found != id {
            return Err(ParamsError::DefinitionMismatch {
                expected: id,
                found,
            });
        }

        Ok(params)
    }

    /// Build typed parameters from a flat record
    ///
    /// Picks the definition named by `record.algorithm`, then imports the
    /// fields that algorithm owns.
    pub fn create_from_parameters(
        &self,
        record: &FlannParameters,
    ) -> ParamsResult<Box<dyn IndexParams>> {
        let mut params = self.create_params(record.algorithm)?;
        params.from_parameters(record);
        Ok(params)
    }
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global registry instance
///
/// Built with every built-in algorithm on first access.
static REGISTRY: LazyLock<RwLock<ParamsRegistry>> =
    LazyLock::new(|| RwLock::new(ParamsRegistry::with_defaults()));

/// Register every built-in algorithm
fn initialize_registry(registry: &mut ParamsRegistry) {
    super::linear::register(registry);
    super::kdtree::register(registry);
    super::kmeans::register(registry);
    super::composite::register(registry);
    super::saved::register(registry);
    super::autotuned::register(registry);
}

/// Get the process-wide registry
pub fn global_registry() -> &'static RwLock<ParamsRegistry> {
    &REGISTRY
}

/// Build typed parameters from a flat record using the global registry
pub fn create_from_parameters(record: &FlannParameters) -> ParamsResult<Box<dyn IndexParams>> {
    global_registry().read().create_from_parameters(record)
}
