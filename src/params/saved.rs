//! Previously persisted index

use std::any::Any;
use std::sync::Arc;

use super::{AlgorithmDefinition, IndexParams, ParamValue, ParamsRegistry};
use crate::record::FlannParameters;
use crate::types::AlgorithmId;

/// Marker parameters for loading a saved index.
///
/// The saved index carries its own build parameters, so nothing is imported
/// from the record. Export only stamps the algorithm tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SavedIndexParams;

impl IndexParams for SavedIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::SAVED
    }

    fn from_parameters(&mut self, _params: &FlannParameters) {}

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = self.index_type();
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn IndexParams> {
        Box::new(*self)
    }
}

/// Saved index definition
pub struct SavedDefinition;

impl AlgorithmDefinition for SavedDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::SAVED
    }

    fn name(&self) -> &'static str {
        "Saved"
    }

    fn description(&self) -> &'static str {
        "Reuse an index persisted by an earlier build"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(SavedIndexParams)
    }
}

/// Register the saved-index pass-through with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(SavedDefinition));
}
