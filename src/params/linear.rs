//! Exact linear scan

use std::any::Any;
use std::sync::Arc;

use super::{AlgorithmDefinition, IndexParams, ParamValue, ParamsRegistry};
use crate::record::FlannParameters;
use crate::types::AlgorithmId;

/// Brute-force search over every point. Has no tunables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearIndexParams;

impl IndexParams for LinearIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::LINEAR
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

/// Linear scan definition
pub struct LinearDefinition;

impl AlgorithmDefinition for LinearDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::LINEAR
    }

    fn name(&self) -> &'static str {
        "Linear"
    }

    fn description(&self) -> &'static str {
        "Exact search comparing the query against every point"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(LinearIndexParams)
    }
}

/// Register linear scan with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(LinearDefinition));
}
