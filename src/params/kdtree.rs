//! Randomized k-d tree forest parameters

use std::any::Any;
use std::ffi::c_int;
use std::sync::Arc;

use super::{AlgorithmDefinition, IndexParams, ParamValue, ParamsRegistry};
use crate::record::FlannParameters;
use crate::types::AlgorithmId;

/// Parameters for a forest of randomized k-d trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KDTreeIndexParams {
    /// Number of parallel trees; more trees raise recall and memory use.
    pub trees: c_int,
}

impl Default for KDTreeIndexParams {
    fn default() -> Self {
        Self { trees: 4 }
    }
}

impl KDTreeIndexParams {
    pub fn new(trees: c_int) -> Self {
        Self { trees }
    }
}

impl IndexParams for KDTreeIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::KDTREE
    }

    fn from_parameters(&mut self, params: &FlannParameters) {
        self.trees = params.trees;
    }

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = self.index_type();
        params.trees = self.trees;
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        vec![("trees", self.trees.into())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn IndexParams> {
        Box::new(*self)
    }
}

/// k-d tree definition
pub struct KDTreeDefinition;

impl AlgorithmDefinition for KDTreeDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::KDTREE
    }

    fn name(&self) -> &'static str {
        "KD-Tree"
    }

    fn description(&self) -> &'static str {
        "Forest of randomized k-d trees searched in parallel"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(KDTreeIndexParams::default())
    }
}

/// Register k-d trees with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(KDTreeDefinition));
}
