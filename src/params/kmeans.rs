//! Hierarchical k-means tree parameters

use std::any::Any;
use std::ffi::{c_float, c_int};
use std::sync::Arc;

use super::{AlgorithmDefinition, IndexParams, ParamValue, ParamsRegistry};
use crate::record::FlannParameters;
use crate::types::{AlgorithmId, CentersInit};

/// Parameters for a hierarchical k-means tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansIndexParams {
    /// Children per node.
    pub branching: c_int,
    /// Iteration cap for each clustering step. Negative runs to convergence.
    pub iterations: c_int,
    pub centers_init: CentersInit,
    /// Cluster boundary index. Biases search toward clusters whose
    /// boundaries lie close to the query.
    pub cb_index: c_float,
}

impl Default for KMeansIndexParams {
    fn default() -> Self {
        Self {
            branching: 32,
            iterations: 11,
            centers_init: CentersInit::RANDOM,
            cb_index: 0.2,
        }
    }
}

impl IndexParams for KMeansIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::KMEANS
    }

    fn from_parameters(&mut self, params: &FlannParameters) {
        self.branching = params.branching;
        self.iterations = params.iterations;
        self.centers_init = params.centers_init;
        self.cb_index = params.cb_index;
    }

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = self.index_type();
        params.branching = self.branching;
        params.iterations = self.iterations;
        params.centers_init = self.centers_init;
        params.cb_index = self.cb_index;
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("branching", self.branching.into()),
            ("iterations", self.iterations.into()),
            ("centers_init", self.centers_init.into()),
            ("cb_index", self.cb_index.into()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn IndexParams> {
        Box::new(*self)
    }
}

/// k-means tree definition
pub struct KMeansDefinition;

impl AlgorithmDefinition for KMeansDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::KMEANS
    }

    fn name(&self) -> &'static str {
        "K-Means"
    }

    fn description(&self) -> &'static str {
        "Hierarchical k-means tree explored best-bin-first"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(KMeansIndexParams::default())
    }
}

/// Register the k-means tree with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(KMeansDefinition));
}
