//! Composite (k-d forest plus k-means tree) parameters

use std::any::Any;
use std::ffi::{c_float, c_int};
use std::sync::Arc;

use super::{
    AlgorithmDefinition, IndexParams, KDTreeIndexParams, KMeansIndexParams, ParamValue,
    ParamsRegistry,
};
use crate::record::FlannParameters;
use crate::types::{AlgorithmId, CentersInit};

/// Parameters for an index that builds both a k-d forest and a k-means tree
/// and merges their candidates at search time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeIndexParams {
    pub trees: c_int,
    pub branching: c_int,
    pub iterations: c_int,
    pub centers_init: CentersInit,
    pub cb_index: c_float,
}

impl Default for CompositeIndexParams {
    fn default() -> Self {
        Self::from_parts(KDTreeIndexParams::default(), KMeansIndexParams::default())
    }
}

impl CompositeIndexParams {
    pub fn from_parts(kdtree: KDTreeIndexParams, kmeans: KMeansIndexParams) -> Self {
        Self {
            trees: kdtree.trees,
            branching: kmeans.branching,
            iterations: kmeans.iterations,
            centers_init: kmeans.centers_init,
            cb_index: kmeans.cb_index,
        }
    }

    /// Parameters for the k-d forest half.
    pub fn kdtree(&self) -> KDTreeIndexParams {
        KDTreeIndexParams::new(self.trees)
    }

    /// Parameters for the k-means tree half.
    pub fn kmeans(&self) -> KMeansIndexParams {
        KMeansIndexParams {
            branching: self.branching,
            iterations: self.iterations,
            centers_init: self.centers_init,
            cb_index: self.cb_index,
        }
    }
}

impl IndexParams for CompositeIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::COMPOSITE
    }

    fn from_parameters(&mut self, params: &FlannParameters) {
        self.trees = params.trees;
        self.branching = params.branching;
        self.iterations = params.iterations;
        self.centers_init = params.centers_init;
        self.cb_index = params.cb_index;
    }

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = self.index_type();
        params.trees = self.trees;
        params.branching = self.branching;
        params.iterations = self.iterations;
        params.centers_init = self.centers_init;
        params.cb_index = self.cb_index;
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("trees", self.trees.into()),
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

/// Composite index definition
pub struct CompositeDefinition;

impl AlgorithmDefinition for CompositeDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::COMPOSITE
    }

    fn name(&self) -> &'static str {
        "Composite"
    }

    fn description(&self) -> &'static str {
        "Randomized k-d trees and a k-means tree searched together"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(CompositeIndexParams::default())
    }
}

/// Register the composite index with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(CompositeDefinition));
}
