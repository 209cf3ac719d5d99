//! Autotuning parameters

use std::any::Any;
use std::ffi::c_float;
use std::sync::Arc;

use super::{AlgorithmDefinition, IndexParams, ParamValue, ParamsRegistry};
use crate::record::FlannParameters;
use crate::types::AlgorithmId;

/// Goals for the autotuner, which searches over algorithms and their knobs.
///
/// The cost it minimizes is roughly
/// `search_time + build_weight * build_time + memory_weight * memory`,
/// subject to reaching `target_precision`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutotunedIndexParams {
    /// Fraction of true nearest neighbours a search should return.
    pub target_precision: c_float,
    pub build_weight: c_float,
    pub memory_weight: c_float,
    /// Share of the dataset sampled while tuning.
    pub sample_fraction: c_float,
}

impl Default for AutotunedIndexParams {
    fn default() -> Self {
        Self {
            target_precision: 0.9,
            build_weight: 0.01,
            memory_weight: 0.0,
            sample_fraction: 0.1,
        }
    }
}

impl IndexParams for AutotunedIndexParams {
    fn index_type(&self) -> AlgorithmId {
        AlgorithmId::AUTOTUNED
    }

    fn from_parameters(&mut self, params: &FlannParameters) {
        self.target_precision = params.target_precision;
        self.build_weight = params.build_weight;
        self.memory_weight = params.memory_weight;
        self.sample_fraction = params.sample_fraction;
    }

    fn to_parameters(&self, params: &mut FlannParameters) {
        params.algorithm = self.index_type();
        params.target_precision = self.target_precision;
        params.build_weight = self.build_weight;
        params.memory_weight = self.memory_weight;
        params.sample_fraction = self.sample_fraction;
    }

    fn describe(&self) -> Vec<(&'static str, ParamValue)> {
        vec![
            ("target_precision", self.target_precision.into()),
            ("build_weight", self.build_weight.into()),
            ("memory_weight", self.memory_weight.into()),
            ("sample_fraction", self.sample_fraction.into()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn IndexParams> {
        Box::new(*self)
    }
}

/// Autotuned index definition
pub struct AutotunedDefinition;

impl AlgorithmDefinition for AutotunedDefinition {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::AUTOTUNED
    }

    fn name(&self) -> &'static str {
        "Autotuned"
    }

    fn description(&self) -> &'static str {
        "Pick the algorithm and knobs that reach a target precision cheapest"
    }

    fn create_params(&self) -> Box<dyn IndexParams> {
        Box::new(AutotunedIndexParams::default())
    }
}

/// Register the autotuner with the registry
pub(crate) fn register(registry: &mut ParamsRegistry) {
    registry.register(Arc::new(AutotunedDefinition));
}
