//! Typed index parameters and the registry that builds them.
//!
//! Every algorithm has one parameter type implementing [`IndexParams`]. The
//! [`ParamsRegistry`] maps an [`AlgorithmId`] read from a flat
//! [`FlannParameters`] record to the matching type, then imports the fields
//! that type owns.
//!
//! # Example
//!
//! ```
//! use annparams::params::{KMeansIndexParams, ParamsRegistry};
//! use annparams::{AlgorithmId, FlannParameters};
//!
//! let record = FlannParameters {
//!     algorithm: AlgorithmId::KMEANS,
//!     branching: 16,
//!     ..FlannParameters::default()
//! };
//!
//! let registry = ParamsRegistry::with_defaults();
//! let params = registry.create_from_parameters(&record).unwrap();
//! assert_eq!(params.index_type(), AlgorithmId::KMEANS);
//!
//! let kmeans = params.downcast_ref::<KMeansIndexParams>().unwrap();
//! assert_eq!(kmeans.branching, 16);
//! ```

pub mod autotuned;
pub mod composite;
pub mod kdtree;
pub mod kmeans;
pub mod linear;
pub mod registry;
pub mod saved;
pub mod search;

pub use autotuned::AutotunedIndexParams;
pub use composite::CompositeIndexParams;
pub use kdtree::KDTreeIndexParams;
pub use kmeans::KMeansIndexParams;
pub use linear::LinearIndexParams;
pub use registry::{
    AlgorithmDefinition, ParamsRegistry, create_from_parameters, global_registry,
};
pub use saved::SavedIndexParams;
pub use search::SearchParams;

use serde::Serialize;
use std::any::Any;
use std::ffi::{c_float, c_int};
use std::fmt;

use crate::record::FlannParameters;
use crate::types::{AlgorithmId, CentersInit};

/// Value of one owned parameter, as reported by [`IndexParams::describe`].
///
/// Serializes as a bare JSON number, or as the tag name for centers init.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(c_int),
    Float(c_float),
    Centers(CentersInit),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Centers(value) => write!(f, "{value}"),
        }
    }
}

impl From<c_int> for ParamValue {
    fn from(value: c_int) -> Self {
        Self::Int(value)
    }
}

impl From<c_float> for ParamValue {
    fn from(value: c_float) -> Self {
        Self::Float(value)
    }
}

impl From<CentersInit> for ParamValue {
    fn from(value: CentersInit) -> Self {
        Self::Centers(value)
    }
}

/// Algorithm-specific index parameters.
///
/// Implementations own a subset of the [`FlannParameters`] fields and convert
/// them in both directions. `to_parameters` followed by `from_parameters`
/// must reproduce every owned field exactly.
pub trait IndexParams: fmt::Debug + Send + Sync + Any {
    /// The algorithm these parameters configure. Fixed per type.
    fn index_type(&self) -> AlgorithmId;

    /// Overwrite owned fields from `params`. Fields owned by other
    /// algorithms are ignored. Values are taken as-is, without range checks.
    fn from_parameters(&mut self, params: &FlannParameters);

    /// Write the algorithm tag and owned fields into `params`, leaving every
    /// other field untouched.
    fn to_parameters(&self, params: &mut FlannParameters);

    /// Owned fields as name/value pairs, in declaration order.
    fn describe(&self) -> Vec<(&'static str, ParamValue)>;

    fn as_any(&self) -> &dyn Any;

    fn clone_box(&self) -> Box<dyn IndexParams>;

    /// Emit the parameters as a single INFO event on the diagnostics sink.
    fn print(&self) {
        let fields = self
            .describe()
            .into_iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(
            target: "annparams::params",
            algorithm = %self.index_type(),
            "index parameters: {fields}"
        );
    }
}

impl dyn IndexParams {
    /// Borrow the concrete parameter type, if it is `T`.
    pub fn downcast_ref<T: IndexParams>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Export into a fresh default record.
    pub fn to_record(&self) -> FlannParameters {
        let mut record = FlannParameters::default();
        self.to_parameters(&mut record);
        record
    }
}

impl Clone for Box<dyn IndexParams> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
