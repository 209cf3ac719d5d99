//! Index parameters and algorithm selection for nearest-neighbor search.
//!
//! A caller describes the index it wants in a flat, C-compatible
//! [`FlannParameters`] record. The [`params::ParamsRegistry`] turns that
//! record into typed parameters for the selected algorithm, and
//! [`distance::DistanceType`] names the accumulator a distance kernel should
//! use for a given element type.

pub mod config;
pub mod display;
pub mod distance;
pub mod error;
pub mod io;
pub mod params;
pub mod record;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use distance::{DataType, DistanceKind, DistanceType, ElementType};
pub use error::{ParamsError, ParamsResult};
pub use params::{IndexParams, ParamsRegistry, SearchParams, create_from_parameters};
pub use record::FlannParameters;
pub use types::{Algorithm, AlgorithmId, CentersInit, LogLevel};
