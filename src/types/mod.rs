//! Shared identifier types.

mod tags;

pub use tags::{Algorithm, AlgorithmId, CentersInit, LogLevel};
