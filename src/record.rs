//! The flat, C-compatible parameter record.
//!
//! `FlannParameters` carries every knob of every algorithm in one fixed
//! layout so it can cross module, process or language boundaries. It has no
//! behavior beyond storage and does no validation; each typed parameter object
//! picks out the fields it owns.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::ffi::{c_float, c_int, c_long};

use crate::types::{AlgorithmId, CentersInit, LogLevel};

/// Flat parameter record shared with foreign callers.
///
/// Field order and widths match the C struct bit for bit. A field only means
/// something to the algorithms that own it; the others ignore it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlannParameters {
    /// Algorithm to build
    pub algorithm: AlgorithmId,

    /// How many leaves (features) to check in one search
    pub checks: c_int,
    /// Cluster boundary index, used when searching the k-means tree
    pub cb_index: c_float,

    /// Number of randomized k-d trees
    pub trees: c_int,

    /// Branching factor of the k-means tree
    pub branching: c_int,
    /// Maximum iterations of one k-means clustering step
    pub iterations: c_int,
    /// How initial k-means centers are picked
    pub centers_init: CentersInit,

    /// Precision the autotuner aims for
    pub target_precision: c_float,
    /// Weight of build time in the autotuner cost
    pub build_weight: c_float,
    /// Weight of index memory in the autotuner cost
    pub memory_weight: c_float,
    /// Fraction of the dataset the autotuner samples
    pub sample_fraction: c_float,

    /// Verbosity of library diagnostics
    pub log_level: LogLevel,
    /// Seed for randomized construction steps
    pub random_seed: c_long,
}

impl Default for FlannParameters {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmId::KDTREE,
            checks: 32,
            cb_index: 0.2,
            trees: 4,
            branching: 32,
            iterations: 11,
            centers_init: CentersInit::RANDOM,
            target_precision: 0.9,
            build_weight: 0.01,
            memory_weight: 0.0,
            sample_fraction: 0.1,
            log_level: LogLevel::NONE,
            random_seed: 0,
        }
    }
}

impl FlannParameters {
    /// The all-zero record, as a C caller gets from `memset`.
    ///
    /// Every tag is valid at zero: `LINEAR`, `RANDOM`, `NONE`.
    pub const fn zeroed() -> Self {
        Self {
            algorithm: AlgorithmId::from_raw(0),
            checks: 0,
            cb_index: 0.0,
            trees: 0,
            branching: 0,
            iterations: 0,
            centers_init: CentersInit::from_raw(0),
            target_precision: 0.0,
            build_weight: 0.0,
            memory_weight: 0.0,
            sample_fraction: 0.0,
            log_level: LogLevel::from_raw(0),
            random_seed: 0,
        }
    }

    /// Default record with a different algorithm tag.
    pub fn for_algorithm(algorithm: AlgorithmId) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Random generator seeded from `random_seed`.
    ///
    /// Builders draw initial centers and split dimensions from this so that a
    /// fixed seed reproduces the same index.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.random_seed as u64)
    }
}
