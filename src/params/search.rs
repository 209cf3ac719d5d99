//! Per-query search effort

use serde::{Deserialize, Serialize};
use std::ffi::c_int;

use crate::record::FlannParameters;

/// Controls how much work one query may do.
///
/// `checks` bounds the number of leaves (candidate points) examined. Larger
/// values trade latency for recall. No validation is done here; the search
/// engine decides what non-positive values mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub checks: c_int,
}

impl SearchParams {
    pub const DEFAULT_CHECKS: c_int = 32;

    pub const fn new(checks: c_int) -> Self {
        Self { checks }
    }

    /// Read the search knob from a flat record.
    pub fn from_parameters(params: &FlannParameters) -> Self {
        Self::new(params.checks)
    }

    /// Write the search knob into a flat record, leaving build fields alone.
    pub fn to_parameters(&self, params: &mut FlannParameters) {
        params.checks = self.checks;
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHECKS)
    }
}
