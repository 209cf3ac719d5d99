//! Configuration module for index parameters.
//!
//! This module provides a layered configuration system that supports:
//! - Default values (the flat record defaults)
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides (applied by the binary)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `ANN_` and use double
//! underscores to separate nested levels:
//! - `ANN_INDEX__ALGORITHM=kmeans` sets `index.algorithm`
//! - `ANN_INDEX__TREES=8` sets `index.trees`
//! - `ANN_SEARCH__CHECKS=128` sets `search.checks`
//! - `ANN_LOG_LEVEL=info` sets `log_level`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::ffi::{c_float, c_int, c_long};
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, ParamsError, ParamsResult};
use crate::params::SearchParams;
use crate::record::FlannParameters;
use crate::types::{AlgorithmId, CentersInit, LogLevel};

/// Directory holding the settings file, searched for from the current
/// directory upwards.
pub const CONFIG_DIR: &str = ".annparams";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ANN_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Verbosity of library diagnostics
    #[serde(default)]
    pub log_level: LogLevel,

    /// Seed for randomized construction steps
    #[serde(default)]
    pub random_seed: c_long,

    /// Index build settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Query settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Algorithm selection and every build knob.
///
/// Knobs that the selected algorithm does not own are carried along and
/// ignored, so switching algorithms keeps the other sections' values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct IndexConfig {
    pub algorithm: AlgorithmId,
    pub trees: c_int,
    pub branching: c_int,
    pub iterations: c_int,
    pub centers_init: CentersInit,
    pub cb_index: c_float,
    pub target_precision: c_float,
    pub build_weight: c_float,
    pub memory_weight: c_float,
    pub sample_fraction: c_float,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Leaves to check per query
    pub checks: c_int,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_parameters(&FlannParameters::default())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Settings::default().index
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            checks: SearchParams::DEFAULT_CHECKS,
        }
    }
}

impl Settings {
    /// Settings mirroring a flat record
    pub fn from_parameters(params: &FlannParameters) -> Self {
        Self {
            version: default_version(),
            log_level: params.log_level,
            random_seed: params.random_seed,
            index: IndexConfig {
                algorithm: params.algorithm,
                trees: params.trees,
                branching: params.branching,
                iterations: params.iterations,
                centers_init: params.centers_init,
                cb_index: params.cb_index,
                target_precision: params.target_precision,
                build_weight: params.build_weight,
                memory_weight: params.memory_weight,
                sample_fraction: params.sample_fraction,
            },
            search: SearchConfig {
                checks: params.checks,
            },
        }
    }

    /// Flatten into the record handed to the registry
    pub fn to_parameters(&self) -> FlannParameters {
        FlannParameters {
            algorithm: self.index.algorithm,
            checks: self.search.checks,
            cb_index: self.index.cb_index,
            trees: self.index.trees,
            branching: self.index.branching,
            iterations: self.index.iterations,
            centers_init: self.index.centers_init,
            target_precision: self.index.target_precision,
            build_weight: self.index.build_weight,
            memory_weight: self.index.memory_weight,
            sample_fraction: self.index.sample_fraction,
            log_level: self.log_level,
            random_seed: self.random_seed,
        }
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams::new(self.search.checks)
    }

    /// Load configuration from all sources
    pub fn load() -> ParamsResult<Self> {
        // Try to find the workspace root by looking for the config directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| Path::new(CONFIG_DIR).join("settings.toml"));

        Self::load_from(config_path)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> ParamsResult<Self> {
        Self::figment(path.as_ref())
            .extract()
            .map_err(|e| ParamsError::Config {
                reason: e.to_string(),
            })
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path))
            // Double underscore separates nested levels, single underscore
            // stays part of the field name
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the settings file by searching from the current directory up
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join("settings.toml"))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ParamsResult<()> {
        let path = path.as_ref();
        let toml_string = toml::to_string_pretty(self).context("Serializing settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ParamsError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, toml_string).map_err(|source| ParamsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create the default settings file under the current directory
    pub fn init_config_file(force: bool) -> ParamsResult<PathBuf> {
        let config_path = Path::new(CONFIG_DIR).join("settings.toml");
        Self::init_config_file_at(&config_path, force)?;
        Ok(config_path)
    }

    /// Write a commented settings template to `path`
    pub fn init_config_file_at(path: &Path, force: bool) -> ParamsResult<()> {
        if !force && path.exists() {
            return Err(ParamsError::Config {
                reason: format!(
                    "Configuration file already exists at {}. Use --force to overwrite",
                    path.display()
                ),
            });
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ParamsError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, SETTINGS_TEMPLATE).map_err(|source| ParamsError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

const SETTINGS_TEMPLATE: &str = r#"# annparams configuration file

# Version of the configuration schema
version = 1

# Diagnostics verbosity: none, fatal, error, warn, info
log_level = "none"

# Seed for randomized construction (k-d split dimensions, k-means centers)
random_seed = 0

[index]
# linear, kdtree, kmeans, composite, saved, autotuned
algorithm = "kdtree"

# kdtree / composite: number of randomized trees
trees = 4

# kmeans / composite
branching = 32
iterations = 11
# random, gonzales, kmeanspp
centers_init = "random"
cb_index = 0.2

# autotuned
target_precision = 0.9
build_weight = 0.01
memory_weight = 0.0
sample_fraction = 0.1

[search]
# Leaves to check per query; higher is slower and more accurate
checks = 32
"#;
