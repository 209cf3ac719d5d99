//! Terminal display utilities for CLI output.
//!
//! Provides styled tables and themed status lines.

pub mod tables;
pub mod theme;

pub use tables::{TableBuilder, create_algorithms_table, create_params_table, create_record_table};
pub use theme::{THEME, Theme};
