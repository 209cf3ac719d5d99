//! Table formatting utilities for structured output.

use comfy_table::{Attribute, Cell, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};

use crate::params::{IndexParams, ParamsRegistry, SearchParams};
use crate::record::FlannParameters;
use crate::types::Algorithm;

/// Builder for creating formatted tables.
pub struct TableBuilder {
    table: Table,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Create a new table builder.
    pub fn new() -> Self {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        // Apply rounded corners
        table.apply_modifier(UTF8_ROUND_CORNERS);
        Self { table }
    }

    /// Set the table headers.
    pub fn set_headers(mut self, headers: Vec<&str>) -> Self {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect();
        self.table.set_header(header_cells);
        self
    }

    /// Add a row to the table.
    pub fn add_row(mut self, row: Vec<String>) -> Self {
        self.table.add_row(row);
        self
    }

    /// Build and return the formatted table.
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

/// Table of one algorithm's parameters plus the search knob.
pub fn create_params_table(params: &dyn IndexParams, search: SearchParams) -> String {
    let mut builder = TableBuilder::new()
        .set_headers(vec!["Parameter", "Value"])
        .add_row(vec!["algorithm".to_string(), params.index_type().to_string()]);

    for (name, value) in params.describe() {
        builder = builder.add_row(vec![name.to_string(), value.to_string()]);
    }

    builder
        .add_row(vec!["checks".to_string(), search.checks.to_string()])
        .build()
}

/// Table of every field in a flat record.
pub fn create_record_table(record: &FlannParameters) -> String {
    let rows = [
        ("algorithm", record.algorithm.to_string()),
        ("checks", record.checks.to_string()),
        ("cb_index", record.cb_index.to_string()),
        ("trees", record.trees.to_string()),
        ("branching", record.branching.to_string()),
        ("iterations", record.iterations.to_string()),
        ("centers_init", record.centers_init.to_string()),
        ("target_precision", record.target_precision.to_string()),
        ("build_weight", record.build_weight.to_string()),
        ("memory_weight", record.memory_weight.to_string()),
        ("sample_fraction", record.sample_fraction.to_string()),
        ("log_level", record.log_level.to_string()),
        ("random_seed", record.random_seed.to_string()),
    ];

    rows.into_iter()
        .fold(
            TableBuilder::new().set_headers(vec!["Field", "Value"]),
            |builder, (name, value)| builder.add_row(vec![name.to_string(), value]),
        )
        .build()
}

/// Table of registered algorithms in tag order.
pub fn create_algorithms_table(registry: &ParamsRegistry) -> String {
    registry
        .iter()
        .fold(
            TableBuilder::new().set_headers(vec![
                "Tag",
                "Key",
                "Name",
                "Built-in",
                "Description",
            ]),
            |builder, def| {
                let id = def.id();
                let builtin = if Algorithm::from_id(id).is_some() { "yes" } else { "no" };
                builder.add_row(vec![
                    id.raw().to_string(),
                    id.to_string(),
                    def.name().to_string(),
                    builtin.to_string(),
                    def.description().to_string(),
                ])
            },
        )
        .build()
}
