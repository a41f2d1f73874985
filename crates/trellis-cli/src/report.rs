//! On-disk formats of the CLI: the input schema file and the output layout
//! report.
//!
//! Both sides are plain TOML through serde. The schema file is declarative:
//! it lists domains and foreign-key relationships and nothing else; grid
//! positions never appear in the input. The report carries the computed
//! domain grid and, unless configured off, every domain's table grid.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use trellis::{DomainGrid, config::OutputConfig};
use trellis_core::{
    geometry::GridCell,
    identifier::Id,
    schema::{Domain, Relationship},
};

/// A declarative schema file: domains plus relationships.
///
/// ```toml
/// [[domains]]
/// name = "billing"
/// tables = ["invoices", "payments"]
///
/// [[relationships]]
/// from = { table = "invoices", column = "user_id" }
/// to = { table = "users", column = "id" }
/// ```
#[derive(Debug, Deserialize)]
pub struct SchemaFile {
    /// The domains of the schema, in file order.
    #[serde(default)]
    pub domains: Vec<Domain>,

    /// The foreign-key relationships of the schema.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// The computed layout, ready to serialize as TOML.
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    /// Grid cell of every domain, in input order.
    domain_grid: DomainGrid,

    /// Per-domain table grids; empty when the output config excludes them.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    domains: IndexMap<Id, DomainReport>,
}

/// The table grid of a single domain.
#[derive(Debug, Serialize)]
struct DomainReport {
    columns: u32,
    tables: IndexMap<Id, GridCell>,
}

impl LayoutReport {
    /// Assembles a report from the engine output.
    pub fn new(domain_grid: DomainGrid, domains: &[Domain], output: &OutputConfig) -> Self {
        let domains = if output.include_table_grids() {
            domains
                .iter()
                .map(|domain| {
                    (
                        domain.name,
                        DomainReport {
                            columns: domain.columns,
                            tables: domain.table_positions.clone(),
                        },
                    )
                })
                .collect()
        } else {
            IndexMap::new()
        };

        Self {
            domain_grid,
            domains,
        }
    }
}
