//! The schema model: domains, tables, and foreign-key relationships.
//!
//! These types are the input contract of the layout engine. They are
//! constructed by the caller (an ingestion layer, or deserialized from a
//! declarative schema file) and annotated in place by the engine:
//! [`Domain::table_positions`] and [`Domain::columns`] start empty and are
//! written during layout.
//!
//! Tables have no entity of their own: they are referenced by interned name
//! everywhere, and every table name is expected to be unique across the whole
//! input, not just within its domain.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{geometry::GridCell, identifier::Id};

/// One endpoint of a foreign-key relationship: a table and a column in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// The table holding the column.
    pub table: Id,

    /// The column name.
    pub column: Id,
}

impl ColumnRef {
    /// Creates a new column reference.
    pub fn new(table: Id, column: Id) -> Self {
        Self { table, column }
    }
}

/// A directed foreign-key edge between two tables.
///
/// `from` is the referencing side, `to` the referenced (target) side.
/// Several relationships may share the same `(from.table, to.table)` pair
/// (composite keys) and are then treated as one logical edge by every
/// connectivity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The referencing table and column.
    pub from: ColumnRef,

    /// The referenced table and column.
    pub to: ColumnRef,
}

impl Relationship {
    /// Creates a new relationship from a referencing column to a referenced column.
    pub fn new(from: ColumnRef, to: ColumnRef) -> Self {
        Self { from, to }
    }

    /// Returns the `(from.table, to.table)` pair identifying the logical edge.
    pub fn table_pair(&self) -> (Id, Id) {
        (self.from.table, self.to.table)
    }
}

/// A named cluster of tables, laid out and visualized as a unit.
///
/// Domains partition the table universe: every table belongs to exactly one
/// domain. The `tables` list order is significant: it is the deterministic
/// last-resort tie-break for hub selection and fill order.
///
/// `table_positions` and `columns` are outputs: the engine replaces them
/// wholesale on every layout call. Their serde defaults let schema files omit
/// them entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// The domain name.
    pub name: Id,

    /// The tables belonging to this domain, in input order.
    pub tables: Vec<Id>,

    /// Grid position of every table, written by the layout engine.
    ///
    /// After layout this holds exactly one entry per name in `tables`, in
    /// `tables` order, with every column in `[0, columns)`.
    #[serde(default)]
    pub table_positions: IndexMap<Id, GridCell>,

    /// Width of the domain-local grid, written by the layout engine.
    #[serde(default)]
    pub columns: u32,
}

impl Domain {
    /// Creates a new domain with empty layout annotations.
    pub fn new(name: Id, tables: Vec<Id>) -> Self {
        Self {
            name,
            tables,
            table_positions: IndexMap::new(),
            columns: 0,
        }
    }
}
