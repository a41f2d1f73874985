//! Trellis - Deterministic grid auto-layout for entity-relationship diagrams.
//!
//! Given a set of named domains (clusters of database tables) and the
//! foreign-key relationships between tables, Trellis computes an integer
//! `{row, col}` grid position for every domain and for every table inside
//! its domain. The hub domain, the one other domains point into, lands at
//! the origin; inside each domain the hub table sits centrally while
//! interface tables are pushed to the grid edge facing their external
//! neighbor.
//!
//! The computation is a pure, synchronous function of its input: no I/O, no
//! randomness, no state between calls. Input order is used only as the
//! last-resort tie-break, so structurally identical inputs always produce
//! identical layouts.

pub mod config;
pub mod structure;

mod error;
mod layout;

pub use trellis_core::{geometry, identifier, schema};

pub use error::TrellisError;
pub use layout::DomainGrid;

use log::{debug, info, trace};

use trellis_core::schema::{Domain, Relationship};

use config::LayoutConfig;
use structure::RelationIndex;

/// Computes ER-diagram layouts from a schema model.
///
/// # Examples
///
/// ```rust
/// use trellis::{LayoutBuilder, config::LayoutConfig};
/// use trellis_core::{identifier::Id, schema::{ColumnRef, Domain, Relationship}};
///
/// let mut domains = vec![
///     Domain::new(Id::new("billing"), vec![Id::new("invoices")]),
///     Domain::new(Id::new("accounts"), vec![Id::new("users")]),
/// ];
/// let relationships = vec![Relationship::new(
///     ColumnRef::new(Id::new("invoices"), Id::new("user_id")),
///     ColumnRef::new(Id::new("users"), Id::new("id")),
/// )];
///
/// let builder = LayoutBuilder::new(LayoutConfig::default());
/// let grid = builder.compute(&mut domains, &relationships)?;
///
/// // `accounts` receives the only cross-domain edge, so it is the hub.
/// assert_eq!(grid[&Id::new("accounts")].row(), 0);
/// assert_eq!(grid[&Id::new("accounts")].col(), 0);
/// # Ok::<(), trellis::TrellisError>(())
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: LayoutConfig,
}

impl LayoutBuilder {
    /// Creates a new layout builder with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Computes the full layout for a schema.
    ///
    /// Each `Domain` is annotated in place (`table_positions` is fully
    /// replaced and `columns` overwritten), and the domain-level grid is
    /// additionally returned, so purely functional callers never need to
    /// inspect the mutation.
    ///
    /// Relationships whose endpoints resolve to no domain are dropped from
    /// every score (with a warning); domains without any relationships fall
    /// back to input-order placement. Empty input yields an empty grid.
    ///
    /// Concurrent calls are safe as long as each call owns its `Domain`
    /// objects; nothing is shared between invocations.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Schema`] if a table is claimed by more than
    /// one domain.
    pub fn compute(
        &self,
        domains: &mut [Domain],
        relationships: &[Relationship],
    ) -> Result<DomainGrid, TrellisError> {
        info!(
            domains_count = domains.len(),
            relationships_count = relationships.len();
            "Computing ER layout",
        );

        if domains.is_empty() {
            return Ok(DomainGrid::new());
        }

        let index = RelationIndex::build(domains, relationships)?;

        let hub = layout::domain::select_hub(domains, &index);
        debug!(hub_domain = domains[hub].name.to_string(); "Hub domain selected");

        let cells = layout::domain::place_domains(domains, &index, hub);
        let grid: DomainGrid = domains
            .iter()
            .zip(&cells)
            .map(|(domain, &cell)| (domain.name, cell))
            .collect();
        trace!(grid:?; "Domain grid placed");

        for idx in 0..domains.len() {
            layout::table::layout_tables(&mut domains[idx], idx, &index, &cells, &self.config);
        }

        info!("Layout computed");
        Ok(grid)
    }
}
