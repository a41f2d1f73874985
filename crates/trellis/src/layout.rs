//! Layout computation for schema diagrams.
//!
//! This module turns the relationship index into grid positions, first for
//! domains, then for the tables inside each domain.
//!
//! # Pipeline Position
//!
//! ```text
//! Schema Model (Domain, Relationship)
//!     ↓ structure
//! RelationIndex
//!     ↓ layout (this module)
//! DomainGrid + per-domain table positions
//!     ↓ rendering (out of scope)
//! Diagram
//! ```
//!
//! # Submodules
//!
//! - `domain` - hub domain detection and grid placement
//! - `table` - per-domain table hub, interface edges, internal fill

pub(crate) mod domain;
pub(crate) mod table;

use indexmap::IndexMap;

use trellis_core::{geometry::GridCell, identifier::Id};

/// The domain-level grid: one cell per input domain, in input order.
///
/// Exactly one domain maps to the origin (the hub), and no two domains
/// share a cell.
pub type DomainGrid = IndexMap<Id, GridCell>;
