//! Relationship indexing for schema layouts.
//!
//! This module provides the index layer between the input schema model and
//! the layout stages. It transforms the flat relationship list into the
//! lookups every later stage consumes:
//!
//! - a `table -> domain` arena lookup, built once so relationship resolution
//!   never rescans the domain list
//! - intra-domain edges grouped per domain
//! - cross-domain edges grouped per ordered `(from domain, to domain)` pair
//! - per-table incoming intra-domain connectivity
//! - per-table cross-domain links with their relative direction
//!
//! The index is exposed publicly so downstream consumers (renderers drawing
//! the actual edges) can reuse the groupings instead of re-deriving them.

mod relation_index;

pub use relation_index::{CrossLink, LinkDirection, RelationIndex};
