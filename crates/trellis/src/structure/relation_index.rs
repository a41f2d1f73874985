//! The relationship index built once per layout call.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::{debug, warn};

use trellis_core::{
    identifier::Id,
    schema::{Domain, Relationship},
};

use crate::error::TrellisError;

/// Whether a cross-domain edge points into or out of the table it is
/// recorded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDirection {
    /// The table is the referenced (`to`) side of the edge.
    Incoming,

    /// The table is the referencing (`from`) side of the edge.
    Outgoing,
}

/// One cross-domain logical edge as seen from a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossLink {
    /// Index of the domain on the other side of the edge, into the input
    /// domain slice.
    pub other_domain: usize,

    /// Whether the edge points into or out of this table.
    pub direction: LinkDirection,
}

/// Indexes of a schema's relationships, resolved against its domains.
///
/// Built once per layout call. Relationships sharing a
/// `(from.table, to.table)` pair (composite foreign keys) are collapsed
/// into a single *logical edge* for every connectivity count; the raw edge
/// lists keep every relationship for consumers that need the column detail.
///
/// A relationship whose endpoints do not resolve to any domain is dropped
/// with a warning and contributes to no count.
#[derive(Debug)]
pub struct RelationIndex<'a> {
    /// Maps each table to the index of its owning domain.
    table_domain: HashMap<Id, usize>,

    /// Intra-domain edges, grouped by domain index.
    intra: Vec<Vec<&'a Relationship>>,

    /// Cross-domain edges, grouped by ordered `(from domain, to domain)` pair.
    cross: IndexMap<(usize, usize), Vec<&'a Relationship>>,

    /// Logical-edge counts per ordered `(from domain, to domain)` pair.
    cross_pairs: IndexMap<(usize, usize), usize>,

    /// Per-table incoming intra-domain logical-edge counts.
    incoming_intra: HashMap<Id, usize>,

    /// Per-table total intra-domain logical degree (in + out).
    intra_degree: HashMap<Id, usize>,

    /// Per-table cross-domain links, one per logical edge.
    cross_links: HashMap<Id, Vec<CrossLink>>,
}

impl<'a> RelationIndex<'a> {
    /// Builds the index from the input domains and relationships.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::Schema` if a table is claimed by more than one
    /// domain (or listed twice in the same domain); domains must partition
    /// the table universe.
    pub fn build(
        domains: &[Domain],
        relationships: &'a [Relationship],
    ) -> Result<Self, TrellisError> {
        let mut table_domain = HashMap::new();
        for (domain_idx, domain) in domains.iter().enumerate() {
            for &table in &domain.tables {
                if let Some(previous) = table_domain.insert(table, domain_idx) {
                    let message = if previous == domain_idx {
                        format!("table `{table}` is listed twice in domain `{}`", domain.name)
                    } else {
                        format!(
                            "table `{table}` is listed in both `{}` and `{}`",
                            domains[previous].name, domain.name
                        )
                    };
                    return Err(TrellisError::Schema(message));
                }
            }
        }

        let mut index = Self {
            table_domain,
            intra: vec![Vec::new(); domains.len()],
            cross: IndexMap::new(),
            cross_pairs: IndexMap::new(),
            incoming_intra: HashMap::new(),
            intra_degree: HashMap::new(),
            cross_links: HashMap::new(),
        };

        let mut seen_pairs = HashSet::new();
        let mut dropped = 0usize;

        for relationship in relationships {
            let (from_table, to_table) = relationship.table_pair();
            let (Some(&from_domain), Some(&to_domain)) = (
                index.table_domain.get(&from_table),
                index.table_domain.get(&to_table),
            ) else {
                warn!(
                    from = from_table.to_string(),
                    to = to_table.to_string();
                    "Dropping relationship with unresolvable endpoint",
                );
                dropped += 1;
                continue;
            };

            // Composite keys reinforce one logical edge, they do not
            // multiply connectivity.
            let first_of_pair = seen_pairs.insert((from_table, to_table));

            if from_domain == to_domain {
                index.intra[from_domain].push(relationship);
                if first_of_pair {
                    *index.incoming_intra.entry(to_table).or_default() += 1;
                    *index.intra_degree.entry(from_table).or_default() += 1;
                    *index.intra_degree.entry(to_table).or_default() += 1;
                }
            } else {
                index
                    .cross
                    .entry((from_domain, to_domain))
                    .or_default()
                    .push(relationship);
                if first_of_pair {
                    *index.cross_pairs.entry((from_domain, to_domain)).or_default() += 1;
                    index.cross_links.entry(from_table).or_default().push(CrossLink {
                        other_domain: to_domain,
                        direction: LinkDirection::Outgoing,
                    });
                    index.cross_links.entry(to_table).or_default().push(CrossLink {
                        other_domain: from_domain,
                        direction: LinkDirection::Incoming,
                    });
                }
            }
        }

        debug!(
            intra_groups = index.intra.iter().filter(|edges| !edges.is_empty()).count(),
            cross_pairs = index.cross_pairs.len(),
            dropped;
            "Relationship index built",
        );

        Ok(index)
    }

    /// Returns the owning domain index of a table, if it belongs to one.
    pub fn domain_of(&self, table: Id) -> Option<usize> {
        self.table_domain.get(&table).copied()
    }

    /// Returns the intra-domain edges of a domain.
    pub fn intra_edges(&self, domain: usize) -> &[&'a Relationship] {
        &self.intra[domain]
    }

    /// Returns the cross-domain edges grouped by ordered domain pair.
    pub fn cross_edges(
        &self,
    ) -> impl Iterator<Item = ((usize, usize), &[&'a Relationship])> {
        self.cross.iter().map(|(&pair, edges)| (pair, edges.as_slice()))
    }

    /// Returns the logical-edge counts per ordered `(from, to)` domain pair.
    pub fn cross_domain_pairs(&self) -> impl Iterator<Item = ((usize, usize), usize)> {
        self.cross_pairs.iter().map(|(&pair, &count)| (pair, count))
    }

    /// Returns the number of incoming cross-domain logical edges of a domain.
    ///
    /// This is the hub score: relationships whose `to.table` lies in the
    /// domain and whose `from.table` lies elsewhere.
    pub fn incoming_cross_score(&self, domain: usize) -> usize {
        self.cross_pairs
            .iter()
            .filter(|((_, to), _)| *to == domain)
            .map(|(_, &count)| count)
            .sum()
    }

    /// Returns the total cross-domain logical degree (in + out) of a domain.
    pub fn cross_degree(&self, domain: usize) -> usize {
        self.cross_pairs
            .iter()
            .filter(|((from, to), _)| *from == domain || *to == domain)
            .map(|(_, &count)| count)
            .sum()
    }

    /// Returns the number of incoming intra-domain logical edges of a table.
    pub fn incoming_intra(&self, table: Id) -> usize {
        self.incoming_intra.get(&table).copied().unwrap_or(0)
    }

    /// Returns the total intra-domain logical degree (in + out) of a table.
    pub fn intra_degree(&self, table: Id) -> usize {
        self.intra_degree.get(&table).copied().unwrap_or(0)
    }

    /// Returns the cross-domain links of a table, one per logical edge.
    pub fn cross_links(&self, table: Id) -> &[CrossLink] {
        self.cross_links
            .get(&table)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
