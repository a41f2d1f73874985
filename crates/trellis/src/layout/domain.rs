//! Domain hub detection and domain grid placement.
//!
//! The hub domain, the one other domains point into, is pinned at the
//! origin; every other domain is placed by a breadth-first expansion along
//! the cross-domain relationship graph, strongest connections first, in
//! cells adjacent to the neighbor that pulled them in.

use std::{
    cmp::Reverse,
    collections::{HashSet, VecDeque},
};

use log::trace;
use petgraph::graph::{NodeIndex, UnGraph};

use trellis_core::{geometry::GridCell, schema::Domain};

use crate::structure::RelationIndex;

/// Selects the hub domain: the one with the most incoming cross-domain
/// logical edges.
///
/// Ties fall through to total cross-domain degree, then to input order, so
/// the result is deterministic for identical input. With no cross-domain
/// relationships at all, the first domain wins.
pub(crate) fn select_hub(domains: &[Domain], index: &RelationIndex) -> usize {
    (0..domains.len())
        .min_by_key(|&domain| {
            (
                Reverse(index.incoming_cross_score(domain)),
                Reverse(index.cross_degree(domain)),
                domain,
            )
        })
        .expect("Caller guarantees at least one domain")
}

/// Places every domain on the grid, returning cells indexed like the input
/// slice.
///
/// The hub sits at the origin. A breadth-first expansion over the undirected
/// cross-domain graph places each newly reached domain in the first free
/// cell around its connecting neighbor: right, down, left, up, then outward
/// rings in the same circular order. Neighbors of one domain are placed in
/// descending connection strength, input order on ties. Domains with no path
/// to the hub settle on the outward frontier around the origin, in input
/// order.
pub(crate) fn place_domains(
    domains: &[Domain],
    index: &RelationIndex,
    hub: usize,
) -> Vec<GridCell> {
    let mut graph = UnGraph::<usize, usize>::default();
    let nodes: Vec<NodeIndex> = (0..domains.len()).map(|domain| graph.add_node(domain)).collect();
    for ((from, to), strength) in index.cross_domain_pairs() {
        // Opposite-direction pairs merge into one undirected edge.
        match graph.find_edge(nodes[from], nodes[to]) {
            Some(edge) => {
                *graph.edge_weight_mut(edge).expect("Edge was just found") += strength;
            }
            None => {
                graph.add_edge(nodes[from], nodes[to], strength);
            }
        }
    }

    let mut cells: Vec<Option<GridCell>> = vec![None; domains.len()];
    let mut occupied = HashSet::from([GridCell::ORIGIN]);
    cells[hub] = Some(GridCell::ORIGIN);

    let mut queue = VecDeque::from([hub]);
    while let Some(current) = queue.pop_front() {
        let anchor = cells[current].expect("Queued domains are placed");

        let mut pending: Vec<usize> = graph
            .neighbors(nodes[current])
            .map(|neighbor| graph[neighbor])
            .filter(|&neighbor| cells[neighbor].is_none())
            .collect();
        pending.sort_by_key(|&neighbor| {
            let edge = graph
                .find_edge(nodes[current], nodes[neighbor])
                .expect("Neighbor implies an edge");
            let strength = *graph.edge_weight(edge).expect("Edge carries a strength");
            (Reverse(strength), neighbor)
        });

        for neighbor in pending {
            let cell = nearest_free_cell(anchor, &occupied);
            cells[neighbor] = Some(cell);
            occupied.insert(cell);
            trace!(
                domain = domains[neighbor].name.to_string(),
                row = cell.row(),
                col = cell.col();
                "Placed domain",
            );
            queue.push_back(neighbor);
        }
    }

    for domain in 0..domains.len() {
        if cells[domain].is_none() {
            let cell = nearest_free_cell(GridCell::ORIGIN, &occupied);
            cells[domain] = Some(cell);
            occupied.insert(cell);
            trace!(
                domain = domains[domain].name.to_string(),
                row = cell.row(),
                col = cell.col();
                "Placed disconnected domain",
            );
        }
    }

    cells
        .into_iter()
        .map(|cell| cell.expect("Every domain is placed"))
        .collect()
}

/// Finds the nearest unoccupied cell around an anchor, scanning outward ring
/// by ring, each ring walked right, down, left, up.
fn nearest_free_cell(anchor: GridCell, occupied: &HashSet<GridCell>) -> GridCell {
    (1..)
        .flat_map(|radius| anchor.ring(radius))
        .find(|cell| !occupied.contains(cell))
        .expect("The grid is unbounded")
}
