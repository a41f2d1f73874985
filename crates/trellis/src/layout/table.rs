//! Per-domain table layout.
//!
//! Inside each domain the hub table (the most referenced one) anchors the
//! local grid, interface tables are pushed to the edge facing the external
//! domain they connect to, and purely internal tables pack into the free
//! cells around the hub.

use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

use indexmap::IndexMap;
use log::trace;

use trellis_core::{
    geometry::{Direction, GridCell},
    identifier::Id,
    schema::Domain,
};

use crate::{config::LayoutConfig, structure::RelationIndex};

/// Lays out the tables of one domain, writing `table_positions` and
/// `columns` in place.
///
/// `domain_cells` holds the already computed domain grid, indexed like the
/// input domain slice; it is what orients interface tables toward their
/// external neighbors.
pub(crate) fn layout_tables(
    domain: &mut Domain,
    domain_idx: usize,
    index: &RelationIndex,
    domain_cells: &[GridCell],
    config: &LayoutConfig,
) {
    let table_count = domain.tables.len();
    if table_count == 0 {
        domain.table_positions = IndexMap::new();
        domain.columns = 1;
        return;
    }

    let hub = select_hub_table(domain, index);
    let facing = classify_interfaces(domain, domain_idx, index, domain_cells);

    // The hub is placed as the hub even when it carries cross-domain links
    // itself, so it does not count toward edge-column sizing.
    let has_left = facing
        .iter()
        .any(|(&table, &dir)| table != hub && dir == Direction::Left);
    let has_right = facing
        .iter()
        .any(|(&table, &dir)| table != hub && dir == Direction::Right);

    let columns = required_columns(table_count, has_left, has_right);
    let rows = table_count.div_ceil(columns as usize) as i32;

    let (left_pressure, right_pressure) =
        horizontal_pressure(domain, domain_idx, index, domain_cells);
    let hub_col = if right_pressure > left_pressure {
        0
    } else if left_pressure > right_pressure {
        columns as i32 - 1
    } else {
        columns as i32 / 2
    };
    let hub_cell = GridCell::new(rows / 2, hub_col);

    trace!(
        domain = domain.name.to_string(),
        hub = hub.to_string(),
        columns,
        interface_tables = facing.len();
        "Laying out domain tables",
    );

    let mut occupied = HashSet::from([hub_cell]);
    let mut placed = HashMap::from([(hub, hub_cell)]);

    place_interface_tables(domain, hub, &facing, columns, rows, &mut occupied, &mut placed);

    let internals: Vec<Id> = domain
        .tables
        .iter()
        .copied()
        .filter(|&table| table != hub && !facing.contains_key(&table))
        .collect();
    fill_internal_tables(
        &internals,
        hub_cell,
        columns,
        config.orbit_distance(),
        &mut occupied,
        &mut placed,
    );

    domain.table_positions = domain
        .tables
        .iter()
        .map(|&table| (table, placed[&table]))
        .collect();
    domain.columns = columns;
}

/// Selects the domain's hub table: the one with the most incoming
/// intra-domain logical edges, ties broken by total intra-domain degree,
/// then by position in the domain's table list.
fn select_hub_table(domain: &Domain, index: &RelationIndex) -> Id {
    domain
        .tables
        .iter()
        .enumerate()
        .min_by_key(|&(position, &table)| {
            (
                Reverse(index.incoming_intra(table)),
                Reverse(index.intra_degree(table)),
                position,
            )
        })
        .map(|(_, &table)| table)
        .expect("Caller guarantees at least one table")
}

/// Determines the facing direction of every interface table.
///
/// A table with at least one cross-domain link faces the external domain it
/// is most strongly connected to; the direction is derived from that
/// domain's grid cell relative to this domain's own cell. Weight ties pick
/// the direction yielding the lowest column (left, up, down, right) and
/// then the external domain earliest in input order. Tables without cross
/// links are absent from the result.
fn classify_interfaces(
    domain: &Domain,
    domain_idx: usize,
    index: &RelationIndex,
    domain_cells: &[GridCell],
) -> IndexMap<Id, Direction> {
    let own_cell = domain_cells[domain_idx];
    let mut facing = IndexMap::new();

    for &table in &domain.tables {
        let links = index.cross_links(table);
        if links.is_empty() {
            continue;
        }

        let mut weights: IndexMap<usize, usize> = IndexMap::new();
        for link in links {
            *weights.entry(link.other_domain).or_default() += 1;
        }

        let dominant = weights
            .iter()
            .filter_map(|(&other, &weight)| {
                own_cell
                    .direction_to(domain_cells[other])
                    .map(|direction| (other, weight, direction))
            })
            .min_by_key(|&(other, weight, direction)| {
                (Reverse(weight), direction_rank(direction), other)
            });

        if let Some((_, _, direction)) = dominant {
            facing.insert(table, direction);
        }
    }

    facing
}

/// Ranks directions by the column an edge-placed table would end up in, so
/// weight ties bias toward compact layouts.
fn direction_rank(direction: Direction) -> u8 {
    match direction {
        Direction::Left => 0,
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Right => 3,
    }
}

/// Computes the number of grid columns the domain needs.
///
/// Any horizontally-facing interface table forces the three-column shape
/// (edge column, middle, opposite edge), with same-side tables stacking in
/// rows. A domain with only vertical or internal tables gets a near-square
/// grid instead.
fn required_columns(table_count: usize, has_left: bool, has_right: bool) -> u32 {
    if has_left || has_right {
        3
    } else {
        (table_count as f64).sqrt().ceil() as u32
    }
}

/// Sums the domain's cross-domain logical edges pointing toward domains on
/// the left and on the right. The hub sits on the column opposite the
/// heavier side, so exiting edges never wrap around it.
fn horizontal_pressure(
    domain: &Domain,
    domain_idx: usize,
    index: &RelationIndex,
    domain_cells: &[GridCell],
) -> (usize, usize) {
    let own_cell = domain_cells[domain_idx];
    let (mut left, mut right) = (0, 0);

    for &table in &domain.tables {
        for link in index.cross_links(table) {
            match own_cell.direction_to(domain_cells[link.other_domain]) {
                Some(Direction::Left) => left += 1,
                Some(Direction::Right) => right += 1,
                _ => {}
            }
        }
    }

    (left, right)
}

/// Places every non-hub interface table on the grid edge facing its
/// direction: right-facing in the last column, left-facing in column 0,
/// both stacking top-down; vertically-facing tables in the top or bottom
/// row, first free column, overflowing toward the grid interior (up) or
/// below it (down).
fn place_interface_tables(
    domain: &Domain,
    hub: Id,
    facing: &IndexMap<Id, Direction>,
    columns: u32,
    rows: i32,
    occupied: &mut HashSet<GridCell>,
    placed: &mut HashMap<Id, GridCell>,
) {
    for &table in &domain.tables {
        if table == hub {
            continue;
        }
        let Some(&direction) = facing.get(&table) else {
            continue;
        };

        let cell = match direction {
            Direction::Right => descend_rows(columns as i32 - 1, occupied),
            Direction::Left => descend_rows(0, occupied),
            Direction::Up => scan_row_cols(0, columns, occupied),
            Direction::Down => scan_row_cols(rows - 1, columns, occupied),
        };
        occupied.insert(cell);
        placed.insert(table, cell);
    }
}

/// First free cell walking down a fixed column from row 0.
fn descend_rows(col: i32, occupied: &HashSet<GridCell>) -> GridCell {
    (0..)
        .map(|row| GridCell::new(row, col))
        .find(|cell| !occupied.contains(cell))
        .expect("Rows are unbounded")
}

/// First free cell scanning a row left to right, moving down a row at a time
/// when a row is full.
fn scan_row_cols(start_row: i32, columns: u32, occupied: &HashSet<GridCell>) -> GridCell {
    (0..)
        .map(|offset| start_row + offset)
        .flat_map(|row| (0..columns as i32).map(move |col| GridCell::new(row, col)))
        .find(|cell| !occupied.contains(cell))
        .expect("Rows are unbounded")
}

/// Packs the internal tables, input order, into free cells row-major,
/// preferring cells within `orbit_distance` of the hub before overflowing to
/// the first free cell anywhere in the grid rectangle.
fn fill_internal_tables(
    internals: &[Id],
    hub_cell: GridCell,
    columns: u32,
    orbit_distance: u32,
    occupied: &mut HashSet<GridCell>,
    placed: &mut HashMap<Id, GridCell>,
) {
    for &table in internals {
        let near_hub = (0..=hub_cell.row() + orbit_distance as i32)
            .flat_map(|row| (0..columns as i32).map(move |col| GridCell::new(row, col)))
            .find(|cell| {
                !occupied.contains(cell) && hub_cell.manhattan_distance(*cell) <= orbit_distance
            });
        let cell = near_hub.unwrap_or_else(|| {
            (0..)
                .flat_map(|row| (0..columns as i32).map(move |col| GridCell::new(row, col)))
                .find(|cell| !occupied.contains(cell))
                .expect("Rows are unbounded")
        });

        occupied.insert(cell);
        placed.insert(table, cell);
    }
}

#[cfg(test)]
mod tests {
    use trellis_core::schema::{ColumnRef, Relationship};

    use super::*;

    fn relationship(from: &str, to: &str) -> Relationship {
        Relationship::new(
            ColumnRef::new(Id::new(from), Id::new("fk")),
            ColumnRef::new(Id::new(to), Id::new("id")),
        )
    }

    fn domain(name: &str, tables: &[&str]) -> Domain {
        Domain::new(Id::new(name), tables.iter().map(|t| Id::new(t)).collect())
    }

    #[test]
    fn test_required_columns() {
        assert_eq!(required_columns(4, true, false), 3);
        assert_eq!(required_columns(2, false, true), 3);
        assert_eq!(required_columns(9, true, true), 3);
        assert_eq!(required_columns(1, false, false), 1);
        assert_eq!(required_columns(3, false, false), 2);
        assert_eq!(required_columns(5, false, false), 3);
    }

    #[test]
    fn test_hub_table_prefers_most_referenced() {
        let d = domain("core", &["a", "b", "c"]);
        let relationships = vec![relationship("a", "b"), relationship("c", "b")];
        let index = RelationIndex::build(std::slice::from_ref(&d), &relationships).unwrap();

        assert_eq!(select_hub_table(&d, &index), "b");
    }

    #[test]
    fn test_hub_table_falls_back_to_input_order() {
        let d = domain("core", &["a", "b"]);
        let index = RelationIndex::build(std::slice::from_ref(&d), &[]).unwrap();

        assert_eq!(select_hub_table(&d, &index), "a");
    }

    #[test]
    fn test_empty_domain_gets_one_column_and_no_positions() {
        let mut d = domain("empty", &[]);
        let index = RelationIndex::build(std::slice::from_ref(&d), &[]).unwrap();

        layout_tables(
            &mut d,
            0,
            &index,
            &[GridCell::ORIGIN],
            &LayoutConfig::default(),
        );

        assert_eq!(d.columns, 1);
        assert!(d.table_positions.is_empty());
    }

    #[test]
    fn test_right_facing_interface_pins_three_columns() {
        // One right-facing interface table, a hub, and two internal tables:
        // hub in column 0, interface table in the rightmost column, internal
        // tables orbiting in unused cells.
        let mut domains = vec![
            domain("core", &["hub_table", "bridge", "inner_a", "inner_b"]),
            domain("east", &["remote"]),
        ];
        let relationships = vec![
            relationship("inner_a", "hub_table"),
            relationship("inner_b", "hub_table"),
            relationship("remote", "bridge"),
        ];
        let index = RelationIndex::build(&domains, &relationships).unwrap();
        let cells = [GridCell::ORIGIN, GridCell::new(0, 1)];

        let mut core = domains.remove(0);
        layout_tables(&mut core, 0, &index, &cells, &LayoutConfig::default());

        assert_eq!(core.columns, 3);
        let hub_cell = core.table_positions[&Id::new("hub_table")];
        let bridge_cell = core.table_positions[&Id::new("bridge")];
        assert_eq!(hub_cell.col(), 0);
        assert_eq!(bridge_cell.col(), 2);
        for inner in ["inner_a", "inner_b"] {
            let cell = core.table_positions[&Id::new(inner)];
            assert!(hub_cell.manhattan_distance(cell) <= 2);
        }
    }

    #[test]
    fn test_vertical_interface_sits_on_edge_row() {
        let mut domains = vec![
            domain("core", &["anchor", "bridge"]),
            domain("south", &["remote"]),
        ];
        let relationships = vec![relationship("remote", "bridge")];
        let index = RelationIndex::build(&domains, &relationships).unwrap();
        let cells = [GridCell::ORIGIN, GridCell::new(1, 0)];

        let mut core = domains.remove(0);
        layout_tables(&mut core, 0, &index, &cells, &LayoutConfig::default());

        // No horizontal interfaces: near-square grid, bottom-row placement.
        assert_eq!(core.columns, 2);
        assert_eq!(core.table_positions[&Id::new("bridge")].row(), 0);
    }

    #[test]
    fn test_weight_tie_prefers_lowest_column_direction() {
        // bridge connects equally to a domain on the right and one on the
        // left; the left edge (column 0) wins the tie.
        let mut domains = vec![
            domain("core", &["anchor", "bridge"]),
            domain("east", &["e1"]),
            domain("west", &["w1"]),
        ];
        let relationships = vec![
            relationship("e1", "bridge"),
            relationship("w1", "bridge"),
        ];
        let index = RelationIndex::build(&domains, &relationships).unwrap();
        let cells = [GridCell::ORIGIN, GridCell::new(0, 1), GridCell::new(0, -1)];

        let mut core = domains.remove(0);
        layout_tables(&mut core, 0, &index, &cells, &LayoutConfig::default());

        assert_eq!(core.table_positions[&Id::new("bridge")].col(), 0);
    }
}
