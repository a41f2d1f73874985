//! Integer grid geometry for diagram layout.
//!
//! This module provides the fundamental geometric types used throughout Trellis
//! for positioning domains and tables on a logical grid.
//!
//! # Overview
//!
//! - [`GridCell`] - An integer `{row, col}` position on the layout grid
//! - [`Direction`] - A cardinal direction derived from the delta between two cells
//!
//! # Coordinate System
//!
//! Trellis uses a screen-oriented grid:
//!
//! ```text
//!   (0,0) ────────► +col
//!     │
//!     │
//!     │
//!     ▼
//!   +row
//! ```
//!
//! - **Origin**: the hub cell at `(0, 0)`
//! - **col**: increases rightward (negative columns are to the left)
//! - **row**: increases downward (negative rows are above)
//!
//! Cells are logical units; a renderer multiplies them by a fixed cell size
//! to obtain pixel coordinates.

use serde::{Deserialize, Serialize};

/// An integer cell on the layout grid.
///
/// Domain-level cells may be negative (the hub sits at the origin and
/// satellites expand in all four directions); table-local cells are
/// non-negative.
///
/// # Examples
///
/// ```
/// # use trellis_core::geometry::{Direction, GridCell};
/// let hub = GridCell::new(0, 0);
/// let right = hub.translate(0, 1);
///
/// assert_eq!(right.col(), 1);
/// assert_eq!(hub.manhattan_distance(right), 1);
/// assert_eq!(hub.direction_to(right), Some(Direction::Right));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    row: i32,
    col: i32,
}

impl GridCell {
    /// The origin cell `(0, 0)` where the hub is placed.
    pub const ORIGIN: GridCell = GridCell { row: 0, col: 0 };

    /// Creates a new cell at the specified row and column.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row of the cell.
    pub fn row(self) -> i32 {
        self.row
    }

    /// Returns the column of the cell.
    pub fn col(self) -> i32 {
        self.col
    }

    /// Returns a new cell offset by the given row and column deltas.
    pub fn translate(self, row_delta: i32, col_delta: i32) -> Self {
        Self {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }

    /// Returns the Manhattan distance between this cell and another.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis_core::geometry::GridCell;
    /// let a = GridCell::new(1, 0);
    /// let b = GridCell::new(0, 2);
    ///
    /// assert_eq!(a.manhattan_distance(b), 3);
    /// ```
    pub fn manhattan_distance(self, other: GridCell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Derives the cardinal direction from this cell toward another.
    ///
    /// The column delta decides first (`Right`/`Left`); ties fall through to
    /// the row delta (`Down`/`Up`). Returns `None` when the cells coincide.
    pub fn direction_to(self, other: GridCell) -> Option<Direction> {
        let col_delta = other.col - self.col;
        let row_delta = other.row - self.row;

        if col_delta > 0 {
            Some(Direction::Right)
        } else if col_delta < 0 {
            Some(Direction::Left)
        } else if row_delta > 0 {
            Some(Direction::Down)
        } else if row_delta < 0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Returns the cells at the given Manhattan radius from this cell, walked
    /// clockwise from the east: right, down, left, up.
    ///
    /// Radius 1 yields exactly the four orthogonal neighbors in the preferred
    /// placement order. Larger radii trace the full diamond ring, so scanning
    /// radii `1, 2, 3, ...` visits every cell of the plane exactly once in a
    /// deterministic order.
    pub fn ring(self, radius: u32) -> Vec<GridCell> {
        let r = radius as i32;
        if r == 0 {
            return vec![self];
        }

        let mut cells = Vec::with_capacity(4 * radius as usize);
        // E -> S
        for i in 0..r {
            cells.push(self.translate(i, r - i));
        }
        // S -> W
        for i in 0..r {
            cells.push(self.translate(r - i, -i));
        }
        // W -> N
        for i in 0..r {
            cells.push(self.translate(-i, -(r - i)));
        }
        // N -> E
        for i in 0..r {
            cells.push(self.translate(-(r - i), i));
        }
        cells
    }
}

/// A cardinal direction on the grid.
///
/// Directions are derived on demand from cell deltas (see
/// [`GridCell::direction_to`]); they are never stored in the layout output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true for `Left` and `Right`.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_direction_prefers_column_delta() {
        let origin = GridCell::ORIGIN;

        assert_eq!(
            origin.direction_to(GridCell::new(5, 1)),
            Some(Direction::Right)
        );
        assert_eq!(
            origin.direction_to(GridCell::new(-3, -1)),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_direction_falls_back_to_row_delta() {
        let origin = GridCell::ORIGIN;

        assert_eq!(
            origin.direction_to(GridCell::new(2, 0)),
            Some(Direction::Down)
        );
        assert_eq!(
            origin.direction_to(GridCell::new(-1, 0)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_direction_to_self_is_none() {
        let cell = GridCell::new(3, -2);

        assert_eq!(cell.direction_to(cell), None);
    }

    #[test]
    fn test_ring_radius_one_is_orthogonal_neighbors() {
        let cells = GridCell::ORIGIN.ring(1);

        assert_eq!(
            cells,
            vec![
                GridCell::new(0, 1),  // right
                GridCell::new(1, 0),  // down
                GridCell::new(0, -1), // left
                GridCell::new(-1, 0), // up
            ]
        );
    }

    #[test]
    fn test_ring_cells_are_at_exact_radius() {
        let center = GridCell::new(2, -1);

        for radius in 1..5 {
            let cells = center.ring(radius);
            assert_eq!(cells.len(), 4 * radius as usize);
            for cell in cells {
                assert_eq!(center.manhattan_distance(cell), radius);
            }
        }
    }

    #[test]
    fn test_ring_has_no_duplicates() {
        let cells = GridCell::ORIGIN.ring(3);
        let unique: std::collections::HashSet<_> = cells.iter().copied().collect();

        assert_eq!(unique.len(), cells.len());
    }

    proptest! {
        #[test]
        fn prop_direction_is_antisymmetric(
            row_a in -20i32..20, col_a in -20i32..20,
            row_b in -20i32..20, col_b in -20i32..20,
        ) {
            let a = GridCell::new(row_a, col_a);
            let b = GridCell::new(row_b, col_b);

            match a.direction_to(b) {
                Some(direction) => {
                    prop_assert_eq!(b.direction_to(a), Some(direction.opposite()));
                }
                None => prop_assert_eq!(a, b),
            }
        }

        #[test]
        fn prop_manhattan_distance_is_symmetric(
            row_a in -20i32..20, col_a in -20i32..20,
            row_b in -20i32..20, col_b in -20i32..20,
        ) {
            let a = GridCell::new(row_a, col_a);
            let b = GridCell::new(row_b, col_b);

            prop_assert_eq!(a.manhattan_distance(b), b.manhattan_distance(a));
        }
    }
}
