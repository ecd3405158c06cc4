//! Map generation - walls and floor decoration
//!
//! Walls: the count is drawn from `[0, budget)` where the budget is a share of
//! all cells. Each wall draws a column and a row and redraws both until the cell
//! is free. There is no retry cap; since the count is always below the cell
//! count a free cell exists, but placement slows down as the board saturates.
//!
//! Floor: every interior glyph independently has a small chance to become one of
//! the decoration glyphs. Purely cosmetic.

use std::collections::HashSet;

use tracing::debug;

use crate::assets::{DECORATIONS, FLOOR};
use crate::geometry::{BoardDims, Coord};
use crate::objects::Wall;
use crate::rng::RandomEngine;
use crate::types::{DECORATION_PERCENT, WALL_PERCENT};

/// `value * percent / 100` without intermediate overflow.
pub fn percent_of(value: usize, percent: usize) -> usize {
    (value / 100) * percent + (value % 100) * percent / 100
}

/// A generated board: wall list plus the decorated floor plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMap {
    dims: BoardDims,
    walls: Vec<Wall>,
    /// Same cells as `walls`, for lookups.
    wall_cells: HashSet<Coord>,
    floor: Vec<u8>,
}

impl BoardMap {
    /// Board size in cells.
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    /// Walls in placement order.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Interior glyphs, row-major, `board_width * board_height` long.
    pub fn floor(&self) -> &[u8] {
        &self.floor
    }

    /// Whether a wall occupies `coord`.
    pub fn is_wall(&self, coord: Coord) -> bool {
        self.wall_cells.contains(&coord)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapGenerator {
    wall_percent: usize,
    decoration_percent: usize,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new(WALL_PERCENT, DECORATION_PERCENT)
    }
}

impl MapGenerator {
    /// Both percentages are shares of the cell count, at most 100.
    pub fn new(wall_percent: usize, decoration_percent: usize) -> Self {
        debug_assert!(wall_percent <= 100 && decoration_percent <= 100);
        Self {
            wall_percent,
            decoration_percent,
        }
    }

    /// Exclusive upper bound for the number of walls on `dims`.
    pub fn wall_budget(&self, dims: BoardDims) -> usize {
        percent_of(dims.total_cells(), self.wall_percent)
    }

    /// Walls first, then the floor, both drawn from `rng`.
    pub fn generate(&self, dims: BoardDims, rng: &mut RandomEngine) -> BoardMap {
        let (walls, wall_cells) = self.place_wall_set(dims, rng);
        let floor = self.decorate_floor(dims, rng);
        debug!(
            columns = dims.columns,
            rows = dims.rows,
            walls = walls.len(),
            "map generated"
        );
        BoardMap {
            dims,
            walls,
            wall_cells,
            floor,
        }
    }

    /// Draw the wall count, then one free cell per wall.
    ///
    /// A zero budget returns no walls without touching `rng`.
    pub fn place_walls(&self, dims: BoardDims, rng: &mut RandomEngine) -> Vec<Wall> {
        self.place_wall_set(dims, rng).0
    }

    fn place_wall_set(
        &self,
        dims: BoardDims,
        rng: &mut RandomEngine,
    ) -> (Vec<Wall>, HashSet<Coord>) {
        let budget = self.wall_budget(dims);
        if budget == 0 {
            return (Vec::new(), HashSet::new());
        }

        let count = rng.next_range(budget);
        debug_assert!(count < dims.total_cells());

        let mut walls = Vec::with_capacity(count);
        let mut taken = HashSet::with_capacity(count);
        for _ in 0..count {
            let coord = loop {
                let column = rng.next_range(dims.columns);
                let row = rng.next_range(dims.rows);
                let candidate = dims.coord(row, column);
                if taken.insert(candidate) {
                    break candidate;
                }
            };
            walls.push(Wall::new(coord));
        }
        (walls, taken)
    }

    /// One glyph per interior position: a decoration with the configured
    /// chance, the plain floor otherwise.
    pub fn decorate_floor(&self, dims: BoardDims, rng: &mut RandomEngine) -> Vec<u8> {
        let total = dims.total_cells();
        let threshold = percent_of(total, self.decoration_percent);
        let len = dims.board_width() * dims.board_height();

        (0..len)
            .map(|_| {
                if rng.next_range(total) < threshold {
                    DECORATIONS[rng.next_range(DECORATIONS.len())]
                } else {
                    FLOOR
                }
            })
            .collect()
    }
}
