//! Geometry module - board dimensions and packed coordinates
//!
//! Every placed entity stores its position as a single integer,
//! `row * columns + column`. Reading an axis is a pure div/mod by the column
//! count; replacing one axis keeps the other untouched.
//!
//! Board positions are cells. Each cell occupies an S×S block of glyphs on the
//! screen, where S is [`cell_size`].

use crate::assets::CELL_SIZE;

/// Side length, in glyphs, of the square block every board cell occupies.
///
/// This is the largest height or width over every known asset. It is evaluated
/// at compile time from the asset table, so repeated calls are free.
#[inline(always)]
pub const fn cell_size() -> usize {
    CELL_SIZE
}

/// Packed board coordinate: `row * columns + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord(usize);

impl Coord {
    /// Pack a (row, column) pair.
    pub fn new(columns: usize, row: usize, column: usize) -> Self {
        debug_assert!(column < columns, "column {column} out of range 0..{columns}");
        Self(row * columns + column)
    }

    /// Wrap an already packed index.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// The packed index, usable as a row-major cell index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Row on a board `columns` cells wide.
    #[inline(always)]
    pub fn row(self, columns: usize) -> usize {
        self.0 / columns
    }

    /// Column on a board `columns` cells wide.
    #[inline(always)]
    pub fn column(self, columns: usize) -> usize {
        self.0 % columns
    }

    /// Replace the row, keeping the column. No bounds checking.
    pub fn with_row(self, columns: usize, row: usize) -> Self {
        Self(self.column(columns) + columns * row)
    }

    /// Replace the column, keeping the row. No bounds checking.
    pub fn with_column(self, columns: usize, column: usize) -> Self {
        Self(column + columns * self.row(columns))
    }
}

/// Board size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardDims {
    pub columns: usize,
    pub rows: usize,
}

impl BoardDims {
    /// Returns `None` for an empty board or when the cell or glyph count
    /// overflows `usize`.
    pub fn new(columns: usize, rows: usize) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }
        columns.checked_mul(rows)?;
        let board_w = columns.checked_mul(cell_size())?;
        let board_h = rows.checked_mul(cell_size())?;
        board_w.checked_mul(board_h)?;
        Some(Self { columns, rows })
    }

    /// Number of cells, `columns * rows`.
    pub fn total_cells(&self) -> usize {
        self.columns * self.rows
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.index() < self.total_cells()
    }

    /// Pack `(row, column)` for this board.
    pub fn coord(&self, row: usize, column: usize) -> Coord {
        debug_assert!(row < self.rows, "row {row} out of range 0..{}", self.rows);
        Coord::new(self.columns, row, column)
    }

    pub fn row_of(&self, coord: Coord) -> usize {
        coord.row(self.columns)
    }

    pub fn column_of(&self, coord: Coord) -> usize {
        coord.column(self.columns)
    }

    /// Interior width in glyphs.
    pub fn board_width(&self) -> usize {
        self.columns * cell_size()
    }

    /// Interior height in glyphs.
    pub fn board_height(&self) -> usize {
        self.rows * cell_size()
    }

    /// Top-left glyph position of a cell's S×S block.
    pub fn glyph_origin(&self, coord: Coord) -> (usize, usize) {
        let s = cell_size();
        (self.column_of(coord) * s, self.row_of(coord) * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_and_unpack() {
        let c = Coord::new(7, 3, 5);
        assert_eq!(c.index(), 26);
        assert_eq!(c.row(7), 3);
        assert_eq!(c.column(7), 5);
    }

    #[test]
    fn test_with_row_preserves_column() {
        let columns = 9;
        for index in 0..(columns * 6) {
            let c = Coord::from_index(index);
            for r in 0..6 {
                let moved = c.with_row(columns, r);
                assert_eq!(moved.row(columns), r);
                assert_eq!(moved.column(columns), c.column(columns));
            }
        }
    }

    #[test]
    fn test_with_column_preserves_row() {
        let columns = 4;
        for index in 0..(columns * 5) {
            let c = Coord::from_index(index);
            for col in 0..columns {
                let moved = c.with_column(columns, col);
                assert_eq!(moved.column(columns), col);
                assert_eq!(moved.row(columns), c.row(columns));
            }
        }
    }

    #[test]
    fn test_dims_reject_empty_and_overflow() {
        assert!(BoardDims::new(0, 3).is_none());
        assert!(BoardDims::new(3, 0).is_none());
        assert!(BoardDims::new(usize::MAX, 2).is_none());
        // Cell count fits, glyph count does not.
        assert!(BoardDims::new(usize::MAX / 2, 1).is_none());
        assert_eq!(BoardDims::new(4, 3).unwrap().total_cells(), 12);
    }

    #[test]
    fn test_glyph_origin_scales_by_cell_size() {
        let dims = BoardDims::new(4, 3).unwrap();
        let s = cell_size();
        assert_eq!(dims.glyph_origin(dims.coord(2, 3)), (3 * s, 2 * s));
        assert_eq!(dims.board_width(), 4 * s);
        assert_eq!(dims.board_height(), 3 * s);
        assert!(dims.contains(dims.coord(2, 3)));
        assert!(!dims.contains(Coord::from_index(12)));
    }
}
