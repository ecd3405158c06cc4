//! Frame buffer - one contiguous text surface per frame
//!
//! Layout (S = cell size, W = `columns * S`, H = `rows * S`):
//!
//! ```text
//! / W x '-' \ \r\n
//! | W floor  | \r\n      (H times)
//! \ W x '_' / \r\n
//! ```
//!
//! The byte count is known before allocation and never changes afterwards, so
//! glyph positions are a fixed affine function of the interior coordinates.

use anyhow::{anyhow, Result};

use crate::core::assets::{
    BORDER_BOTTOM, BORDER_LEFT, BORDER_RIGHT, BORDER_TOP, CORNERS, FLOOR, LINE_BREAK,
};
use crate::core::BoardDims;

/// Bytes before the first interior glyph, not counting the top border run:
/// two corners, the line break, and the left border of the first interior row.
const LEAD: usize = 2 + LINE_BREAK.len() + 1;

/// Bytes between the end of one interior row and the start of the next:
/// right border, line break, left border.
const ROW_OVERHEAD: usize = 1 + LINE_BREAK.len() + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    dims: BoardDims,
    cell_size: usize,
    bytes: Vec<u8>,
    /// Copy of the last formatted frame, used to erase dynamic layers.
    pristine: Vec<u8>,
}

impl FrameBuffer {
    /// Exact byte count of a formatted frame, or `None` on overflow.
    ///
    /// line breaks + top/bottom borders (with corners) + left/right borders
    /// (with corners) + board glyphs. The corners counted twice make up for the
    /// two border-row line breaks not counted in the first term.
    pub fn capacity(dims: BoardDims, cell_size: usize) -> Option<usize> {
        let board_w = dims.columns.checked_mul(cell_size)?;
        let board_h = dims.rows.checked_mul(cell_size)?;

        let line_breaks = board_h.checked_mul(2)?;
        let horizontal = board_w.checked_add(2)?.checked_mul(2)?;
        let vertical = board_h.checked_add(2)?.checked_mul(2)?;
        let board = board_w.checked_mul(board_h)?;

        line_breaks
            .checked_add(horizontal)?
            .checked_add(vertical)?
            .checked_add(board)
    }

    /// Allocate a zeroed buffer of exactly [`FrameBuffer::capacity`] bytes.
    pub fn allocate(dims: BoardDims, cell_size: usize) -> Result<Self> {
        let capacity = Self::capacity(dims, cell_size).ok_or_else(|| {
            anyhow!(
                "a {}x{} board does not fit in memory",
                dims.columns,
                dims.rows
            )
        })?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(capacity)
            .map_err(|e| anyhow!("unable to allocate {capacity} byte frame: {e}"))?;
        bytes.resize(capacity, 0);

        let mut pristine = Vec::new();
        pristine
            .try_reserve_exact(capacity)
            .map_err(|e| anyhow!("unable to allocate {capacity} byte frame: {e}"))?;

        Ok(Self {
            dims,
            cell_size,
            bytes,
            pristine,
        })
    }

    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Interior width in glyphs.
    pub fn board_width(&self) -> usize {
        self.dims.columns * self.cell_size
    }

    /// Interior height in glyphs.
    pub fn board_height(&self) -> usize {
        self.dims.rows * self.cell_size
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_formatted(&self) -> bool {
        !self.pristine.is_empty()
    }

    /// Write borders, line breaks and the interior floor in one pass.
    ///
    /// `floor` holds the interior glyphs row-major; missing entries fall back
    /// to the plain floor glyph.
    pub fn format(&mut self, floor: &[u8]) {
        let board_w = self.board_width();
        let board_h = self.board_height();
        debug_assert_eq!(floor.len(), board_w * board_h);

        let capacity = self.bytes.len();
        let out = &mut self.bytes;
        out.clear();

        out.push(CORNERS[0]);
        out.extend(std::iter::repeat(BORDER_TOP).take(board_w));
        out.push(CORNERS[1]);
        out.extend_from_slice(LINE_BREAK);

        for y in 0..board_h {
            out.push(BORDER_LEFT);
            for x in 0..board_w {
                out.push(floor.get(y * board_w + x).copied().unwrap_or(FLOOR));
            }
            out.push(BORDER_RIGHT);
            out.extend_from_slice(LINE_BREAK);
        }

        out.push(CORNERS[2]);
        out.extend(std::iter::repeat(BORDER_BOTTOM).take(board_w));
        out.push(CORNERS[3]);
        out.extend_from_slice(LINE_BREAK);

        debug_assert_eq!(out.len(), capacity);

        self.pristine.clear();
        self.pristine.extend_from_slice(&self.bytes);
    }

    /// Buffer offset of interior glyph `(x, y)`.
    #[inline(always)]
    pub fn offset(&self, x: usize, y: usize) -> usize {
        let board_w = self.board_width();
        debug_assert!(x < board_w && y < self.board_height());
        board_w + x + LEAD + y * board_w + y * ROW_OVERHEAD
    }

    pub fn interior_glyph(&self, x: usize, y: usize) -> u8 {
        self.bytes[self.offset(x, y)]
    }

    pub fn interior_glyph_mut(&mut self, x: usize, y: usize) -> &mut u8 {
        let i = self.offset(x, y);
        &mut self.bytes[i]
    }

    /// Copy a `w`×`h` glyph block back from the last formatted frame.
    pub fn restore(&mut self, x: usize, y: usize, w: usize, h: usize) {
        if !self.is_formatted() {
            return;
        }
        for dy in 0..h {
            let start = self.offset(x, y + dy);
            self.bytes[start..start + w].copy_from_slice(&self.pristine[start..start + w]);
        }
    }
}
