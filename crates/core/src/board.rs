//! Board module - manages the game grid
//!
//! The board is a grid of settled color indices: 0 is empty, 1..=7 is a block left by
//! the piece with that color index. Storage is a flat row-major vector so rows can be
//! shifted with `copy_within` instead of reallocating.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::types::{GameError, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<u8>,
}

impl Board {
    /// Create a board of the given size with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// The fixed 10x20 playfield
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Build a board from explicit rows (fixtures and tests).
    ///
    /// Every row must have the same length.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(GameError::MalformedBoard("rows differ in length"));
        }
        let cells = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> Result<(), GameError> {
        let idx = self
            .index(x, y)
            .ok_or(GameError::CellOutOfBounds { x, y })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// True when (x, y) is inside the grid and empty
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(0)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| !row.is_empty() && row.iter().all(|&cell| cell != 0))
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Remove row `y`, shift every row above it down by one and put a fresh empty row on top.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height {
            return;
        }

        let width = self.width;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(0);
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a removal the same index is examined again, since the row above has just
    /// moved into it. Non-adjacent full rows are therefore all cleared in one pass.
    /// Returns the number of rows removed.
    pub fn sweep(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// True when no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
