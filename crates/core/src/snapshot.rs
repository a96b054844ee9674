//! Plain-data copy of the game state for renderers

use arrayvec::ArrayVec;

use crate::player::Position;
use crate::shape::ShapeCell;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_SHAPE_DIM};

pub type BoardGrid = [[u8; BOARD_WIDTH]; BOARD_HEIGHT];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    /// Occupied cells of the active shape, relative to `pos`
    pub active: ArrayVec<ShapeCell, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>,
    pub pos: Position,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH]; BOARD_HEIGHT];
        self.active.clear();
        self.pos = Position::default();
    }

    /// Active cells in board coordinates as `(x, y, value)`
    pub fn active_board_cells(&self) -> impl Iterator<Item = ShapeCell> + '_ {
        self.active
            .iter()
            .map(|&(x, y, v)| (x + self.pos.x, y + self.pos.y, v))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH]; BOARD_HEIGHT],
            active: ArrayVec::new(),
            pos: Position::default(),
        }
    }
}
