//! Active piece state

use crate::pieces::piece_for;
use crate::shape::Shape;
use crate::types::PieceKind;

/// Board offset of a shape's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The falling piece together with the running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub shape: Shape,
    pub pos: Position,
    pub score: u32,
}

impl Player {
    pub fn new(shape: Shape, pos: Position) -> Self {
        Self {
            shape,
            pos,
            score: 0,
        }
    }

    /// Occupied cells in board coordinates as `(x, y, value)`
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape
            .cells()
            .map(|(x, y, v)| (x + self.pos.x, y + self.pos.y, v))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(piece_for(PieceKind::T), Position::default())
    }
}
