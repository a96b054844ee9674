//! Drawing-surface contract
//!
//! The core paints through a single fill-rectangle primitive in board-cell units
//! (one cell = one unit). It never reads pixels back. Cell value 0 is never painted.

use crate::board::Board;
use crate::player::Player;
use crate::snapshot::GameSnapshot;
use crate::types::{color_for, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Anything that can fill axis-aligned rectangles with a solid color
pub trait DrawingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb);
}

/// Paint a frame: black background, settled cells, then the active piece.
pub fn draw<S: DrawingSurface>(board: &Board, player: &Player, surface: &mut S) {
    surface.fill_rect(0, 0, board.width() as u32, board.height() as u32, Rgb::BLACK);
    for (y, row) in board.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            paint_cell(surface, x as i32, y as i32, value);
        }
    }
    for (x, y, value) in player.board_cells() {
        paint_cell(surface, x, y, value);
    }
}

/// Same as [`draw`], from a snapshot
pub fn draw_snapshot<S: DrawingSurface>(snap: &GameSnapshot, surface: &mut S) {
    surface.fill_rect(0, 0, BOARD_WIDTH as u32, BOARD_HEIGHT as u32, Rgb::BLACK);
    for (y, row) in snap.board.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            paint_cell(surface, x as i32, y as i32, value);
        }
    }
    for (x, y, value) in snap.active_board_cells() {
        paint_cell(surface, x, y, value);
    }
}

fn paint_cell<S: DrawingSurface>(surface: &mut S, x: i32, y: i32, value: u8) {
    if let Some(color) = color_for(value) {
        surface.fill_rect(x, y, 1, 1, color);
    }
}
