//! Board-scaled drawing surface over a framebuffer.
//!
//! One board cell maps to a `cell_w x cell_h` block of terminal cells starting at
//! `origin`. Rectangles are clipped to the board area.

use crate::core::DrawingSurface;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Glyph used for every filled block
pub const BLOCK_GLYPH: char = '█';

pub struct BoardCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin: (u16, u16),
    cell_w: u16,
    cell_h: u16,
}

impl<'a> BoardCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, origin: (u16, u16), cell_w: u16, cell_h: u16) -> Self {
        Self {
            fb,
            origin,
            cell_w,
            cell_h,
        }
    }
}

impl DrawingSurface for BoardCanvas<'_> {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(BOARD_WIDTH as i32);
        let y1 = (y + h as i32).min(BOARD_HEIGHT as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let style = CellStyle::solid(color);
        let ch = if color == Rgb::BLACK { ' ' } else { BLOCK_GLYPH };
        self.fb.fill_rect(
            self.origin.0 + x0 as u16 * self.cell_w,
            self.origin.1 + y0 as u16 * self.cell_h,
            (x1 - x0) as u16 * self.cell_w,
            (y1 - y0) as u16 * self.cell_h,
            ch,
            style,
        );
    }
}
