//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::BoardCanvas;
use crate::core::{draw_snapshot, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal layout of the board plus a score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    /// Score shown in the side panel. Only changes when the game publishes a new one.
    score: u32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

const KEY_HELP: [&str; 6] = [
    "← →  move",
    "↑    rotate",
    "z    rotate ccw",
    "↓    drop",
    "spc  hard drop",
    "q    quit",
];

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            score: 0,
        }
    }

    /// Update the displayed score from a published score event.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Top-left corner of the board frame (border included) inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Board size in terminal cells, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (start_x, start_y) = self.frame_origin(viewport);
        let (frame_w, frame_h) = self.frame_size();

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        {
            let mut canvas =
                BoardCanvas::new(fb, (start_x + 1, start_y + 1), self.cell_w, self.cell_h);
            draw_snapshot(snap, &mut canvas);
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_u32(panel_x, start_y.saturating_add(1), self.score, value);

        let help_y = start_y.saturating_add(3);
        for (i, line) in KEY_HELP.iter().enumerate() {
            fb.put_str(panel_x, help_y.saturating_add(i as u16), line, value);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.set(x, y, style.into_cell('┌'));
    fb.set(x + w - 1, y, style.into_cell('┐'));
    fb.set(x, y + h - 1, style.into_cell('└'));
    fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.into_cell('─'));
        fb.set(x + dx, y + h - 1, style.into_cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.into_cell('│'));
        fb.set(x + w - 1, y + dy, style.into_cell('│'));
    }
}
