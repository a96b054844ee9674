//! Terminal rendering for the game.
//!
//! The board is painted through the core's drawing-surface contract into a framebuffer
//! of styled character cells, which is then flushed to the terminal with `crossterm`.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`canvas`]: board-scaled [`DrawingSurface`](crate::core::DrawingSurface) over a framebuffer
//! - [`game_view`]: board frame plus score panel layout
//! - [`renderer`]: raw-mode terminal output with diffed redraws

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::BoardCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
