//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no input
//! device, no clock. Hosts feed it key actions and frame timestamps and paint it through
//! the [`render::DrawingSurface`] trait.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled color indices, row clearing
//! - [`shape`]: rectangular piece matrices and quarter-turn rotation
//! - [`pieces`]: the seven tetromino templates
//! - [`player`]: the falling piece, its offset and the score
//! - [`rules`]: collision test and merge
//! - [`rng`]: uniform random piece selection
//! - [`game_state`]: movement, wall-kick rotation, drops, sweep, spawn
//! - [`game_loop`]: timestamp-driven gravity
//! - [`render`]: the drawing-surface contract
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row, chosen uniformly at random
//! - Gravity drops the piece one row every second
//! - A rotation that collides tries horizontal offsets +1, -2, +3, ... before giving up
//! - Each cleared row is worth 10 points
//! - When a new piece cannot spawn, the board and score reset and play continues
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(PieceKind::O);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().get(4, 19), Some(7));
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_loop;
pub mod game_state;
pub mod pieces;
pub mod player;
pub mod render;
pub mod rng;
pub mod rules;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use game_loop::GameLoop;
pub use game_state::GameState;
pub use pieces::{piece_for, piece_for_letter};
pub use player::{Player, Position};
pub use render::{draw, draw_snapshot, DrawingSurface};
pub use rng::PieceRandomizer;
pub use rules::{collide, merge};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
