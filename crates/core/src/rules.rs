//! Collision and merge rules
//!
//! Both functions are pure with respect to the player: `collide` reads only, `merge`
//! writes the player's cells into the board.

use crate::board::Board;
use crate::player::Player;

/// True if any occupied cell of the player's shape lies outside the board or on a
/// settled block.
pub fn collide(board: &Board, player: &Player) -> bool {
    player
        .board_cells()
        .any(|(x, y, _)| !board.is_free(x, y))
}

/// Copy the player's occupied cells into the board at its current offset.
///
/// Cells outside the grid are skipped; the lock path only merges collision-free
/// positions, so none are expected.
pub fn merge(board: &mut Board, player: &Player) {
    for (x, y, value) in player.board_cells() {
        if board.set(x, y, value).is_err() {
            log::warn!("merge skipped out-of-bounds cell ({x}, {y})");
        }
    }
}
