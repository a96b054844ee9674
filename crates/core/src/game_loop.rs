//! Fixed-interval gravity driver
//!
//! The host calls [`GameLoop::frame`] once per animation frame with a monotonic
//! timestamp. The loop turns timestamps into deltas and feeds them to the gravity timer;
//! redrawing and scheduling the next frame stay with the host.

use crate::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameLoop {
    last_time_ms: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now_ms` instead of zero
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            last_time_ms: now_ms,
        }
    }

    pub fn last_time_ms(&self) -> u64 {
        self.last_time_ms
    }

    /// Advance the game to `now_ms`. Returns true if gravity dropped the piece.
    ///
    /// A timestamp earlier than the previous one counts as zero elapsed time.
    pub fn frame(&mut self, now_ms: u64, state: &mut GameState) -> bool {
        let delta = now_ms.saturating_sub(self.last_time_ms);
        self.last_time_ms = now_ms.max(self.last_time_ms);
        state.tick(u32::try_from(delta).unwrap_or(u32::MAX))
    }
}
