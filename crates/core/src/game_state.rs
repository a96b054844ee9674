//! Game state module - owns the board, the active piece and the gravity timer
//!
//! All rules run here as plain method calls: movement, rotation with the simple
//! horizontal wall-kick search, soft and hard drop, line sweep and spawning. Failures that
//! are part of normal play (a blocked move, a rotation with no free offset, a board that
//! overflows at spawn) are absorbed silently; nothing here panics or returns an error.

use crate::board::Board;
use crate::pieces::piece_for;
use crate::player::{Player, Position};
use crate::rng::PieceRandomizer;
use crate::rules::{collide, merge};
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameAction, MoveDir, PieceKind, RotateDir, DROP_INTERVAL_MS, LINE_CLEAR_POINTS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Player,
    randomizer: PieceRandomizer,
    /// Milliseconds accumulated since the last drop
    drop_counter_ms: u32,
    /// Latest score not yet read by the score display
    score_event: Option<u32>,
    /// Number of silent restarts caused by a blocked spawn
    games_restarted: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_randomizer(PieceRandomizer::new(seed))
    }

    pub fn with_randomizer(randomizer: PieceRandomizer) -> Self {
        let mut state = Self {
            board: Board::standard(),
            player: Player::default(),
            randomizer,
            drop_counter_ms: 0,
            score_event: Some(0),
            games_restarted: 0,
        };
        state.player_reset();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn games_restarted(&self) -> u32 {
        self.games_restarted
    }

    /// Take the score published by the last sweep or restart, if any.
    ///
    /// The value is cleared on read, so a display refreshes only when it changed hands.
    pub fn take_score_event(&mut self) -> Option<u32> {
        self.score_event.take()
    }

    pub fn collides(&self) -> bool {
        collide(&self.board, &self.player)
    }

    /// Shift the piece one column. Returns false (and leaves the piece in place) if the
    /// shifted position collides.
    pub fn player_move(&mut self, dir: MoveDir) -> bool {
        let dx = dir.offset();
        self.player.pos.x += dx;
        if self.collides() {
            self.player.pos.x -= dx;
            return false;
        }
        true
    }

    /// Rotate the piece, then search horizontal offsets +1, -2, +3, -4, ... for a free
    /// position. Once the next offset exceeds the shape width the rotation is undone and
    /// the column restored. Returns whether the rotation stuck.
    pub fn player_rotate(&mut self, dir: RotateDir) -> bool {
        let original_x = self.player.pos.x;
        let mut offset: i32 = 1;
        self.player.shape.rotate(dir);
        while self.collides() {
            self.player.pos.x += offset;
            offset = -(offset + offset.signum());
            if offset > self.player.shape.width() as i32 {
                self.player.shape.rotate(dir.reverse());
                self.player.pos.x = original_x;
                return false;
            }
        }
        true
    }

    /// Move the piece down one row. If that collides, lock it: merge into the board,
    /// sweep full rows and spawn the next piece.
    ///
    /// The gravity timer is zeroed either way. Returns true when the piece locked.
    pub fn player_drop(&mut self) -> bool {
        self.player.pos.y += 1;
        let locked = if self.collides() {
            self.player.pos.y -= 1;
            self.lock_piece();
            true
        } else {
            false
        };
        self.drop_counter_ms = 0;
        locked
    }

    /// Drop the piece to the lowest free row, then lock it through [`Self::player_drop`].
    pub fn hard_drop(&mut self) {
        while !self.collides() {
            self.player.pos.y += 1;
        }
        self.player.pos.y -= 1;
        self.player_drop();
    }

    fn lock_piece(&mut self) {
        merge(&mut self.board, &self.player);
        log::debug!(
            "locked piece {} at ({}, {})",
            self.player.shape.color_index(),
            self.player.pos.x,
            self.player.pos.y
        );
        self.sweep();
        self.player_reset();
    }

    /// Clear every full row, awarding a flat 10 points per row. Returns rows cleared.
    pub fn sweep(&mut self) -> u32 {
        let cleared = self.board.sweep();
        if cleared > 0 {
            self.player.score += cleared * LINE_CLEAR_POINTS;
            log::debug!("cleared {cleared} rows, score {}", self.player.score);
        }
        self.score_event = Some(self.player.score);
        cleared
    }

    /// Spawn a uniformly random piece
    pub fn player_reset(&mut self) {
        let kind = self.randomizer.next_kind();
        self.spawn(kind);
    }

    /// Spawn `kind` centered on the top row.
    ///
    /// A blocked spawn means the stack reached the top: the board is wiped, the score
    /// returns to zero and play continues with the piece already in place.
    pub fn spawn(&mut self, kind: PieceKind) {
        self.player.shape = piece_for(kind);
        let width = self.board.width() as i32;
        self.player.pos = Position::new(width / 2 - self.player.shape.width() as i32 / 2, 0);

        if self.collides() {
            log::info!(
                "spawn blocked, restarting with empty board (final score {})",
                self.player.score
            );
            self.board.clear();
            self.player.score = 0;
            self.score_event = Some(0);
            self.games_restarted = self.games_restarted.wrapping_add(1);
        }
    }

    /// Advance the gravity timer. A drop fires once the accumulated time is strictly
    /// greater than the drop interval. Returns true if a drop fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > DROP_INTERVAL_MS {
            self.player_drop();
            return true;
        }
        false
    }

    /// Apply an input action. Returns false only when a move or rotation was refused.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.player_move(MoveDir::Left),
            GameAction::MoveRight => self.player_move(MoveDir::Right),
            GameAction::SoftDrop => {
                self.player_drop();
                true
            }
            GameAction::RotateCw => self.player_rotate(RotateDir::Clockwise),
            GameAction::RotateCcw => self.player_rotate(RotateDir::CounterClockwise),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            let n = dst.len().min(src.len());
            dst[..n].copy_from_slice(&src[..n]);
        }
        for cell in self.player.shape.cells() {
            if out.active.try_push(cell).is_err() {
                break;
            }
        }
        out.pos = self.player.pos;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
