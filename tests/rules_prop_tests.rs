//! Property tests for collision, movement and sweep.

use blockfall::core::{collide, piece_for, Board, GameState, Player, Position};
use blockfall::types::{MoveDir, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH};
use proptest::prelude::*;

const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// A board whose cells are empty with probability `1 - density`.
fn board_strategy(density: f64) -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::bool::weighted(density), BOARD_CELLS).prop_map(|filled| {
        let mut board = Board::standard();
        for (i, f) in filled.into_iter().enumerate() {
            if f {
                let (x, y) = ((i % BOARD_WIDTH) as i32, (i / BOARD_WIDTH) as i32);
                board.set(x, y, (i % 7 + 1) as u8).unwrap();
            }
        }
        board
    })
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn player_for(kind: PieceKind, turns: usize, x: i32, y: i32) -> Player {
    let mut shape = piece_for(kind);
    for _ in 0..turns {
        shape.rotate(RotateDir::Clockwise);
    }
    Player::new(shape, Position::new(x, y))
}

/// Empty the board under the player's in-bounds cells.
fn clear_under(board: &mut Board, player: &Player) {
    for (x, y, _) in player.board_cells() {
        let _ = board.set(x, y, 0);
    }
}

/// Reference collision check written directly from the rule.
fn expected_collision(board: &Board, player: &Player) -> bool {
    player.shape.cells().any(|(sx, sy, _)| {
        let x = sx + player.pos.x;
        let y = sy + player.pos.y;
        let outside = x < 0 || x >= BOARD_WIDTH as i32 || y < 0 || y >= BOARD_HEIGHT as i32;
        outside || board.cells()[(y as usize) * BOARD_WIDTH + x as usize] != 0
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 20_000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn collide_matches_bounds_and_occupancy(
        board in board_strategy(0.3),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -5i32..15,
        y in -5i32..25,
    ) {
        let player = player_for(kind, turns, x, y);
        prop_assert_eq!(collide(&board, &player), expected_collision(&board, &player));
    }

    #[test]
    fn blocked_move_leaves_position_unchanged(
        board in board_strategy(0.25),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -1i32..10,
        y in 0i32..19,
        right in any::<bool>(),
    ) {
        let mut state = GameState::new(11);
        state.spawn(kind);
        let player = player_for(kind, turns, x, y);
        let mut board = board;
        clear_under(&mut board, &player);
        *state.board_mut() = board;
        *state.player_mut() = player;
        // only in-bounds starting positions remain colliding after the clear
        prop_assume!(!state.collides());

        let dir = if right { MoveDir::Right } else { MoveDir::Left };
        let shifted = player_for(kind, turns, x + dir.offset(), y);
        let blocked = collide(state.board(), &shifted);

        let moved = state.player_move(dir);

        prop_assert_eq!(moved, !blocked);
        let expected_x = if blocked { x } else { x + dir.offset() };
        prop_assert_eq!(state.player().pos, Position::new(expected_x, y));
    }

    #[test]
    fn rotation_never_leaves_piece_colliding(
        board in board_strategy(0.2),
        kind in kind_strategy(),
        x in -1i32..10,
        y in 0i32..19,
        clockwise in any::<bool>(),
    ) {
        let mut state = GameState::new(11);
        state.spawn(kind);
        let player = player_for(kind, 0, x, y);
        let mut board = board;
        clear_under(&mut board, &player);
        *state.board_mut() = board;
        *state.player_mut() = player;
        prop_assume!(!state.collides());

        let before = state.player().clone();
        let dir = if clockwise { RotateDir::Clockwise } else { RotateDir::CounterClockwise };
        let rotated = state.player_rotate(dir);

        prop_assert!(!state.collides());
        if !rotated {
            prop_assert_eq!(state.player(), &before);
        }
        prop_assert_eq!(state.player().pos.y, before.pos.y);
    }

    #[test]
    fn sweep_is_identity_without_full_rows(
        board in board_strategy(0.6),
        holes in prop::collection::vec(0usize..BOARD_WIDTH, BOARD_HEIGHT),
    ) {
        let mut state = GameState::new(11);
        *state.board_mut() = board;
        for (y, hole) in holes.into_iter().enumerate() {
            state.board_mut().set(hole as i32, y as i32, 0).unwrap();
        }
        let before = state.board().clone();

        prop_assert_eq!(state.sweep(), 0);
        prop_assert_eq!(state.board(), &before);
        prop_assert_eq!(state.score(), 0);
    }
}
