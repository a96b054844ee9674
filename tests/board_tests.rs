//! Board and sweep tests

use blockfall::core::{Board, GameState};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, LINE_CLEAR_POINTS};

fn fill_row(board: &mut Board, y: i32, value: u8) {
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, y, value).unwrap();
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::standard();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().count(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(0), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn test_create_board_any_size() {
    let board = Board::new(4, 3);
    assert_eq!(board.cells(), &[0; 12]);
    assert!(board.rows().all(|row| row.len() == 4));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::standard();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::standard();
    board.set(5, 10, 1).unwrap();
    assert_eq!(board.get(5, 10), Some(1));
    assert!(!board.is_free(5, 10));

    board.set(5, 10, 0).unwrap();
    assert!(board.is_free(5, 10));
    assert!(!board.is_free(-1, 10));
}

#[test]
fn test_sweep_without_full_rows_changes_nothing() {
    let mut state = GameState::new(1);
    for y in 10..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 - 1 {
            state.board_mut().set(x, y, ((x + y) % 7 + 1) as u8).unwrap();
        }
    }
    let before = state.board().clone();

    assert_eq!(state.sweep(), 0);
    assert_eq!(state.sweep(), 0);
    assert_eq!(state.board(), &before);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_sweep_single_bottom_row() {
    let mut state = GameState::new(1);
    fill_row(state.board_mut(), 19, 3);

    assert_eq!(state.sweep(), 1);
    assert!(state.board().is_empty());
    assert_eq!(state.board().row(0), Some(&[0u8; BOARD_WIDTH][..]));
    assert_eq!(state.score(), LINE_CLEAR_POINTS);
}

#[test]
fn test_sweep_non_adjacent_rows_in_one_call() {
    let mut state = GameState::new(1);
    fill_row(state.board_mut(), 17, 2);
    state.board_mut().set(0, 18, 5).unwrap();
    fill_row(state.board_mut(), 19, 4);

    assert_eq!(state.sweep(), 2);
    assert_eq!(state.score(), 2 * LINE_CLEAR_POINTS);

    // The partial row settles to the bottom; everything else is empty.
    assert_eq!(state.board().get(0, 19), Some(5));
    let filled = state.board().cells().iter().filter(|&&c| c != 0).count();
    assert_eq!(filled, 1);
}

#[test]
fn test_sweep_keeps_row_count() {
    let mut board = Board::standard();
    for y in 0..BOARD_HEIGHT as i32 {
        fill_row(&mut board, y, 1);
    }
    assert_eq!(board.sweep(), BOARD_HEIGHT as u32);
    assert!(board.is_empty());
    assert_eq!(board.rows().count(), BOARD_HEIGHT);
}

#[test]
fn test_score_accumulates_across_sweeps() {
    let mut state = GameState::new(1);
    fill_row(state.board_mut(), 19, 1);
    state.sweep();
    fill_row(state.board_mut(), 19, 1);
    fill_row(state.board_mut(), 18, 1);
    state.sweep();
    assert_eq!(state.score(), 3 * LINE_CLEAR_POINTS);
}
