//! GameView rendering tests

use blockfall::core::{GameSnapshot, GameState};
use blockfall::term::canvas::BLOCK_GLYPH;
use blockfall::term::{GameView, Viewport};
use blockfall::types::{color_for, GameAction, PieceKind, Rgb, BOARD_WIDTH};

fn find_row(fb: &blockfall::term::FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

fn digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[test]
fn renders_border_and_score_panel() {
    let mut view = GameView::default();
    view.set_score(1230);

    let fb = view.render(&GameSnapshot::default(), Viewport::new(80, 24));

    let (x0, y0) = view.frame_origin(Viewport::new(80, 24));
    assert_eq!(fb.get(x0, y0).map(|c| c.ch), Some('┌'));

    let score_row = find_row(&fb, "SCORE").expect("score label");
    assert!(fb.row_text(score_row + 1).contains("1230"));
}

#[test]
fn settled_cells_use_the_color_table() {
    let mut state = GameState::new(12345);
    state.spawn(PieceKind::O);
    state.apply_action(GameAction::HardDrop);

    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let fb = view.render(&state.snapshot(), viewport);

    let (x0, y0) = view.frame_origin(viewport);
    // board cell (4, 19) -> two terminal columns inside the border
    let px = x0 + 1 + 4 * 2;
    let py = y0 + 1 + 19;
    for x in [px, px + 1] {
        let cell = fb.get(x, py).unwrap();
        assert_eq!(cell.ch, BLOCK_GLYPH);
        assert_eq!(cell.style.bg, color_for(7).unwrap());
    }

    // an empty board cell is painted black
    let empty = fb.get(x0 + 1, py).unwrap();
    assert_eq!(empty.ch, ' ');
    assert_eq!(empty.style.bg, Rgb::BLACK);
}

#[test]
fn active_piece_is_drawn_over_the_board() {
    let mut state = GameState::new(1);
    state.spawn(PieceKind::I);

    let view = GameView::default();
    let viewport = Viewport::new(60, 30);
    let fb = view.render(&state.snapshot(), viewport);

    let (x0, y0) = view.frame_origin(viewport);
    let row: Vec<char> = (0..BOARD_WIDTH as u16 * 2)
        .map(|dx| fb.get(x0 + 1 + dx, y0 + 1).unwrap().ch)
        .collect();
    let filled = row.iter().filter(|&&c| c == BLOCK_GLYPH).count();
    assert_eq!(filled, 8);
    assert_eq!(row[6], BLOCK_GLYPH);
    assert_eq!(row[5], ' ');
}

#[test]
fn score_panel_follows_published_events() {
    let mut state = GameState::new(12345);
    state.spawn(PieceKind::I);
    for x in 0..BOARD_WIDTH as i32 {
        if !(3..7).contains(&x) {
            state.board_mut().set(x, 19, 1).unwrap();
        }
    }

    let mut view = GameView::default();
    let viewport = Viewport::new(80, 24);
    if let Some(score) = state.take_score_event() {
        view.set_score(score);
    }
    state.apply_action(GameAction::HardDrop);

    // not shown until the event is taken
    let fb = view.render(&state.snapshot(), viewport);
    let score_row = find_row(&fb, "SCORE").expect("score label");
    assert_eq!(digits(&fb.row_text(score_row + 1)), "0");

    if let Some(score) = state.take_score_event() {
        view.set_score(score);
    }
    let fb = view.render(&state.snapshot(), viewport);
    assert_eq!(digits(&fb.row_text(score_row + 1)), "10");
}

#[test]
fn tiny_viewport_does_not_panic() {
    let view = GameView::default();
    let fb = view.render(&GameSnapshot::default(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
