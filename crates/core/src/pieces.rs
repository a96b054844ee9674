//! Pieces module - the tetromino catalog
//!
//! Templates are immutable statics. Every spawn gets its own deep copy through
//! [`piece_for`], so rotating the active piece never touches the catalog.

use crate::shape::Shape;
use crate::types::{GameError, PieceKind};

type Template = &'static [&'static [u8]];

const T_TEMPLATE: Template = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];
const I_TEMPLATE: Template = &[&[2, 2, 2, 2]];
const S_TEMPLATE: Template = &[&[0, 3, 3], &[3, 3, 0], &[0, 0, 0]];
const Z_TEMPLATE: Template = &[&[4, 4, 0], &[0, 4, 4], &[0, 0, 0]];
const J_TEMPLATE: Template = &[&[5, 0, 0], &[5, 5, 5], &[0, 0, 0]];
const L_TEMPLATE: Template = &[&[0, 0, 6], &[6, 6, 6], &[0, 0, 0]];
const O_TEMPLATE: Template = &[&[7, 7], &[7, 7]];

/// The immutable template rows for a piece kind
pub fn template(kind: PieceKind) -> Template {
    match kind {
        PieceKind::T => T_TEMPLATE,
        PieceKind::I => I_TEMPLATE,
        PieceKind::S => S_TEMPLATE,
        PieceKind::Z => Z_TEMPLATE,
        PieceKind::J => J_TEMPLATE,
        PieceKind::L => L_TEMPLATE,
        PieceKind::O => O_TEMPLATE,
    }
}

/// A fresh, independently owned shape for a piece kind
pub fn piece_for(kind: PieceKind) -> Shape {
    Shape::from_template(template(kind))
}

/// Look up a piece by its one-letter type
pub fn piece_for_letter(letter: char) -> Result<Shape, GameError> {
    PieceKind::from_letter(letter).map(piece_for)
}
