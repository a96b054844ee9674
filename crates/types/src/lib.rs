//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the game. Everything here is
//! plain data with no external dependencies, so it can be used by the rules engine, the
//! terminal renderer and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The playfield is fixed for the lifetime of the process:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Gravity interval, constant for the whole game |
//! | `FRAME_MS` | 16 | Host frame cadence (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_letter('o').unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.color_index(), 7);
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Gravity interval in milliseconds. A drop fires once the accumulated time exceeds it.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Flat score awarded per cleared row (no multi-line bonus)
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Largest piece matrix side length accepted by the shape validator
pub const MAX_SHAPE_DIM: usize = 4;


/// The seven tetromino piece kinds, in catalog order
///
/// The catalog index doubles as the color index stored in board cells:
/// T=1, I=2, S=3, Z=4, J=5, L=6, O=7. Zero is reserved for empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    I,
    S,
    Z,
    J,
    L,
    O,
}

impl PieceKind {
    /// Every kind, ordered by color index
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
    ];

    /// Color/catalog index in 1..=7
    pub fn color_index(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::I => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
            PieceKind::O => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`]. Returns None for 0 and anything above 7.
    pub fn from_color_index(index: u8) -> Option<Self> {
        match index {
            1..=7 => Some(Self::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a one-letter piece type (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{GameError, PieceKind};
    ///
    /// assert_eq!(PieceKind::from_letter('t'), Ok(PieceKind::T));
    /// assert_eq!(PieceKind::from_letter('I'), Ok(PieceKind::I));
    /// assert_eq!(PieceKind::from_letter('q'), Err(GameError::InvalidPieceType('q')));
    /// ```
    pub fn from_letter(letter: char) -> Result<Self, GameError> {
        match letter.to_ascii_uppercase() {
            'T' => Ok(PieceKind::T),
            'I' => Ok(PieceKind::I),
            'S' => Ok(PieceKind::S),
            'Z' => Ok(PieceKind::Z),
            'J' => Ok(PieceKind::J),
            'L' => Ok(PieceKind::L),
            'O' => Ok(PieceKind::O),
            _ => Err(GameError::InvalidPieceType(letter)),
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::T => 'T',
            PieceKind::I => 'I',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
        }
    }
}

/// Rotation direction for the active piece
///
/// - **Clockwise**: transpose, then reverse every row
/// - **CounterClockwise**: transpose, then reverse the row order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    Clockwise,
    CounterClockwise,
}

impl RotateDir {
    /// The direction that undoes this one
    pub fn reverse(self) -> Self {
        match self {
            RotateDir::Clockwise => RotateDir::CounterClockwise,
            RotateDir::CounterClockwise => RotateDir::Clockwise,
        }
    }
}

/// Horizontal shift of the active piece, one column at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDir {
    Left,
    Right,
}

impl MoveDir {
    /// Column delta
    pub fn offset(self) -> i32 {
        match self {
            MoveDir::Left => -1,
            MoveDir::Right => 1,
        }
    }
}

/// Game actions delivered by the input source
///
/// Each action maps 1:1 to a rules-engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if blocked
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece to its resting row and lock it
    HardDrop,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display colors by color index. Index 0 means "empty" and is never painted.
pub const COLOR_TABLE: [Option<Rgb>; 8] = [
    None,
    Some(Rgb::new(0xFF, 0x0D, 0x72)),
    Some(Rgb::new(0x0D, 0xC2, 0xFF)),
    Some(Rgb::new(0x0D, 0xFF, 0x72)),
    Some(Rgb::new(0xF5, 0x38, 0xFF)),
    Some(Rgb::new(0xFF, 0x8E, 0x0D)),
    Some(Rgb::new(0xFF, 0xE1, 0x38)),
    Some(Rgb::new(0x38, 0x77, 0xFF)),
];

/// Look up the display color for a cell value
pub fn color_for(index: u8) -> Option<Rgb> {
    COLOR_TABLE.get(index as usize).copied().flatten()
}

/// Programming errors surfaced by the rules engine
///
/// In-domain outcomes (a blocked move, a refused rotation, a board overflow) are never
/// errors; they are absorbed silently by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Piece letter outside the `TISZJLO` alphabet
    InvalidPieceType(char),
    /// Shape matrix that is empty, ragged, oversized or mixes colors
    MalformedShape(&'static str),
    /// Board fixture whose rows differ in length
    MalformedBoard(&'static str),
    /// Board write outside the grid
    CellOutOfBounds { x: i32, y: i32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPieceType(c) => write!(f, "invalid piece type {c:?}"),
            GameError::MalformedShape(why) => write!(f, "malformed shape: {why}"),
            GameError::MalformedBoard(why) => write!(f, "malformed board: {why}"),
            GameError::CellOutOfBounds { x, y } => {
                write!(f, "cell ({x}, {y}) is outside the board")
            }
        }
    }
}

impl std::error::Error for GameError {}
