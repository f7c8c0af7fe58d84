//! Snapshot module - a serializable, read-only view of a game
//!
//! Rows are rendered as strings (`#` filled, `.` free) so a snapshot stays
//! readable when printed as JSON.

use serde::Serialize;

use crate::game::{FallingPiece, Game, NextPiece};
use crate::pieces::ShapeCatalog;
use crate::types::{PieceKind, Rotation};

pub const FILLED_CHAR: char = '#';
pub const FREE_CHAR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub kind: &'static str,
    pub rotation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl PieceSnapshot {
    fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind: kind.as_str(),
            rotation: rotation.as_str(),
            x: None,
            y: None,
        }
    }
}

impl From<FallingPiece> for PieceSnapshot {
    fn from(value: FallingPiece) -> Self {
        Self {
            x: Some(value.x),
            y: Some(value.y),
            ..Self::new(value.kind, value.rotation)
        }
    }
}

impl From<NextPiece> for PieceSnapshot {
    fn from(value: NextPiece) -> Self {
        Self::new(value.kind, value.rotation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub rows: Vec<String>,
    /// Absent once the game is over
    pub current: Option<PieceSnapshot>,
    pub next: PieceSnapshot,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn capture<C: ShapeCatalog>(game: &Game<C>) -> Self {
        let board = game.board();
        let rows: Vec<String> = board
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_filled() { FILLED_CHAR } else { FREE_CHAR })
                    .collect::<String>()
            })
            .collect();

        Self {
            width: board.width(),
            height: board.height(),
            rows,
            current: (!game.is_over()).then(|| game.current().into()),
            next: game.next().into(),
            lines: game.lines(),
            pieces_locked: game.pieces_locked(),
            game_over: game.is_over(),
        }
    }
}
