//! Headless runner: plays a seeded game without a terminal.
//!
//! A built-in player picks a random rotation and column shift for every piece
//! and hard-drops it. The piece sequence comes from the game's own RNG; the
//! player's choices come from a second generator derived from the same seed,
//! so a run is fully determined by `(settings, max_pieces)`.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Mode, Settings};
use crate::core::{Game, GameSettings, GameSnapshot, SimpleRng};
use crate::types::{GameAction, ROTATIONS};

/// Piece budget when `run` is handed interactive settings
pub const DEFAULT_MAX_PIECES: u32 = 500;

/// Outcome of a headless run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlessReport {
    pub seed: u32,
    pub pieces_locked: u32,
    pub lines: u32,
    pub game_over: bool,
    pub snapshot: GameSnapshot,
}

pub fn run(settings: &Settings) -> HeadlessReport {
    let max_pieces = match settings.mode {
        Mode::Headless { max_pieces } => max_pieces,
        Mode::Play => DEFAULT_MAX_PIECES,
    };
    play(settings.game, max_pieces)
}

/// Play until game over or until `max_pieces` pieces have locked.
pub fn play(settings: GameSettings, max_pieces: u32) -> HeadlessReport {
    let mut game = Game::new(settings);
    let mut player = SimpleRng::new(settings.seed.rotate_left(16) ^ 0x9e37_79b9);
    let half = settings.board.width as i32 / 2;

    info!(seed = settings.seed, max_pieces, "headless run started");

    while !game.is_over() && game.pieces_locked() < max_pieces {
        let turns = player.range_inclusive(0, ROTATIONS as u32 - 1);
        for _ in 0..turns {
            game.apply(GameAction::Rotate);
        }

        let shift = player.range_inclusive(0, settings.board.width as u32) as i32 - half;
        let step = if shift < 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..shift.abs() {
            if !game.apply(step) {
                break;
            }
        }

        let piece = game.current();
        debug!(
            kind = piece.kind.as_str(),
            rotation = piece.rotation.as_str(),
            x = piece.x,
            "dropping piece"
        );
        game.apply(GameAction::HardDrop);
    }

    info!(
        pieces = game.pieces_locked(),
        lines = game.lines(),
        game_over = game.is_over(),
        "headless run finished"
    );

    HeadlessReport {
        seed: settings.seed,
        pieces_locked: game.pieces_locked(),
        lines: game.lines(),
        game_over: game.is_over(),
        snapshot: game.snapshot(),
    }
}
