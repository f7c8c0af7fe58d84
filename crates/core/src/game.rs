//! Game module - the falling piece and the loop around the board
//!
//! `Game` owns the board, the falling piece and the preview of the next one.
//! Every move is validated with [`Board::is_possible_movement`] before it is
//! applied. When a piece can no longer fall it is locked:
//!
//! 1. [`Board::store_piece`] merges it into the grid
//! 2. [`Board::delete_possible_lines`] removes complete rows
//! 3. [`Board::is_game_over`] checks the spawn row
//! 4. the next piece spawns (and the game ends if it cannot)

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{Pieces, ShapeCatalog};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{BoardConfig, GameAction, PieceKind, Rotation, WAIT_TIME_MS};

/// The piece currently falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column of the mask's left edge (may be negative)
    pub x: i32,
    /// Anchor row of the mask's top edge (negative while above the grid)
    pub y: i32,
}

impl FallingPiece {
    /// A piece at its spawn position for a board `board_width` columns wide
    pub fn spawn<C: ShapeCatalog + ?Sized>(
        catalog: &C,
        kind: PieceKind,
        rotation: Rotation,
        board_width: u16,
    ) -> Self {
        let (ix, iy) = catalog.initial_position(kind, rotation);
        Self {
            kind,
            rotation,
            x: board_width as i32 / 2 + ix,
            y: iy,
        }
    }

    pub fn moved(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    pub fn rotated(self) -> Self {
        Self {
            rotation: self.rotation.next(),
            ..self
        }
    }
}

/// Kind and rotation of the piece that spawns next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
}

impl NextPiece {
    fn random(rng: &mut SimpleRng) -> Self {
        let kind = rng.piece_kind();
        let rotation = rng.rotation();
        Self { kind, rotation }
    }
}

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub board: BoardConfig,
    pub seed: u32,
    /// Gravity interval in milliseconds
    pub wait_time_ms: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: 1,
            wait_time_ms: WAIT_TIME_MS,
        }
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game<C = Pieces> {
    board: Board<C>,
    settings: GameSettings,
    rng: SimpleRng,
    current: FallingPiece,
    next: NextPiece,
    lines: u32,
    pieces_locked: u32,
    drop_timer_ms: u32,
    game_over: bool,
}

impl Game<Pieces> {
    /// Create a new game with the reference pieces
    pub fn new(settings: GameSettings) -> Self {
        Self::with_catalog(settings, Pieces)
    }
}

impl<C: ShapeCatalog> Game<C> {
    pub fn with_catalog(settings: GameSettings, catalog: C) -> Self {
        let mut rng = SimpleRng::new(settings.seed);
        let board = Board::new(settings.board, catalog);
        let first = NextPiece::random(&mut rng);
        let next = NextPiece::random(&mut rng);
        let current = FallingPiece::spawn(board.catalog(), first.kind, first.rotation, board.width());

        let mut game = Self {
            board,
            settings,
            rng,
            current,
            next,
            lines: 0,
            pieces_locked: 0,
            drop_timer_ms: 0,
            game_over: false,
        };
        game.game_over = !game.can_place(current);
        game
    }

    pub fn board(&self) -> &Board<C> {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board<C> {
        &mut self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current(&self) -> FallingPiece {
        self.current
    }

    pub fn next(&self) -> NextPiece {
        self.next
    }

    /// Total rows cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    fn can_place(&self, piece: FallingPiece) -> bool {
        self.board
            .is_possible_movement(piece.x, piece.y, piece.kind, piece.rotation)
    }

    /// Try to move the falling piece
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let moved = self.current.moved(dx, dy);
        if self.game_over || !self.can_place(moved) {
            return false;
        }
        self.current = moved;
        true
    }

    /// Try to rotate the falling piece one step, in place
    pub fn try_rotate(&mut self) -> bool {
        let rotated = self.current.rotated();
        if self.game_over || !self.can_place(rotated) {
            return false;
        }
        self.current = rotated;
        true
    }

    /// Drop the piece as far as it goes and lock it.
    ///
    /// The anchor never descends past the floor, so a mask without solid
    /// cells stops there too. Returns the number of rows the piece fell.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let floor = self.board.height() as i32;
        let mut distance = 0;
        while self.current.y < floor && self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Merge the falling piece into the board, clear lines and spawn the next
    /// piece. Returns the number of lines cleared.
    pub fn lock_piece(&mut self) -> usize {
        if self.game_over {
            return 0;
        }

        let piece = self.current;
        self.board
            .store_piece(piece.x, piece.y, piece.kind, piece.rotation);
        self.pieces_locked += 1;
        self.drop_timer_ms = 0;
        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece locked");

        let cleared = self.board.delete_possible_lines();
        if cleared > 0 {
            self.lines += cleared as u32;
            info!(cleared, total = self.lines, "lines cleared");
        }

        if self.board.is_game_over() {
            self.finish("spawn row filled");
        } else {
            self.create_new_piece();
        }

        cleared
    }

    /// Promote the preview piece to the falling piece and draw a new preview
    pub fn create_new_piece(&mut self) {
        self.current = FallingPiece::spawn(
            self.board.catalog(),
            self.next.kind,
            self.next.rotation,
            self.board.width(),
        );
        self.next = NextPiece::random(&mut self.rng);

        if !self.can_place(self.current) {
            self.finish("spawn blocked");
        }
    }

    fn finish(&mut self, reason: &str) {
        self.game_over = true;
        info!(
            reason,
            pieces = self.pieces_locked,
            lines = self.lines,
            "game over"
        );
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Every `wait_time_ms` the piece falls one row; if it cannot, it locks.
    /// Returns true when the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.settings.wait_time_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a game action. Returns whether the state changed.
    ///
    /// Once the game is over only `Restart` has an effect.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                if self.game_over {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start over on the same board, continuing the random sequence
    pub fn restart(&mut self) {
        debug!(
            pieces = self.pieces_locked,
            lines = self.lines,
            "restarting game"
        );
        self.board.initialize();
        self.lines = 0;
        self.pieces_locked = 0;
        self.drop_timer_ms = 0;
        self.game_over = false;

        let first = NextPiece::random(&mut self.rng);
        self.next = first;
        self.create_new_piece();
    }
}
