//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board engine and the game loop around it. It has no
//! dependency on terminals, input devices or any other I/O, which makes it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is a plain method on an owned value
//! - **Portable**: the terminal view and the headless runner share it as-is
//!
//! # Module Structure
//!
//! - [`board`]: the grid with collision testing, piece merging and line clearing
//! - [`pieces`]: the [`ShapeCatalog`] trait and the reference 5x5 piece masks
//! - [`game`]: falling piece, next-piece preview, gravity and the lock sequence
//! - [`layout`]: grid to screen coordinate mapping for presentation layers
//! - [`rng`]: small seeded LCG used to pick pieces
//! - [`snapshot`]: serializable view of a game for reports
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameSettings};
//! use blockfall_types::GameAction;
//!
//! let mut game = Game::new(GameSettings::default());
//!
//! game.apply(GameAction::MoveLeft);
//! game.apply(GameAction::Rotate);
//! game.apply(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert!(!game.is_over());
//! ```
//!
//! # Threading
//!
//! Everything here is single-threaded. A `Board` is owned by exactly one
//! `Game` and mutated through `&mut self`; there is no interior mutability.

pub mod board;
pub mod game;
pub mod layout;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::{FallingPiece, Game, GameSettings, NextPiece};
pub use layout::Layout;
pub use pieces::{solid_cells, Pieces, ShapeCatalog};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
