//! Terminal presentation layer.
//!
//! Renders a [`core::Game`] into a simple framebuffer of styled characters and
//! flushes that framebuffer to the terminal with crossterm. There are no
//! widget or layout libraries involved: the board is placed cell by cell
//! through [`core::Layout`].
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: game to framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer to terminal, diffing against the previous frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
