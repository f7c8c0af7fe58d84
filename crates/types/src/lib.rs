//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! from the board engine, the terminal view and the headless runner alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Both are runtime
//! configurable through [`BoardConfig`]; the constants are only defaults.
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn area**: above row 0 (negative y), always considered clear
//!
//! # Piece Masks
//!
//! Every piece kind/rotation pair is described by a square mask of
//! [`PIECE_BLOCKS`] x [`PIECE_BLOCKS`] cells, each one a [`BlockKind`].
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the interactive loop |
//! | `WAIT_TIME_MS` | 700 | Gravity: time between automatic one-row drops |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BoardConfig, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_index(6).unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! assert_eq!(Rotation::West.next(), Rotation::North);
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.width, BOARD_WIDTH);
//! assert_eq!(config.height, BOARD_HEIGHT);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Side length of a piece mask (5x5 cells)
pub const PIECE_BLOCKS: usize = 5;

/// Number of piece kinds in the catalog
pub const PIECE_KINDS: usize = 7;

/// Number of rotation states per piece
pub const ROTATIONS: usize = 4;

/// Interactive loop frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the falling piece drops one row every 700ms
pub const WAIT_TIME_MS: u32 = 700;

/// Terminal columns per board cell (2 columns compensates the glyph aspect ratio)
pub const BLOCK_WIDTH: u16 = 2;

/// Terminal rows per board cell
pub const BLOCK_HEIGHT: u16 = 1;

/// Width of the board delimiter lines, in terminal columns
pub const BOARD_LINE_WIDTH: u16 = 1;

/// The seven piece kinds, in catalog order
///
/// The discriminant is the catalog index used by the shape tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// 2x2 block
    Square,
    /// Straight bar
    I,
    L,
    /// Mirror image of `L` (a.k.a. J)
    LMirrored,
    /// Zig-zag (a.k.a. S)
    N,
    /// Mirror image of `N` (a.k.a. Z)
    NMirrored,
    T,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_KINDS] = [
        PieceKind::Square,
        PieceKind::I,
        PieceKind::L,
        PieceKind::LMirrored,
        PieceKind::N,
        PieceKind::NMirrored,
        PieceKind::T,
    ];

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::Square));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(PieceKind::Square),
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "l-mirrored" | "j" => Some(PieceKind::LMirrored),
            "n" | "s" => Some(PieceKind::N),
            "n-mirrored" | "z" => Some(PieceKind::NMirrored),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::LMirrored => "l-mirrored",
            PieceKind::N => "n",
            PieceKind::NMirrored => "n-mirrored",
            PieceKind::T => "t",
        }
    }
}

/// Rotation states, in the order the catalog stores them
///
/// The cycle goes: North → East → South → West → North. Rotation is
/// always a single step forward (`(r + 1) % 4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; ROTATIONS] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Catalog index (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next rotation state
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % ROTATIONS]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// One cell of a piece mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockKind {
    #[default]
    Empty,
    Solid,
    /// The cell the piece rotates around. Solid for collision purposes.
    Pivot,
}

impl BlockKind {
    /// Decode a raw catalog value (0 = empty, 1 = solid, 2 = pivot).
    ///
    /// Any other value is treated as solid.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => BlockKind::Empty,
            2 => BlockKind::Pivot,
            _ => BlockKind::Solid,
        }
    }

    /// True for `Solid` and `Pivot`
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockKind::Empty)
    }
}

/// State of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Filled,
}

impl CellState {
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    pub fn is_filled(self) -> bool {
        self == CellState::Filled
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Restart,
}

/// Grid dimensions for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    pub width: u16,
    pub height: u16,
}

impl BoardConfig {
    /// Grid of `width` x `height` cells. A zero side is raised to 1.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }.normalized()
    }

    /// The same config with both sides at least 1
    pub const fn normalized(self) -> Self {
        Self {
            width: if self.width == 0 { 1 } else { self.width },
            height: if self.height == 0 { 1 } else { self.height },
        }
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_index() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), Some(*kind));
        }
        for (i, rotation) in Rotation::ALL.iter().enumerate() {
            assert_eq!(rotation.index(), i);
        }
    }

    #[test]
    fn rotation_cycles_in_four_steps() {
        let mut r = Rotation::North;
        for _ in 0..ROTATIONS {
            r = r.next();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn block_kind_raw_values() {
        assert_eq!(BlockKind::from_raw(0), BlockKind::Empty);
        assert_eq!(BlockKind::from_raw(1), BlockKind::Solid);
        assert_eq!(BlockKind::from_raw(2), BlockKind::Pivot);
        assert!(!BlockKind::Empty.is_solid());
        assert!(BlockKind::Solid.is_solid());
        assert!(BlockKind::Pivot.is_solid());
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("J"), Some(PieceKind::LMirrored));
        assert_eq!(PieceKind::from_str("nope"), None);
    }

    #[test]
    fn zero_sides_are_raised_to_one() {
        assert_eq!(BoardConfig::new(0, 5), BoardConfig::new(1, 5));
        assert_eq!(BoardConfig::new(3, 0).cell_count(), 3);
        let literal = BoardConfig { width: 0, height: 0 };
        assert_eq!(literal.normalized(), BoardConfig::new(1, 1));
    }

    #[test]
    fn default_config_is_ten_by_twenty() {
        let config = BoardConfig::default();
        assert_eq!(config, BoardConfig::new(10, 20));
        assert_eq!(config.cell_count(), 200);
    }
}
