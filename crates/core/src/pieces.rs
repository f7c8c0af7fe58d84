//! Pieces module - shape catalog
//!
//! Every piece kind has four rotation masks of 5x5 cells. A mask cell is
//! empty (0), solid (1) or the pivot (2); the pivot always sits at (2, 2) so
//! rotating a piece keeps it roughly in place without any wall kicks.
//!
//! The catalog also stores, per kind and rotation, the offset that places a
//! freshly spawned piece just above the visible grid.

use arrayvec::ArrayVec;

use crate::types::{BlockKind, PieceKind, Rotation, PIECE_BLOCKS, PIECE_KINDS, ROTATIONS};

/// Offset of a solid mask cell relative to the piece anchor, as `(dx, dy)`
pub type BlockOffset = (i32, i32);

/// Solid cells of one mask. A 5x5 mask can never hold more than 25.
pub type SolidCells = ArrayVec<BlockOffset, { PIECE_BLOCKS * PIECE_BLOCKS }>;

/// Read-only lookup of piece masks and spawn offsets.
///
/// The board only ever asks for single mask cells, so alternative catalogs
/// (tests, variants with other shapes) only need these two lookups.
pub trait ShapeCatalog {
    /// Kind of the mask cell at `(row, col)`.
    ///
    /// Cells outside the `PIECE_BLOCKS` x `PIECE_BLOCKS` mask are `Empty`.
    fn block_kind(&self, kind: PieceKind, rotation: Rotation, row: usize, col: usize) -> BlockKind;

    /// Spawn offset `(x, y)` for a kind/rotation.
    ///
    /// The game adds `width / 2` to `x`; `y` is used as-is.
    fn initial_position(&self, kind: PieceKind, rotation: Rotation) -> (i32, i32);
}

/// The reference catalog: seven tetrominoes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pieces;

impl ShapeCatalog for Pieces {
    fn block_kind(&self, kind: PieceKind, rotation: Rotation, row: usize, col: usize) -> BlockKind {
        if row >= PIECE_BLOCKS || col >= PIECE_BLOCKS {
            return BlockKind::Empty;
        }
        BlockKind::from_raw(MASKS[kind.index()][rotation.index()][row][col])
    }

    fn initial_position(&self, kind: PieceKind, rotation: Rotation) -> (i32, i32) {
        INITIAL_POSITIONS[kind.index()][rotation.index()]
    }
}

/// Collect the solid cells of a mask as `(dx, dy)` offsets, row by row.
pub fn solid_cells<C: ShapeCatalog + ?Sized>(
    catalog: &C,
    kind: PieceKind,
    rotation: Rotation,
) -> SolidCells {
    let mut cells = SolidCells::new();
    for row in 0..PIECE_BLOCKS {
        for col in 0..PIECE_BLOCKS {
            if catalog.block_kind(kind, rotation, row, col).is_solid() {
                cells.push((col as i32, row as i32));
            }
        }
    }
    cells
}

type Mask = [[u8; PIECE_BLOCKS]; PIECE_BLOCKS];

/// Masks indexed by `[kind][rotation][row][col]`.
#[rustfmt::skip]
const MASKS: [[Mask; ROTATIONS]; PIECE_KINDS] = [
    // Square
    [
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 0, 2, 1, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 0, 2, 1, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 0, 2, 1, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 0, 2, 1, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
    ],
    // I
    [
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 1, 2, 1, 1], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [1, 1, 2, 1, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
    ],
    // L
    [
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 0, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 1, 2, 1, 0], [0, 1, 0, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 1, 1, 0, 0], [0, 0, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 1, 0], [0, 1, 2, 1, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
    ],
    // L mirrored
    [
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 0, 0], [0, 1, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 1, 0, 0, 0], [0, 1, 2, 1, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 1, 0], [0, 0, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 1, 2, 1, 0], [0, 0, 0, 1, 0], [0, 0, 0, 0, 0]],
    ],
    // N
    [
        [[0, 0, 0, 0, 0], [0, 0, 0, 1, 0], [0, 0, 2, 1, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 1, 2, 0, 0], [0, 0, 1, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 1, 2, 0, 0], [0, 1, 0, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 1, 1, 0, 0], [0, 0, 2, 1, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
    ],
    // N mirrored
    [
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 1, 0], [0, 0, 0, 1, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 0, 2, 1, 0], [0, 1, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 1, 0, 0, 0], [0, 1, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 1, 0], [0, 1, 2, 0, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
    ],
    // T
    [
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 0, 2, 1, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 0, 0, 0], [0, 1, 2, 1, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 1, 2, 0, 0], [0, 0, 1, 0, 0], [0, 0, 0, 0, 0]],
        [[0, 0, 0, 0, 0], [0, 0, 1, 0, 0], [0, 1, 2, 1, 0], [0, 0, 0, 0, 0], [0, 0, 0, 0, 0]],
    ],
];

/// Spawn offsets indexed by `[kind][rotation]`, as `(x, y)`.
///
/// Pieces spawn with their lowest solid row on (or just below) grid row 0.
#[rustfmt::skip]
const INITIAL_POSITIONS: [[(i32, i32); ROTATIONS]; PIECE_KINDS] = [
    /* Square */     [(-2, -3), (-2, -3), (-2, -3), (-2, -3)],
    /* I */          [(-2, -2), (-2, -3), (-2, -2), (-2, -3)],
    /* L */          [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    /* L mirrored */ [(-2, -3), (-2, -2), (-2, -3), (-2, -3)],
    /* N */          [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    /* N mirrored */ [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
    /* T */          [(-2, -3), (-2, -3), (-2, -3), (-2, -2)],
];
