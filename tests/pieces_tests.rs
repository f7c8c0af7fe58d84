//! Shape catalog tests.

use blockfall::core::{solid_cells, FallingPiece, Pieces, ShapeCatalog};
use blockfall::types::{BlockKind, PieceKind, Rotation, BOARD_WIDTH, PIECE_BLOCKS};

#[test]
fn test_every_mask_has_four_cells_and_a_centered_pivot() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let cells = solid_cells(&Pieces, kind, rotation);
            assert_eq!(cells.len(), 4, "{kind:?} {rotation:?}");

            let pivots: Vec<_> = (0..PIECE_BLOCKS)
                .flat_map(|row| (0..PIECE_BLOCKS).map(move |col| (row, col)))
                .filter(|&(row, col)| Pieces.block_kind(kind, rotation, row, col) == BlockKind::Pivot)
                .collect();
            assert_eq!(pivots, vec![(2, 2)], "{kind:?} {rotation:?}");
        }
    }
}

#[test]
fn test_square_looks_the_same_in_every_rotation() {
    let north = solid_cells(&Pieces, PieceKind::Square, Rotation::North);
    for rotation in Rotation::ALL {
        assert_eq!(solid_cells(&Pieces, PieceKind::Square, rotation), north);
    }
}

#[test]
fn test_spawn_position_sits_inside_the_walls_and_touches_row_zero() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let piece = FallingPiece::spawn(&Pieces, kind, rotation, BOARD_WIDTH);
            let cells = solid_cells(&Pieces, kind, rotation);

            for &(dx, _) in &cells {
                let x = piece.x + dx;
                assert!((0..BOARD_WIDTH as i32).contains(&x), "{kind:?} {rotation:?}");
            }
            let lowest = cells.iter().map(|&(_, dy)| piece.y + dy).max().unwrap();
            assert!(
                (0..=1).contains(&lowest),
                "{kind:?} {rotation:?} lowest row {lowest}"
            );
        }
    }
}
