//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid (10x20 by default) where each cell is
//! either free or filled. Cells live in a flat row-major buffer and every
//! access goes through a bounds-checked index, so out-of-range coordinates can
//! never touch memory outside the grid.
//!
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Negative y is the spawn area above the visible grid; it is never stored and
//! is always considered clear.

use crate::pieces::{Pieces, ShapeCatalog};
use crate::types::{BoardConfig, CellState, PieceKind, Rotation, PIECE_BLOCKS};

/// The game board plus the shape catalog it resolves piece masks against.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<C = Pieces> {
    config: BoardConfig,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellState>,
    catalog: C,
}

impl Board<Pieces> {
    /// Create an empty board of the given size using the reference pieces
    pub fn with_config(config: BoardConfig) -> Self {
        Self::new(config, Pieces)
    }
}

impl<C: ShapeCatalog> Board<C> {
    /// Create an empty board. Zero sides are raised to 1.
    pub fn new(config: BoardConfig, catalog: C) -> Self {
        let mut board = Self {
            config: config.normalized(),
            cells: Vec::new(),
            catalog,
        };
        board.initialize();
        board
    }

    /// Reset every cell to free
    pub fn initialize(&mut self) {
        self.cells.clear();
        self.cells.resize(self.config.cell_count(), CellState::Free);
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return None;
        }
        Some(y as usize * self.width() as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<CellState> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set_cell(&mut self, x: i32, y: i32, state: CellState) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// True if the cell at (x, y) is free.
    ///
    /// Callers are expected to stay inside the grid; an out-of-range cell is
    /// reported as not free.
    pub fn is_free_block(&self, x: i32, y: i32) -> bool {
        matches!(self.cell(x, y), Some(CellState::Free))
    }

    /// Check whether `kind`/`rotation` can sit with its mask anchored at (x, y).
    ///
    /// Each solid mask cell is tested on its own:
    /// - leaving the side walls or the floor is illegal; there is no check
    ///   against the top edge here,
    /// - a cell at row 0 or below must land on a free grid cell.
    ///
    /// Cells above the grid (negative y) only have to respect the side walls.
    pub fn is_possible_movement(&self, x: i32, y: i32, kind: PieceKind, rotation: Rotation) -> bool {
        let width = self.width() as i32;
        let height = self.height() as i32;

        for row in 0..PIECE_BLOCKS {
            for col in 0..PIECE_BLOCKS {
                if !self.catalog.block_kind(kind, rotation, row, col).is_solid() {
                    continue;
                }

                // Overflow can only run past the right wall or the floor
                let (Some(bx), Some(by)) = (x.checked_add(col as i32), y.checked_add(row as i32))
                else {
                    return false;
                };

                if bx < 0 || bx >= width || by >= height {
                    return false;
                }

                if by >= 0 && !self.is_free_block(bx, by) {
                    return false;
                }
            }
        }

        true
    }

    /// Merge the solid cells of a piece into the grid.
    ///
    /// Cells that fall outside the grid are dropped. That only happens for
    /// the part of a piece still above row 0 when it locks.
    pub fn store_piece(&mut self, x: i32, y: i32, kind: PieceKind, rotation: Rotation) {
        for row in 0..PIECE_BLOCKS {
            for col in 0..PIECE_BLOCKS {
                if !self.catalog.block_kind(kind, rotation, row, col).is_solid() {
                    continue;
                }
                if let (Some(bx), Some(by)) = (x.checked_add(col as i32), y.checked_add(row as i32)) {
                    self.set_cell(bx, by, CellState::Filled);
                }
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| !row.is_empty() && row.iter().all(|cell| cell.is_filled()))
            .unwrap_or(false)
    }

    /// Remove every complete row, compacting the grid downwards.
    ///
    /// Rows are scanned from the top. After a removal the same index is
    /// examined again, because the row above has just moved into it.
    /// Returns the number of rows removed.
    pub fn delete_possible_lines(&mut self) -> usize {
        let mut removed = 0;
        let mut y = 0;
        while y < self.height() as usize {
            if self.is_row_complete(y) {
                self.delete_line(y);
                removed += 1;
            } else {
                y += 1;
            }
        }
        removed
    }

    /// Shift all rows above `y` down by one and clear the top row
    fn delete_line(&mut self, y: usize) {
        let width = self.width() as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }

        self.cells[..width].fill(CellState::Free);
    }

    /// Game over: something has settled in the spawn row
    pub fn is_game_over(&self) -> bool {
        self.row(0)
            .map(|row| row.iter().any(|cell| cell.is_filled()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        if y >= self.height() as usize {
            return None;
        }
        let width = self.width() as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(self.width() as usize)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }
}

impl Default for Board<Pieces> {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i32) {
        for x in 0..board.width() as i32 {
            board.set_cell(x, y, CellState::Filled);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_is_free_block_out_of_range_is_not_free() {
        let board = Board::default();
        assert!(board.is_free_block(0, 0));
        assert!(!board.is_free_block(-1, 0));
        assert!(!board.is_free_block(0, 20));
    }

    #[test]
    fn test_delete_line_clears_top_row() {
        let mut board = Board::default();
        board.set_cell(4, 0, CellState::Filled);
        fill_row(&mut board, 1);

        assert_eq!(board.delete_possible_lines(), 1);

        // Old row 0 moved to row 1, row 0 is fresh
        assert_eq!(board.cell(4, 1), Some(CellState::Filled));
        assert!(board.row(0).unwrap().iter().all(|c| c.is_free()));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_adjacent_complete_rows_removed_together() {
        let mut board = Board::default();
        fill_row(&mut board, 18);
        fill_row(&mut board, 19);
        board.set_cell(0, 17, CellState::Filled);

        assert_eq!(board.delete_possible_lines(), 2);
        assert_eq!(board.cell(0, 19), Some(CellState::Filled));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_zero_width_config_becomes_one_column() {
        let mut board = Board::with_config(BoardConfig { width: 0, height: 5 });
        assert_eq!(board.width(), 1);
        assert_eq!(board.rows().count(), 5);
        assert_eq!(board.delete_possible_lines(), 0);

        board.set_cell(0, 4, CellState::Filled);
        assert_eq!(board.delete_possible_lines(), 1);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_extreme_anchors_do_not_overflow() {
        let mut board = Board::default();
        for (x, y) in [(i32::MAX, 0), (0, i32::MAX), (i32::MAX, i32::MAX), (i32::MIN, 0)] {
            assert!(!board.is_possible_movement(x, y, PieceKind::Square, Rotation::North));
            board.store_piece(x, y, PieceKind::Square, Rotation::North);
        }
        // Far above the grid only the side walls matter
        assert!(board.is_possible_movement(0, i32::MIN, PieceKind::Square, Rotation::North));
        board.store_piece(0, i32::MIN, PieceKind::Square, Rotation::North);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_rows_iterator_shape() {
        let board = Board::with_config(BoardConfig::new(4, 6));
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 4));
    }
}
