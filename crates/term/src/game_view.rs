//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Every grid cell is placed through
//! [`Layout`], the same grid-to-screen mapping any other front end would use.

use crate::core::{Game, Layout, ShapeCatalog};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BlockKind, BoardConfig, PieceKind, Rotation, BLOCK_HEIGHT, BLOCK_WIDTH, BOARD_LINE_WIDTH,
    PIECE_BLOCKS,
};

/// Columns reserved right of the board for the side panel.
const PANEL_WIDTH: u16 = 16;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(25, 25, 35);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    block_w: u16,
    /// Board cell height in terminal rows.
    block_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            block_w: BLOCK_WIDTH,
            block_h: BLOCK_HEIGHT,
        }
    }
}

impl GameView {
    pub fn new(block_w: u16, block_h: u16) -> Self {
        Self { block_w, block_h }
    }

    /// Where the board sits in `viewport`.
    ///
    /// The board and its side panel are centred horizontally; the board plus
    /// its floor line are centred vertically.
    pub fn layout(&self, board: BoardConfig, viewport: Viewport) -> Layout {
        let board_w = self.block_w.saturating_mul(board.width);
        let board_h = self.block_h.saturating_mul(board.height);
        let total_w = board_w + 2 * BOARD_LINE_WIDTH + PANEL_WIDTH;

        let left = viewport.width.saturating_sub(total_w) / 2 + BOARD_LINE_WIDTH;
        let top = viewport.height.saturating_sub(board_h + 1) / 2;

        let center_x = left as i32 + (self.block_w * (board.width / 2)) as i32;
        Layout::new(board, self.block_w, self.block_h)
            .anchored(center_x, (top + board_h) as i32)
    }

    /// Render the game into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<C: ShapeCatalog>(
        &self,
        game: &Game<C>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default().on(BACKGROUND),
        });

        let board = game.board();
        let layout = self.layout(board.config(), viewport);
        let width = board.width() as i32;
        let height = board.height() as i32;

        self.draw_delimiters(fb, &layout, width);

        for y in 0..height {
            for x in 0..width {
                let (ch, style) = if board.is_free_block(x, y) {
                    ('·', CellStyle::fg(Rgb::new(70, 70, 85)).on(BOARD_BG).dim())
                } else {
                    ('█', CellStyle::fg(Rgb::new(200, 70, 70)).on(BOARD_BG))
                };
                self.draw_block(fb, &layout, x, y, ch, style);
            }
        }

        if !game.is_over() {
            let piece = game.current();
            self.draw_mask(
                fb,
                &layout,
                board.catalog(),
                piece.kind,
                piece.rotation,
                piece.x,
                piece.y,
            );
        }

        self.draw_side_panel(fb, &layout, game, width);

        if game.is_over() {
            self.draw_overlay(fb, &layout, height);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<C: ShapeCatalog>(&self, game: &Game<C>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    /// Vertical lines on both sides of the grid and the floor below it
    fn draw_delimiters(&self, fb: &mut FrameBuffer, layout: &Layout, width: i32) {
        let style = CellStyle::fg(Rgb::new(190, 190, 190));
        let left = layout.x_pos_in_pixels(0) - BOARD_LINE_WIDTH as i32;
        let right = layout.x_pos_in_pixels(width);
        let top = layout.y_pos_in_pixels(0);
        let floor = top + layout.board_pixel_height();

        for y in top..floor {
            fb.put_char(left, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
        fb.put_char(left, floor, '└', style);
        fb.put_char(right, floor, '┘', style);
        for x in left + 1..right {
            fb.put_char(x, floor, '─', style);
        }
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i32,
        y: i32,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(
            layout.x_pos_in_pixels(x),
            layout.y_pos_in_pixels(y),
            self.block_w,
            self.block_h,
            ch,
            style,
        );
    }

    /// Draw the solid cells of a mask anchored at grid position (x, y).
    ///
    /// Cells above the grid are drawn too when they fit on screen.
    #[allow(clippy::too_many_arguments)]
    fn draw_mask<C: ShapeCatalog>(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        catalog: &C,
        kind: PieceKind,
        rotation: Rotation,
        x: i32,
        y: i32,
    ) {
        for row in 0..PIECE_BLOCKS {
            for col in 0..PIECE_BLOCKS {
                let fg = match catalog.block_kind(kind, rotation, row, col) {
                    BlockKind::Empty => continue,
                    BlockKind::Solid => Rgb::new(90, 200, 110),
                    BlockKind::Pivot => Rgb::new(90, 130, 230),
                };
                let style = CellStyle::fg(fg).on(BOARD_BG).bold();
                self.draw_block(fb, layout, x + col as i32, y + row as i32, '█', style);
            }
        }
    }

    fn draw_side_panel<C: ShapeCatalog>(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        game: &Game<C>,
        width: i32,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let hint = value.dim();

        let x = layout.x_pos_in_pixels(width) + BOARD_LINE_WIDTH as i32 + 2;
        let row = |r: i32| layout.y_pos_in_pixels(r);

        fb.put_str(x, row(0), "NEXT", label);
        let next = game.next();
        // Preview mask occupies grid rows 1..=5 of the panel
        self.draw_mask(fb, layout, game.board().catalog(), next.kind, next.rotation, width + 1, 1);

        fb.put_str(x, row(7), "LINES", label);
        fb.put_u32(x, row(8), game.lines(), value);

        fb.put_str(x, row(10), "PIECES", label);
        fb.put_u32(x, row(11), game.pieces_locked(), value);

        fb.put_str(x, row(13), "h/l  move", hint);
        fb.put_str(x, row(14), "j    down", hint);
        fb.put_str(x, row(15), "z    rotate", hint);
        fb.put_str(x, row(16), "x    drop", hint);
        fb.put_str(x, row(17), "esc  quit", hint);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, height: i32) {
        let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
        let left = layout.x_pos_in_pixels(0);
        let board_w = layout.board_pixel_width();
        let mid = layout.y_pos_in_pixels(height / 2);

        for (i, text) in ["GAME OVER", "r: restart"].iter().enumerate() {
            let text_w = text.chars().count() as i32;
            let x = left + (board_w - text_w).max(0) / 2;
            fb.put_str(x, mid + i as i32, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_board_and_panel() {
        let view = GameView::default();
        let layout = view.layout(BoardConfig::default(), Viewport::new(60, 24));

        // 20 board columns + 2 lines + 16 panel = 38 => left margin 11, grid starts at 12
        assert_eq!(layout.x_pos_in_pixels(0), 12);
        // 20 rows + floor = 21 => top margin 1
        assert_eq!(layout.y_pos_in_pixels(0), 1);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let game = Game::new(crate::core::GameSettings::default());
        let fb = GameView::default().render(&game, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
