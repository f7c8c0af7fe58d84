//! Layout module - grid to screen coordinate mapping
//!
//! A "pixel" here is whatever unit the presentation layer draws in; for the
//! terminal view it is one character cell. The board is centred horizontally
//! on `center_x` and rests on `screen_height`, so row 0 starts
//! `block_height * height` units above that line.

use crate::types::{BoardConfig, BLOCK_HEIGHT, BLOCK_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    board: BoardConfig,
    block_width: u16,
    block_height: u16,
    /// Screen column of the board's horizontal centre
    center_x: i32,
    /// Screen row just below the last grid row
    screen_height: i32,
}

impl Layout {
    pub fn new(board: BoardConfig, block_width: u16, block_height: u16) -> Self {
        Self {
            board,
            block_width,
            block_height,
            center_x: 0,
            screen_height: 0,
        }
    }

    /// Place the board: centred on `center_x`, bottom edge at `screen_height`
    pub fn anchored(mut self, center_x: i32, screen_height: i32) -> Self {
        self.center_x = center_x;
        self.screen_height = screen_height;
        self
    }

    pub fn block_width(&self) -> u16 {
        self.block_width
    }

    pub fn block_height(&self) -> u16 {
        self.block_height
    }

    /// Screen x of the left edge of grid column `pos`
    pub fn x_pos_in_pixels(&self, pos: i32) -> i32 {
        let bw = self.block_width as i32;
        (self.center_x - bw * (self.board.width as i32 / 2)) + pos * bw
    }

    /// Screen y of the top edge of grid row `pos`
    pub fn y_pos_in_pixels(&self, pos: i32) -> i32 {
        let bh = self.block_height as i32;
        (self.screen_height - bh * self.board.height as i32) + pos * bh
    }

    /// Width of the whole grid in screen units
    pub fn board_pixel_width(&self) -> i32 {
        self.block_width as i32 * self.board.width as i32
    }

    /// Height of the whole grid in screen units
    pub fn board_pixel_height(&self) -> i32 {
        self.block_height as i32 * self.board.height as i32
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(BoardConfig::default(), BLOCK_WIDTH, BLOCK_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_block_size() {
        let layout = Layout::new(BoardConfig::new(10, 20), 15, 15).anchored(320, 480);

        assert_eq!(layout.x_pos_in_pixels(0), 320 - 15 * 5);
        assert_eq!(layout.x_pos_in_pixels(3), 320 - 75 + 45);
        assert_eq!(layout.y_pos_in_pixels(0), 480 - 300);
        assert_eq!(layout.y_pos_in_pixels(19), 480 - 300 + 285);
    }

    #[test]
    fn test_last_row_ends_on_screen_height() {
        let layout = Layout::default().anchored(40, 22);
        let last = layout.y_pos_in_pixels(19) + layout.block_height() as i32;
        assert_eq!(last, 22);
    }

    #[test]
    fn test_negative_rows_map_above_board() {
        let layout = Layout::default().anchored(40, 22);
        assert!(layout.y_pos_in_pixels(-1) < layout.y_pos_in_pixels(0));
    }
}
