use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::util::LayoutConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        WindowSize { width, height }
    }
}

/// Grid dimensions derived from the window size and the nominal cell size.
/// Spare horizontal pixels are spread over the columns as `margin_x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams {
    pub window: WindowSize,
    /// Number of columns that fit in the window, zero if the window is narrower than one tile
    pub n_cols: usize,
    /// Number of full rows visible in the window
    pub n_rows: usize,
    pub tile_width: i32,
    pub tile_height: i32,
    pub margin_x: i32,
    pub margin_y: i32,
}

impl GridParams {
    pub fn new(window: WindowSize, config: &LayoutConfig) -> Self {
        // pixels beyond i32::MAX are not addressable
        let width = window.width.min(i32::MAX as u32);
        let height = window.height.min(i32::MAX as u32);
        let n_cols = (width / config.tile_width) as usize;
        let n_rows = (height / config.tile_height) as usize;
        let margin_x = match n_cols {
            0 => 0,
            n => (width % config.tile_width) as usize / n,
        };
        GridParams {
            window,
            n_cols,
            n_rows,
            tile_width: config.tile_width as i32,
            tile_height: config.tile_height as i32,
            margin_x: margin_x as i32,
            margin_y: config.margin_y as i32,
        }
    }

    /// True if not even a single column fits in the window
    pub fn is_degenerate(&self) -> bool {
        self.n_cols == 0
    }

    /// Horizontal distance between the left edges of two neighboring cells
    pub fn col_pitch(&self) -> i32 {
        self.tile_width + self.margin_x
    }

    /// Vertical distance between the top edges of two neighboring cells
    pub fn row_pitch(&self) -> i32 {
        self.tile_height + self.margin_y
    }

    /// Maps a point in grid space to the index of the cell whose pitch area contains it.
    /// Returns `None` for points left of or above the grid, or right of the last column.
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        let Point(x, y) = point;
        if self.is_degenerate() || x < 0 || y < 0 {
            return None;
        }
        let col = (x / self.col_pitch()) as usize;
        let row = (y / self.row_pitch()) as usize;
        match col < self.n_cols {
            true => Some(row * self.n_cols + col),
            false => None,
        }
    }
}
