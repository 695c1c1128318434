use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Largest tile dimension accepted. Together with the row capacity check of [`LayoutConfig::validate`]
/// it keeps all pixel arithmetic inside `i32`.
pub const MAX_TILE_DIMENSION: u32 = 1 << 16;

///Configuration of the layout engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    ///Nominal width of a single grid cell in pixels
    pub tile_width: u32,
    ///Nominal height of a single grid cell in pixels
    pub tile_height: u32,
    ///Vertical gap between two rows of cells in pixels
    pub margin_y: u32,
    ///How many rows the occupancy grid may hold
    #[serde(default)]
    pub capacity: CapacityPolicy,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tile_width > 0 && self.tile_height > 0,
            "tile dimensions must be positive, got {}x{}",
            self.tile_width,
            self.tile_height
        );
        ensure!(
            self.tile_width <= MAX_TILE_DIMENSION
                && self.tile_height <= MAX_TILE_DIMENSION
                && self.margin_y <= MAX_TILE_DIMENSION,
            "tile dimensions and margins are limited to {MAX_TILE_DIMENSION}px"
        );
        if let CapacityPolicy::Growing { max_rows } = self.capacity {
            ensure!(max_rows > 0, "growing capacity needs at least one row");
        }
        let row_pitch = self.tile_height as u128 + self.margin_y as u128;
        let grid_height = self.capacity.max_rows() as u128 * row_pitch;
        ensure!(
            grid_height <= i32::MAX as u128,
            "{} rows of {}px exceed the addressable height of {}px",
            self.capacity.max_rows(),
            row_pitch,
            i32::MAX
        );
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_width: 200,
            tile_height: 150,
            margin_y: 10,
            capacity: CapacityPolicy::default(),
        }
    }
}

/// Determines the number of rows of the occupancy grid.
/// Multi-cell footprints leave unfillable fragments, so the capacity can not be derived from the item count alone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Exactly `n_rows` rows, the grid never grows
    Fixed { n_rows: usize },
    /// Starts with the rows visible in the window and doubles on demand, up to `max_rows`
    Growing { max_rows: usize },
}

impl CapacityPolicy {
    /// Largest number of rows the occupancy grid can ever hold
    pub fn max_rows(&self) -> usize {
        match *self {
            CapacityPolicy::Fixed { n_rows } => n_rows,
            CapacityPolicy::Growing { max_rows } => max_rows,
        }
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::Growing { max_rows: 4096 }
    }
}
