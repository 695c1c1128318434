use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::util::LayoutConfig;

/// Number of grid cells (columns, rows) a tile spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Footprint {
    /// Two columns, one row
    Wide,
    /// One column, two rows
    Tall,
    /// A single cell
    Square,
}

/// Threshold on the difference between cell and item aspect ratio (height / width),
/// expressed as the exact fraction `numerator / denominator` (0.4).
const RATIO_DIFF_THRESHOLD: (i128, i128) = (2, 5);

impl Footprint {
    /// Classifies `item` based on how much its aspect ratio deviates from the nominal cell.
    ///
    /// With `diff = cell_h / cell_w - item_h / item_w`:
    /// * `diff > 0.4` on a grid with more than one column: [`Footprint::Wide`]
    /// * `diff < -0.4`: [`Footprint::Tall`]
    /// * otherwise: [`Footprint::Square`]
    ///
    /// Evaluated in integer arithmetic, so `diff == ±0.4` always resolves to [`Footprint::Square`].
    pub fn classify(item: &Item, config: &LayoutConfig, n_cols: usize) -> Footprint {
        let (tile_w, tile_h) = (config.tile_width as i128, config.tile_height as i128);
        let (item_w, item_h) = (item.width as i128, item.height as i128);
        let (t_num, t_den) = RATIO_DIFF_THRESHOLD;

        // diff = (tile_h * item_w - item_h * tile_w) / (tile_w * item_w), the denominator is positive
        let diff_num = (tile_h * item_w - item_h * tile_w) * t_den;
        let threshold = t_num * tile_w * item_w;

        if diff_num > threshold && n_cols > 1 {
            Footprint::Wide
        } else if diff_num < -threshold {
            Footprint::Tall
        } else {
            Footprint::Square
        }
    }

    /// Columns and rows spanned
    pub fn span(&self) -> (usize, usize) {
        match self {
            Footprint::Wide => (2, 1),
            Footprint::Tall => (1, 2),
            Footprint::Square => (1, 1),
        }
    }

    pub fn n_cells(&self) -> usize {
        let (fx, fy) = self.span();
        fx * fy
    }
}
