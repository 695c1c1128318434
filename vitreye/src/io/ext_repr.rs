use serde::{Deserialize, Serialize};

use crate::entities::{Footprint, ItemId, WindowSize};
use crate::geometry::Rect;

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Arrival index of the item
    pub id: ItemId,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Where the item originates from, for example a file path
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
}

/// External representation of a [`Tile`](crate::entities::Tile).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtTile {
    pub item_id: ItemId,
    pub footprint: Footprint,
    /// Index of the top-left cell
    pub cell: usize,
    pub outer: Rect,
    pub inner: Rect,
}

/// External representation of a [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    pub window: WindowSize,
    pub tile_width: u32,
    pub tile_height: u32,
    pub n_cols: usize,
    pub margin_x: i32,
    pub margin_y: i32,
    /// Height of all occupied rows in pixels
    pub content_height: i32,
    pub tiles: Vec<ExtTile>,
    /// Items without tile
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unplaced: Vec<ItemId>,
    /// Number of failed placements since the layout was created
    pub n_overflows: usize,
}
