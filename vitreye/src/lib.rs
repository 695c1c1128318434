//!
//! A masonry tile layout engine for scrollable walls of images and videos.
//!
//! Every source is classified into a discrete grid footprint based on its aspect ratio,
//! packed greedily (first fit, row-major) into a grid of fixed-size cells,
//! and given an outer background rectangle plus an aspect-correct inner content rectangle.
//!
//! Layouts can be recomputed from scratch on resize ([`Layout::relayout`]) or extended
//! one item at a time as sources stream in ([`Layout::place_item`]) without disturbing already placed tiles.
//!

/// Entities to model the wall: items, footprints, tiles and the layout engine
pub mod entities;

/// Integer pixel geometry and the tile fitting rules
pub mod geometry;

/// Cell occupancy bookkeeping for the greedy packing
pub mod occupancy;

/// Vertical scroll state applied at draw and hit-test time
pub mod scroll;

/// Importing and exporting layouts and items from and to external representations
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

use crate::entities::{Footprint, ItemId};

#[doc(inline)]
pub use entities::Layout;

#[doc(inline)]
pub use util::LayoutConfig;

/// Recoverable failures of the layout engine. None of these should terminate the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// No free region of the requested footprint exists within the occupancy capacity.
    #[error("no free {footprint:?} region left for item {item_id}")]
    PlacementOverflow { item_id: ItemId, footprint: Footprint },
    /// The window is narrower than a single tile.
    #[error("window width {window_width}px cannot fit a single {tile_width}px column")]
    DegenerateGrid { window_width: u32, tile_width: u32 },
}
