use crate::entities::Footprint;
use crate::geometry::Rect;

/// Geometry assigned to a placed [`Item`](crate::entities::Item).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Index of the top-left cell of the tile
    pub cell: usize,
    pub footprint: Footprint,
    /// Background rectangle, covering the cells of the footprint
    pub outer: Rect,
    /// Aspect-correct content rectangle, centered within `outer`
    pub inner: Rect,
}
