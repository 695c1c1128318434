use anyhow::{Result, ensure};

/// Stable identifier of an [`Item`], equal to its arrival index
pub type ItemId = usize;

/// A displayable source (image or video) with its intrinsic dimensions.
/// Items are never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    /// Intrinsic width in pixels, always positive
    pub width: u32,
    /// Intrinsic height in pixels, always positive
    pub height: u32,
}

impl Item {
    pub fn try_new(id: ItemId, width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "item {id} has invalid dimensions: {width}x{height}"
        );
        Ok(Item { id, width, height })
    }

    /// # Panics
    /// If either dimension is zero
    pub fn new(id: ItemId, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "item {id} has invalid dimensions: {width}x{height}"
        );
        Item { id, width, height }
    }

    /// Stand-in for a source whose dimensions could not be determined.
    /// Laid out like any other 1:1 source.
    pub fn fallback(id: ItemId) -> Self {
        Item {
            id,
            width: 1,
            height: 1,
        }
    }
}
