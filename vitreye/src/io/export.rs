use itertools::Itertools;

use crate::entities::{Item, Layout, Tile};
use crate::io::ext_repr::{ExtItem, ExtLayout, ExtTile};

pub fn export_item(item: &Item, source: Option<&str>) -> ExtItem {
    ExtItem {
        id: item.id,
        width: item.width,
        height: item.height,
        source: source.map(str::to_owned),
    }
}

/// Exports all items of the layout, `sources` (if not empty) is indexed by item id
pub fn export_items(layout: &Layout, sources: &[String]) -> Vec<ExtItem> {
    layout
        .items()
        .iter()
        .map(|item| export_item(item, sources.get(item.id).map(String::as_str)))
        .collect_vec()
}

pub fn export_tile(item: &Item, tile: &Tile) -> ExtTile {
    ExtTile {
        item_id: item.id,
        footprint: tile.footprint,
        cell: tile.cell,
        outer: tile.outer,
        inner: tile.inner,
    }
}

pub fn export_layout(layout: &Layout) -> ExtLayout {
    let params = layout.grid_params();
    let config = layout.config();
    ExtLayout {
        window: params.window,
        tile_width: config.tile_width,
        tile_height: config.tile_height,
        n_cols: params.n_cols,
        margin_x: params.margin_x,
        margin_y: params.margin_y,
        content_height: layout.content_height(),
        tiles: layout
            .tiles()
            .map(|(id, tile)| export_tile(layout.item(id), tile))
            .collect_vec(),
        unplaced: layout.unplaced().collect_vec(),
        n_overflows: layout.n_overflows(),
    }
}
