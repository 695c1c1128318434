use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::entities::{Item, ItemId, Layout, Tile};

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn layout_is_consistent(layout: &Layout) -> bool {
    all_inner_rects_fit(layout) && no_overlapping_tiles(layout) && occupancy_matches_tiles(layout)
}

/// Every inner rect lies within its outer rect and preserves the aspect ratio of its item
pub fn all_inner_rects_fit(layout: &Layout) -> bool {
    layout.tiles().all(|(id, tile)| {
        let item = layout.item(id);
        let fits = tile.outer.contains(&tile.inner) && inner_preserves_aspect(item, tile);
        if !fits {
            error!("inner rect of item {id} does not fit: {tile:?} for {item:?}");
        }
        fits
    })
}

/// The inner rect fills one axis of the outer rect and the other axis
/// deviates at most one pixel from the exact aspect ratio of the item.
pub fn inner_preserves_aspect(item: &Item, tile: &Tile) -> bool {
    let (inner, outer) = (tile.inner, tile.outer);
    let (item_w, item_h) = (item.width as f64, item.height as f64);
    let exact_height = inner.width as f64 * item_h / item_w;
    let exact_width = inner.height as f64 * item_w / item_h;

    let letterboxed = inner.width == outer.width
        && approx_eq!(f64, exact_height, inner.height as f64, epsilon = 1.0);
    let pillarboxed = inner.height == outer.height
        && approx_eq!(f64, exact_width, inner.width as f64, epsilon = 1.0);

    letterboxed || pillarboxed
}

/// No two outer rects share any pixel
pub fn no_overlapping_tiles(layout: &Layout) -> bool {
    layout
        .tiles()
        .tuple_combinations()
        .all(|((id_a, a), (id_b, b))| {
            let overlap = a.outer.overlaps(&b.outer);
            if overlap {
                error!("tiles of items {id_a} and {id_b} overlap: {a:?}, {b:?}");
            }
            !overlap
        })
}

/// The tile of `id` (if any) does not overlap any other tile
pub fn tile_is_isolated(layout: &Layout, id: ItemId) -> bool {
    match layout.tile(id) {
        None => true,
        Some(tile) => layout
            .tiles()
            .filter(|(other_id, _)| *other_id != id)
            .all(|(_, other)| !tile.outer.overlaps(&other.outer)),
    }
}

/// Every tile owns exactly the cells covered by its footprint, and no cell is owned by an unplaced item
pub fn occupancy_matches_tiles(layout: &Layout) -> bool {
    let occupancy = layout.occupancy();
    let n_cols = occupancy.n_cols();

    let tiles_match = layout.tiles().all(|(id, tile)| {
        let (fx, fy) = tile.footprint.span();
        let (row, col) = (tile.cell / n_cols, tile.cell % n_cols);
        let expected = (row..row + fy)
            .flat_map(|r| (col..col + fx).map(move |c| r * n_cols + c))
            .collect_vec();
        let owned = occupancy.cells_of(id).collect_vec();
        if expected != owned {
            error!("item {id} owns cells {owned:?}, expected {expected:?}");
        }
        expected == owned
    });

    let n_owned_cells = occupancy.n_rows() * n_cols - occupancy.n_free_cells();
    let n_tile_cells = layout
        .tiles()
        .map(|(_, t)| t.footprint.n_cells())
        .sum::<usize>();

    tiles_match && n_owned_cells == n_tile_cells
}
