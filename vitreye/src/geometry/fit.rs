use crate::entities::{Footprint, GridParams, Item};
use crate::geometry::Rect;

/// Computes the outer (background) rectangle of a tile whose top-left cell is `cell`.
/// A footprint spanning several cells also covers the margins between them.
pub fn outer_rect(cell: usize, footprint: Footprint, params: &GridParams) -> Rect {
    debug_assert!(params.n_cols > 0, "outer rect requested on a degenerate grid");
    let (fx, fy) = footprint.span();
    let (fx, fy) = (fx as i32, fy as i32);
    let column = (cell % params.n_cols) as i32;
    let row = (cell / params.n_cols) as i32;

    let (tile_w, tile_h) = (params.tile_width, params.tile_height);
    let (margin_x, margin_y) = (params.margin_x, params.margin_y);

    Rect {
        x: column * (tile_w + margin_x) + margin_x / 2,
        y: row * (tile_h + margin_y) + margin_y / 2,
        width: tile_w * fx + margin_x * (fx - 1),
        height: tile_h * fy + margin_y * (fy - 1),
    }
}

/// Computes the largest rectangle with the aspect ratio of `item` that fits inside `outer` ("contain" fit).
/// The rectangle fills one axis of `outer` and is centered along the other.
/// All divisions truncate, the branch is decided by exact cross-multiplication.
pub fn inner_rect(outer: Rect, item: &Item) -> Rect {
    let (item_w, item_h) = (item.width as i64, item.height as i64);
    let (outer_w, outer_h) = (outer.width as i64, outer.height as i64);

    if outer_h * item_w > item_h * outer_w {
        //outer is relatively taller than the item: letterbox
        let height = (outer_w * item_h / item_w) as i32;
        Rect {
            x: outer.x,
            y: outer.y + (outer.height - height) / 2,
            width: outer.width,
            height,
        }
    } else {
        //outer is relatively wider than the item (or equal): pillarbox
        let width = (outer_h * item_w / item_h) as i32;
        Rect {
            x: outer.x + (outer.width - width) / 2,
            y: outer.y,
            width,
            height: outer.height,
        }
    }
}
