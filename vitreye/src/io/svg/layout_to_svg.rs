use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::Layout;
use crate::geometry::{Point, Rect};
use crate::io::svg::svg_util::{SvgDrawOptions, change_brightness};
use crate::scroll::ScrollState;

/// Renders the layout as an SVG document: a background rectangle per tile with the content rectangle inside.
///
/// With `clip_to_window` the document shows only the window at the current scroll offset (screen space),
/// otherwise the complete wall is drawn in grid space together with a frame marking the visible window.
pub fn layout_to_svg(layout: &Layout, scroll: &ScrollState, options: SvgDrawOptions) -> Document {
    let params = layout.grid_params();
    let theme = options.theme.get_theme();
    let window = Rect::new(
        0,
        0,
        i32::try_from(params.window.width).unwrap_or(i32::MAX),
        i32::try_from(params.window.height).unwrap_or(i32::MAX),
    );

    // maps a rect in grid space to the coordinate system of the document
    let to_doc = |rect: Rect| match options.clip_to_window {
        true => scroll.to_screen(rect),
        false => rect,
    };

    let vbox = match options.clip_to_window {
        true => window,
        false => Rect {
            height: i32::max(window.height, layout.content_height()),
            ..window
        },
    };

    let stroke_width = theme.stroke_width;

    let background = Rectangle::new()
        .set("x", vbox.x)
        .set("y", vbox.y)
        .set("width", vbox.width)
        .set("height", vbox.height)
        .set("fill", theme.background_fill.to_string());

    let cells_group = {
        let mut cells_group = Group::new().set("id", "cells");
        if options.occupancy && !params.is_degenerate() {
            let occupancy = layout.occupancy();
            for cell in 0..occupancy.n_cols() * occupancy.n_rows() {
                let (row, col) = (cell / params.n_cols, cell % params.n_cols);
                let rect = to_doc(Rect::new(
                    col as i32 * params.col_pitch(),
                    row as i32 * params.row_pitch(),
                    params.col_pitch(),
                    params.row_pitch(),
                ));
                let title = match occupancy.owner(cell) {
                    Some(id) => format!("cell {cell}, owned by item {id}"),
                    None => format!("cell {cell}, free"),
                };
                cells_group = cells_group.add(
                    rect_element(rect)
                        .set("fill", "none")
                        .set("stroke", theme.cell_stroke.to_string())
                        .set("stroke-width", stroke_width * 0.5)
                        .set("stroke-dasharray", format!("{}", 4.0 * stroke_width))
                        .add(Title::new(title)),
                );
            }
        }
        cells_group
    };

    let tiles_group = {
        let mut tiles_group = Group::new().set("id", "tiles");
        let tile_stroke = change_brightness(theme.tile_fill, 0.6);
        for (id, tile) in layout.tiles() {
            let (outer, inner) = (to_doc(tile.outer), to_doc(tile.inner));
            if !outer.overlaps(&vbox) {
                continue;
            }
            let item = layout.item(id);
            let title = Title::new(format!(
                "item {}, {}x{}, {:?} at cell {}",
                id, item.width, item.height, tile.footprint, tile.cell
            ));
            let mut tile_group = Group::new()
                .set("id", format!("tile_{id}"))
                .add(title)
                .add(
                    rect_element(outer)
                        .set("fill", theme.tile_fill.to_string())
                        .set("stroke", tile_stroke.to_string())
                        .set("stroke-width", stroke_width),
                )
                .add(rect_element(inner).set("fill", theme.content_fill.to_string()));

            if options.item_ids {
                tile_group = tile_group.add(
                    Text::new(format!("{id}"))
                        .set("x", outer.x + 4)
                        .set("y", outer.y + 14)
                        .set("font-size", 12)
                        .set("font-family", "monospace")
                        .set("fill", theme.label_fill.to_string()),
                );
            }
            tiles_group = tiles_group.add(tile_group);
        }
        tiles_group
    };

    let mut document = Document::new()
        .set("viewBox", (vbox.x, vbox.y, vbox.width, vbox.height))
        .set("width", vbox.width)
        .set("height", vbox.height)
        .add(background)
        .add(cells_group)
        .add(tiles_group);

    if !options.clip_to_window {
        //frame of the visible window, in grid space
        let viewport = Rect {
            y: scroll.to_grid(Point(0, 0)).y(),
            ..window
        };
        document = document.add(
            rect_element(viewport)
                .set("id", "viewport")
                .set("fill", "none")
                .set("stroke", theme.label_fill.to_string())
                .set("stroke-width", 2.0 * stroke_width)
                .set("stroke-dasharray", format!("{}", 8.0 * stroke_width))
                .add(Title::new(format!(
                    "window {}x{}, scroll offset {}",
                    window.width,
                    window.height,
                    scroll.offset()
                ))),
        );
    }

    document
}

fn rect_element(rect: Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x)
        .set("y", rect.y)
        .set("width", rect.width)
        .set("height", rect.height)
}
