use log::{debug, warn};

use crate::LayoutError;
use crate::entities::{Footprint, GridParams, Item, ItemId, Tile, WindowSize};
use crate::geometry::{Point, inner_rect, outer_rect};
use crate::occupancy::OccupancyGrid;
use crate::scroll::ScrollState;
use crate::util::{LayoutConfig, assertions};

/// A [`Layout`] maps every [`Item`] of the wall to an optional [`Tile`].
///
/// Items are packed greedily in arrival order into a row-major grid of cells.
/// The layout can be recomputed from scratch for a new window size ([`Layout::relayout`]),
/// or extended with a single newly arrived item ([`Layout::place_item`]) which never touches previously placed tiles.
#[derive(Clone, Debug)]
pub struct Layout {
    config: LayoutConfig,
    params: GridParams,
    /// All items, indexed by their [`ItemId`]
    items: Vec<Item>,
    /// One slot per item, `None` if the item could not be placed
    tiles: Vec<Option<Tile>>,
    occupancy: OccupancyGrid,
    n_overflows: usize,
}

/// Summary of a [`Layout::relayout`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub n_placed: usize,
    /// Items for which no free region was found, in id order
    pub overflowed: Vec<ItemId>,
    /// True if the window could not fit a single column, in which case no item was placed
    pub degenerate: bool,
}

impl Layout {
    /// Creates an empty layout for a zero-sized window.
    /// Call [`Layout::relayout`] once the window size is known.
    pub fn new(config: LayoutConfig) -> Self {
        assert!(
            config.validate().is_ok(),
            "invalid layout configuration: {config:?}"
        );
        let params = GridParams::new(WindowSize::default(), &config);
        let occupancy = OccupancyGrid::new(params.n_cols, params.n_rows, config.capacity);
        Layout {
            config,
            params,
            items: vec![],
            tiles: vec![],
            occupancy,
            n_overflows: 0,
        }
    }

    /// Creates a layout containing all `items` and lays them out for `window`.
    /// The ids of `items` must equal their position.
    pub fn from_items(
        config: LayoutConfig,
        items: impl IntoIterator<Item = Item>,
        window: WindowSize,
    ) -> (Self, LayoutReport) {
        let mut layout = Layout::new(config);
        for item in items {
            assert_eq!(item.id, layout.next_item_id(), "item ids must be sequential");
            layout.items.push(item);
            layout.tiles.push(None);
        }
        let report = layout.relayout(window);
        (layout, report)
    }

    /// Discards all tiles and packs every item again, in id order, for a new window size.
    /// Items that do not fit are left without tile; packing continues with the next item.
    pub fn relayout(&mut self, window: WindowSize) -> LayoutReport {
        self.params = GridParams::new(window, &self.config);
        self.occupancy
            .reset(self.params.n_cols, self.params.n_rows, self.config.capacity);
        self.tiles.iter_mut().for_each(|t| *t = None);

        let mut report = LayoutReport {
            degenerate: self.params.is_degenerate(),
            ..LayoutReport::default()
        };

        if report.degenerate {
            warn!(
                "[LAYOUT] window {}x{} is too narrow for a single {}px column, no tiles laid out",
                window.width, window.height, self.config.tile_width
            );
            return report;
        }

        for id in 0..self.items.len() {
            match self.place(id) {
                Ok(_) => report.n_placed += 1,
                Err(LayoutError::PlacementOverflow { .. }) => report.overflowed.push(id),
                Err(LayoutError::DegenerateGrid { .. }) => unreachable!("grid is not degenerate"),
            }
        }

        debug!(
            "[LAYOUT] relayout for {}x{}: {} columns, margin_x {}, {}/{} items placed",
            window.width,
            window.height,
            self.params.n_cols,
            self.params.margin_x,
            report.n_placed,
            self.items.len()
        );
        debug_assert!(assertions::layout_is_consistent(self));

        report
    }

    /// Adds a newly arrived item and places it using the current occupancy.
    /// Tiles of previously placed items are never modified.
    ///
    /// The item is recorded even if it cannot be placed, so a later [`Layout::relayout`] may still place it.
    ///
    /// # Panics
    /// If `item.id` differs from [`Layout::next_item_id`]
    pub fn place_item(&mut self, item: Item) -> Result<Tile, LayoutError> {
        assert_eq!(item.id, self.next_item_id(), "item ids must be sequential");
        self.items.push(item);
        self.tiles.push(None);

        let result = self.place(item.id);

        debug_assert!(assertions::tile_is_isolated(self, item.id));
        debug_assert!(assertions::occupancy_matches_tiles(self));

        result
    }

    fn place(&mut self, id: ItemId) -> Result<Tile, LayoutError> {
        let item = self.items[id];
        if self.params.is_degenerate() {
            return Err(LayoutError::DegenerateGrid {
                window_width: self.params.window.width,
                tile_width: self.config.tile_width,
            });
        }

        let footprint = Footprint::classify(&item, &self.config, self.params.n_cols);
        match self.occupancy.find_and_mark(footprint, id) {
            Some(cell) => {
                let outer = outer_rect(cell, footprint, &self.params);
                let inner = inner_rect(outer, &item);
                let tile = Tile {
                    cell,
                    footprint,
                    outer,
                    inner,
                };
                self.tiles[id] = Some(tile);
                debug!(
                    "[LAYOUT] placed item {} ({}x{}) as {:?} at cell {}",
                    id, item.width, item.height, footprint, cell
                );
                Ok(tile)
            }
            None => {
                self.n_overflows += 1;
                Err(LayoutError::PlacementOverflow {
                    item_id: id,
                    footprint,
                })
            }
        }
    }

    /// Resolves a point in screen space (after scrolling) to the item whose outer tile contains it.
    /// Margins between tiles resolve to `None`.
    pub fn item_at(&self, screen_point: Point, scroll: &ScrollState) -> Option<ItemId> {
        let point = scroll.to_grid(screen_point);
        let cell = self.params.cell_at(point)?;
        let id = self.occupancy.owner(cell)?;
        let tile = self.tiles[id].as_ref()?;
        tile.outer.contains_point(point).then_some(id)
    }

    /// The item owning `cell`, if any
    pub fn item_at_cell(&self, cell: usize) -> Option<ItemId> {
        self.occupancy.owner(cell)
    }

    /// The id the next arriving item must carry
    pub fn next_item_id(&self) -> ItemId {
        self.items.len()
    }

    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id]
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn tile(&self, id: ItemId) -> Option<&Tile> {
        self.tiles.get(id).and_then(|t| t.as_ref())
    }

    /// All placed tiles, in id order
    pub fn tiles(&self) -> impl Iterator<Item = (ItemId, &Tile)> + Clone {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(id, t)| t.as_ref().map(|t| (id, t)))
    }

    /// Ids of all items without tile
    pub fn unplaced(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_none())
            .map(|(id, _)| id)
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn n_placed(&self) -> usize {
        self.tiles.iter().flatten().count()
    }

    /// Number of failed placements since the layout was created
    pub fn n_overflows(&self) -> usize {
        self.n_overflows
    }

    /// Height in pixels of all occupied rows, including their margins
    pub fn content_height(&self) -> i32 {
        self.occupancy
            .last_occupied_row()
            .map_or(0, |row| (row as i32 + 1) * self.params.row_pitch())
    }

    pub fn grid_params(&self) -> &GridParams {
        &self.params
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.n_placed() == 0
    }
}
