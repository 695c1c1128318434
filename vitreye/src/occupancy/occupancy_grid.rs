use log::debug;

use crate::entities::{Footprint, ItemId};
use crate::util::CapacityPolicy;

/// Row-major grid of cells, each either free or owned by an item.
/// Used to greedily pack footprints: the first fully free region (in row-major order of its top-left cell) wins.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Vec<Option<ItemId>>,
    n_cols: usize,
    n_rows: usize,
    max_rows: usize,
}

impl OccupancyGrid {
    /// Creates an empty grid of `n_cols` columns.
    /// `visible_rows` is the initial row capacity for [`CapacityPolicy::Growing`].
    pub fn new(n_cols: usize, visible_rows: usize, policy: CapacityPolicy) -> Self {
        let (n_rows, max_rows) = match policy {
            CapacityPolicy::Fixed { n_rows } => (n_rows, n_rows),
            CapacityPolicy::Growing { max_rows } => (visible_rows.clamp(1, max_rows), max_rows),
        };
        OccupancyGrid {
            cells: vec![None; n_cols * n_rows],
            n_cols,
            n_rows,
            max_rows,
        }
    }

    /// Frees every cell and re-dimensions the grid
    pub fn reset(&mut self, n_cols: usize, visible_rows: usize, policy: CapacityPolicy) {
        *self = OccupancyGrid::new(n_cols, visible_rows, policy);
    }

    /// Searches the first free region with the shape of `footprint` and marks all its cells as owned by `owner`.
    /// If no region is free, the grid grows (if allowed by its capacity policy) until one is found.
    /// Returns the index of the top-left cell of the region, or `None` if the footprint cannot be placed.
    pub fn find_and_mark(&mut self, footprint: Footprint, owner: ItemId) -> Option<usize> {
        if !self.footprint_fits(footprint) {
            return None;
        }
        let (fx, fy) = footprint.span();

        let mut start_row = 0;
        loop {
            if let Some(cell) = self.find_free(fx, fy, start_row) {
                self.mark(cell, fx, fy, owner);
                return Some(cell);
            }
            if self.n_rows >= self.max_rows {
                return None;
            }
            // nothing fit in the current rows, so a fitting region must touch one of the new rows
            start_row = (self.n_rows + 1).saturating_sub(fy);
            self.grow(fy);
        }
    }

    /// False if `footprint` can never be placed, not even in an empty grid at full capacity
    pub fn footprint_fits(&self, footprint: Footprint) -> bool {
        let (fx, fy) = footprint.span();
        fx <= self.n_cols && fy <= self.max_rows
    }

    fn find_free(&self, fx: usize, fy: usize, start_row: usize) -> Option<usize> {
        (start_row * self.n_cols..self.cells.len()).find(|&i| {
            let (row, col) = (i / self.n_cols, i % self.n_cols);
            if col + fx > self.n_cols || row + fy > self.n_rows {
                return false;
            }
            (row..row + fy).all(|r| (col..col + fx).all(|c| self.cells[r * self.n_cols + c].is_none()))
        })
    }

    fn mark(&mut self, cell: usize, fx: usize, fy: usize, owner: ItemId) {
        let (row, col) = (cell / self.n_cols, cell % self.n_cols);
        for r in row..row + fy {
            for c in col..col + fx {
                let slot = &mut self.cells[r * self.n_cols + c];
                debug_assert!(slot.is_none(), "cell {} already owned", r * self.n_cols + c);
                *slot = Some(owner);
            }
        }
    }

    /// Doubles the row capacity (at least by `min_extra_rows`), bounded by the maximum.
    /// New rows are appended, so all granted cells keep their index.
    fn grow(&mut self, min_extra_rows: usize) {
        let new_n_rows = usize::max(self.n_rows * 2, self.n_rows + min_extra_rows).min(self.max_rows);
        debug!(
            "[OCC] growing occupancy grid from {} to {} rows",
            self.n_rows, new_n_rows
        );
        self.cells.resize(self.n_cols * new_n_rows, None);
        self.n_rows = new_n_rows;
    }

    /// The item owning `cell`, if any
    pub fn owner(&self, cell: usize) -> Option<ItemId> {
        self.cells.get(cell).copied().flatten()
    }

    /// All cells owned by `owner`, in row-major order
    pub fn cells_of(&self, owner: ItemId) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, o)| **o == Some(owner))
            .map(|(i, _)| i)
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Current row capacity
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_free_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Index of the last row containing at least one owned cell
    pub fn last_occupied_row(&self) -> Option<usize> {
        self.cells
            .iter()
            .rposition(|c| c.is_some())
            .map(|i| i / self.n_cols)
    }
}
