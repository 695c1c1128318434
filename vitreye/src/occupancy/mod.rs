mod occupancy_grid;

#[doc(inline)]
pub use occupancy_grid::OccupancyGrid;
