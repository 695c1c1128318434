mod footprint;
mod grid_params;
mod item;
mod layout;
mod tile;

#[doc(inline)]
pub use footprint::Footprint;

#[doc(inline)]
pub use grid_params::GridParams;

#[doc(inline)]
pub use grid_params::WindowSize;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemId;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use layout::LayoutReport;

#[doc(inline)]
pub use tile::Tile;
