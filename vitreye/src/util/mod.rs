/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::CapacityPolicy;
#[doc(inline)]
pub use config::LayoutConfig;
#[doc(inline)]
pub use config::MAX_TILE_DIMENSION;
