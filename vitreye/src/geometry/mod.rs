mod fit;
mod rect;

#[doc(inline)]
pub use fit::inner_rect;
#[doc(inline)]
pub use fit::outer_rect;
#[doc(inline)]
pub use rect::Point;
#[doc(inline)]
pub use rect::Rect;
