//! A prelude for easy import of commonly used items.

pub use crate::corner::{Corner, Corners};
pub use crate::dir::Dir;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::side::Side;
pub use crate::snap::{grid_down, grid_up};
pub use crate::span::Span;
