//! The sides of an axis-aligned rectangle.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An enumeration of the four sides of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Side {
    /// The top side.
    Top,
    /// The bottom side.
    Bot,
    /// The left side.
    Left,
    /// The right side.
    Right,
}

impl Side {
    /// The direction of the axis along which the side's coordinate varies.
    ///
    /// The left and right sides are x-coordinates, so their direction is
    /// [`Dir::Horiz`]; the top and bottom sides are y-coordinates, so their
    /// direction is [`Dir::Vert`].
    pub const fn dir(&self) -> Dir {
        match *self {
            Self::Left | Self::Right => Dir::Horiz,
            Self::Top | Self::Bot => Dir::Vert,
        }
    }

    /// The opposite side.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Side::Top.opposite(), Side::Bot);
    /// assert_eq!(Side::Left.opposite(), Side::Right);
    /// ```
    pub const fn opposite(&self) -> Self {
        match *self {
            Self::Top => Self::Bot,
            Self::Bot => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
