//! The corners of an axis-aligned rectangle.

use array_map::{ArrayMap, Indexable};
use serde::{Deserialize, Serialize};

use crate::side::Side;

/// An enumeration of the four corners of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Corner {
    /// The lower-left corner.
    LowerLeft,
    /// The upper-left corner.
    UpperLeft,
    /// The upper-right corner.
    UpperRight,
    /// The lower-right corner.
    LowerRight,
}

impl Corner {
    /// The corner diagonally opposite this one.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Corner::LowerLeft.opposite(), Corner::UpperRight);
    /// assert_eq!(Corner::UpperLeft.opposite(), Corner::LowerRight);
    /// ```
    pub const fn opposite(&self) -> Self {
        match *self {
            Self::LowerLeft => Self::UpperRight,
            Self::UpperLeft => Self::LowerRight,
            Self::UpperRight => Self::LowerLeft,
            Self::LowerRight => Self::UpperLeft,
        }
    }

    /// The corner mirrored across the vertical axis (left and right swap).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Corner::UpperRight.flip_horiz(), Corner::UpperLeft);
    /// assert_eq!(Corner::LowerLeft.flip_horiz(), Corner::LowerRight);
    /// ```
    pub const fn flip_horiz(&self) -> Self {
        match *self {
            Self::LowerLeft => Self::LowerRight,
            Self::UpperLeft => Self::UpperRight,
            Self::UpperRight => Self::UpperLeft,
            Self::LowerRight => Self::LowerLeft,
        }
    }

    /// The corner mirrored across the horizontal axis (upper and lower swap).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Corner::UpperRight.flip_vert(), Corner::LowerRight);
    /// assert_eq!(Corner::LowerLeft.flip_vert(), Corner::UpperLeft);
    /// ```
    pub const fn flip_vert(&self) -> Self {
        match *self {
            Self::LowerLeft => Self::UpperLeft,
            Self::UpperLeft => Self::LowerLeft,
            Self::UpperRight => Self::LowerRight,
            Self::LowerRight => Self::UpperRight,
        }
    }

    /// The horizontal side ([`Side::Left`] or [`Side::Right`]) this corner touches.
    pub const fn side_x(&self) -> Side {
        match *self {
            Self::LowerLeft | Self::UpperLeft => Side::Left,
            Self::UpperRight | Self::LowerRight => Side::Right,
        }
    }

    /// The vertical side ([`Side::Bot`] or [`Side::Top`]) this corner touches.
    pub const fn side_y(&self) -> Side {
        match *self {
            Self::LowerLeft | Self::LowerRight => Side::Bot,
            Self::UpperLeft | Self::UpperRight => Side::Top,
        }
    }

    /// Returns true for the two upper corners.
    pub const fn is_upper(&self) -> bool {
        matches!(*self, Self::UpperLeft | Self::UpperRight)
    }

    /// Returns true for the two right corners.
    pub const fn is_right(&self) -> bool {
        matches!(*self, Self::UpperRight | Self::LowerRight)
    }
}

/// An association of a value with type `T` to each of the four [`Corner`]s.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Corners<T> {
    inner: ArrayMap<Corner, T, 4>,
}

impl<T> Corners<T>
where
    T: Copy,
{
    /// Creates a new [`Corners`] with `value` associated with all corners.
    pub const fn uniform(value: T) -> Self {
        Self {
            inner: ArrayMap::new([value; 4]),
        }
    }
}

impl<T> Corners<T> {
    /// Creates a new [`Corners`] with the provided values for each corner.
    pub const fn new(ll: T, ul: T, ur: T, lr: T) -> Self {
        // IMPORTANT: the ordering of array elements here must match
        // the ordering of variants in the [`Corner`] enum.
        Self {
            inner: ArrayMap::new([ll, ul, ur, lr]),
        }
    }
}

impl<T> std::ops::Index<Corner> for Corners<T> {
    type Output = T;
    fn index(&self, index: Corner) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T> std::ops::IndexMut<Corner> for Corners<T> {
    fn index_mut(&mut self, index: Corner) -> &mut Self::Output {
        &mut self.inner[index]
    }
}
