//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::corner::Corner;
use crate::point::Point;
use crate::side::Side;
use crate::span::Span;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(
    Debug, Default, Copy, Clone, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a new rectangle from the given opposite corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::new(Point::new(30, 20), Point::new(15, 40));
    /// assert_eq!(rect.left(), 15);
    /// assert_eq!(rect.bot(), 20);
    /// assert_eq!(rect.right(), 30);
    /// assert_eq!(rect.top(), 40);
    /// ```
    #[inline]
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        let p0 = lower_left;
        let p1 = upper_right;
        Self {
            p0: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            p1: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15, 20, 30, 40);
    /// assert_eq!(rect.left(), 15);
    /// assert_eq!(rect.bot(), 20);
    /// assert_eq!(rect.right(), 30);
    /// assert_eq!(rect.top(), 40);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    #[inline]
    pub fn from_sides(left: i64, bot: i64, right: i64, top: i64) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({}) <= right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({}) <= top ({})",
            bot,
            top
        );
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top),
    /// but returns `None` if the given sides would make the rectangle empty.
    ///
    /// The rectangle is empty if the left edge is beyond the right edge,
    /// or if the bottom edge is above the top edge.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides_option(15, 20, 30, 40);
    /// assert_eq!(rect, Some(Rect::from_sides(15, 20, 30, 40)));
    ///
    /// let rect = Rect::from_sides_option(10, 20, 0, 40);
    /// assert_eq!(rect, None);
    /// ```
    #[inline]
    pub fn from_sides_option(left: i64, bot: i64, right: i64, top: i64) -> Option<Self> {
        if left > right || bot > top {
            None
        } else {
            Some(Self::from_sides(left, bot, right, top))
        }
    }

    /// Creates a rectangle from horizontal and vertical [`Span`]s.
    pub const fn from_spans(h: Span, v: Span) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> i64 {
        self.p0.y
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> i64 {
        self.p1.y
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> i64 {
        self.p0.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.p1.x
    }

    /// Returns the lower-left corner point.
    #[inline]
    pub const fn lower_left(&self) -> Point {
        self.p0
    }

    /// Returns the upper-right corner point.
    #[inline]
    pub const fn upper_right(&self) -> Point {
        self.p1
    }

    /// Returns the coordinate of the given [`Side`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15, 20, 30, 40);
    /// assert_eq!(rect.side(Side::Left), 15);
    /// assert_eq!(rect.side(Side::Top), 40);
    /// ```
    pub const fn side(&self, side: Side) -> i64 {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
            Side::Bot => self.bot(),
            Side::Top => self.top(),
        }
    }

    /// Returns the point at the given [`Corner`].
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(15, 20, 30, 40);
    /// assert_eq!(rect.corner(Corner::LowerLeft), Point::new(15, 20));
    /// assert_eq!(rect.corner(Corner::UpperRight), Point::new(30, 40));
    /// assert_eq!(rect.corner(Corner::UpperLeft), Point::new(15, 40));
    /// assert_eq!(rect.corner(Corner::LowerRight), Point::new(30, 20));
    /// ```
    pub const fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::LowerLeft => self.p0,
            Corner::UpperLeft => Point::new(self.p0.x, self.p1.y),
            Corner::UpperRight => self.p1,
            Corner::LowerRight => Point::new(self.p1.x, self.p0.y),
        }
    }

    /// Returns the horizontal [`Span`] of the rectangle.
    pub const fn hspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has p0.x <= p1.x
            Span::new_unchecked(self.p0.x, self.p1.x)
        }
    }

    /// Returns the vertical span of the rectangle.
    pub const fn vspan(&self) -> Span {
        unsafe {
            // SAFETY: A valid Rect has p0.y <= p1.y
            Span::new_unchecked(self.p0.y, self.p1.y)
        }
    }

    /// Returns the horizontal width of the rectangle.
    #[inline]
    pub const fn width(&self) -> i64 {
        self.p1.x - self.p0.x
    }

    /// Returns the vertical height of the rectangle.
    #[inline]
    pub const fn height(&self) -> i64 {
        self.p1.y - self.p0.y
    }

    /// Returns whether the rectangle has zero width or zero height.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert!(Rect::from_sides(10, 20, 10, 40).is_degenerate());
    /// assert!(!Rect::from_sides(10, 20, 30, 40).is_degenerate());
    /// ```
    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the rectangle expanded by `amount` on all four sides.
    pub const fn expand_all(&self, amount: i64) -> Self {
        Self {
            p0: Point::new(self.p0.x - amount, self.p0.y - amount),
            p1: Point::new(self.p1.x + amount, self.p1.y + amount),
        }
    }

    /// Returns the intersection of this rectangle with `other`, or `None` if
    /// the two do not overlap (sharing only an edge counts as overlapping
    /// with zero area).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 100, 100);
    /// let r2 = Rect::from_sides(40, -20, 140, 60);
    /// assert_eq!(r1.intersection(r2), Some(Rect::from_sides(40, 0, 100, 60)));
    ///
    /// let r3 = Rect::from_sides(200, 0, 300, 100);
    /// assert_eq!(r1.intersection(r3), None);
    /// ```
    pub fn intersection(&self, other: Rect) -> Option<Rect> {
        Rect::from_sides_option(
            self.left().max(other.left()),
            self.bot().max(other.bot()),
            self.right().min(other.right()),
            self.top().min(other.top()),
        )
    }

    /// Returns whether this rectangle and `other` overlap with positive area.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0, 0, 100, 100);
    /// assert!(r1.overlaps(Rect::from_sides(50, 50, 150, 150)));
    /// // Sharing only an edge is not an overlap.
    /// assert!(!r1.overlaps(Rect::from_sides(100, 0, 200, 100)));
    /// ```
    pub fn overlaps(&self, other: Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bot() < other.top()
            && other.bot() < self.top()
    }

    /// Returns whether this rectangle contains `other` entirely.
    pub fn contains_rect(&self, other: Rect) -> bool {
        self.left() <= other.left()
            && self.bot() <= other.bot()
            && self.right() >= other.right()
            && self.top() >= other.top()
    }

    /// Returns the rectangle translated so that its lower-left corner moves
    /// by the given offset.
    pub const fn translate(&self, ofs: Point) -> Self {
        Self {
            p0: Point::new(self.p0.x + ofs.x, self.p0.y + ofs.y),
            p1: Point::new(self.p1.x + ofs.x, self.p1.y + ofs.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn intersection_clips_to_overlap() {
        let r1 = Rect::from_sides(10, 25, 30, 50);
        let r2 = Rect::from_sides(20, 15, 70, 35);
        assert_eq!(r1.intersection(r2), Some(Rect::from_sides(20, 25, 30, 35)));
        assert_eq!(r2.intersection(r1), Some(Rect::from_sides(20, 25, 30, 35)));
    }

    #[test]
    fn edge_adjacent_rects_intersect_degenerately() {
        let r1 = Rect::from_sides(0, 0, 10, 10);
        let r2 = Rect::from_sides(10, 0, 20, 10);
        let i = r1.intersection(r2).unwrap();
        assert!(i.is_degenerate());
        assert!(!r1.overlaps(r2));
    }
}
