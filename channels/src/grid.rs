//! Routing grids and canonical grid rounding.
//!
//! The routing grid is the lattice `origin + k * spacing` in each axis.
//! Channel boundaries do not lie on grid lines: they lie on *canonical*
//! coordinates half a grid below the grid lines, so that routing placed on
//! the grid lines keeps half a grid of clearance from every channel edge.
//!
//! All canonical coordinates are produced by subtracting `spacing / 2` from
//! a grid line, never by adding it: when the spacing is odd, adding and
//! subtracting the half-grid give different results, and subtraction keeps
//! every snap deterministic.

use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::CellSeparation;

/// A uniform routing grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoutingGrid {
    /// A point through which grid lines pass in both axes.
    pub origin: Point,
    /// The distance between adjacent grid lines.
    pub spacing: i64,
}

impl RoutingGrid {
    /// Creates a new routing grid.
    pub const fn new(origin: Point, spacing: i64) -> Self {
        Self { origin, spacing }
    }

    const fn half(&self) -> i64 {
        self.spacing / 2
    }

    /// Rounds `area` outward so that each side lies on the nearest
    /// canonical coordinate.
    ///
    /// The top and right sides move to the lowest canonical coordinate at
    /// or above them; the bottom and left sides move to the highest
    /// canonical coordinate at or below them.
    pub fn round_route_area(&self, area: Rect) -> Rect {
        let g = self.spacing;

        let mut right = grid_up(area.right(), self.origin.x, g) - self.half();
        if right < area.right() {
            right += g;
        }
        let mut left = grid_up(area.left(), self.origin.x, g) - self.half();
        if left > area.left() {
            left -= g;
        }
        let mut top = grid_up(area.top(), self.origin.y, g) - self.half();
        if top < area.top() {
            top += g;
        }
        let mut bot = grid_up(area.bot(), self.origin.y, g) - self.half();
        if bot > area.bot() {
            bot -= g;
        }
        Rect::from_sides(left, bot, right, top)
    }

    /// Expands a subcell bounding box to the canonical outline painted as an
    /// obstruction.
    ///
    /// `sep.down` is subtracted from the left and bottom and `sep.up` added
    /// to the right and top; each side then snaps outward past the next grid
    /// line to a canonical coordinate. The extra grid line left alongside
    /// each subcell gives terminals room to jog over to grid positions.
    pub fn expand_cell(&self, bbox: Rect, sep: CellSeparation) -> Rect {
        let g = self.spacing;
        let left = grid_down(bbox.left() - sep.down, self.origin.x, g) - self.half();
        let bot = grid_down(bbox.bot() - sep.down, self.origin.y, g) - self.half();
        let right = grid_up(bbox.right() + sep.up, self.origin.x, g) + g - self.half();
        let top = grid_up(bbox.top() + sep.up, self.origin.y, g) + g - self.half();
        Rect::from_sides(left, bot, right, top)
    }
}
