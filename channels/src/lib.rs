//! Channel decomposition for VLSI channel routing.
//!
//! Given a rectangular routing area containing placed subcell obstructions,
//! this crate partitions the free (unobstructed) area into disjoint,
//! axis-aligned rectangular *channels*, each of which becomes an independent
//! problem for a downstream channel router.
//!
//! # Grid structure
//!
//! All channel boundaries lie on *canonical* coordinates: offsets of half a
//! grid spacing below the routing grid lines, so that routing on the grid
//! lines themselves stays clear of channel edges. The routing area is first
//! rounded outward to canonical coordinates, and every obstruction outline
//! is expanded by the subcell separation and snapped outward to canonical
//! coordinates before it is painted.
//!
//! # Corner extension
//!
//! The decomposition operates on a corner-stitched tile plane
//! ([`stitch::Plane`]) whose tiles are either free space or obstruction
//! cells. Every convex corner of every cell tile must end up *discharged*:
//! either a vertical tile edge passes through it, or the horizontal
//! half-edge facing it is flagged as a committed channel boundary. To
//! discharge a corner, the algorithm measures the horizontal and vertical
//! clear distances from the corner and commits the shorter extension:
//!
//! * a **horizontal cut** only sets half-edge flags — the tile structure
//!   already contains the horizontal edge;
//! * a **vertical cut** splits a column of free tiles at the corner's
//!   x-coordinate, then re-merges tiles with their neighbors wherever a
//!   split happened to reproduce an existing edge, keeping free regions
//!   maximal where no cut was committed.
//!
//! Each space tile carries four half-edge flags, one per corner: the flag at
//! a corner records that the half of the adjacent horizontal edge nearest
//! that corner is a committed channel boundary. Two flags per edge are
//! needed because an edge can be committed on one half only, when the
//! shorter of two tiles meeting over the edge has been cut but the longer
//! has not. Cell tiles are implicitly flagged on all four corners.
//!
//! Two planes are maintained: a *search* plane enumerated to discover cell
//! corners and a *result* plane that receives all mutations, so corner
//! discovery never observes a plane being restructured. Corner enumeration
//! order is fixed (the plane's area enumeration order; within a tile the
//! corners are tested SW, NW, NE, SE), so the output partition is
//! deterministic for a given input.
//!
//! The algorithm is greedy: the partition is valid and deterministic but
//! not guaranteed to have the minimum number of channels.
#![warn(missing_docs)]

mod cut;
pub mod grid;
mod paint;

use geometry::prelude::*;
use serde::{Deserialize, Serialize};
use stitch::Plane;
use tracing::{debug, span, Level};

pub use grid::RoutingGrid;

/// Per-corner validity flags on a space tile.
///
/// The flag at corner *c* asserts that the horizontal edge adjacent to *c*
/// (the top edge for the upper corners, the bottom edge for the lower
/// corners) is a committed channel boundary on the half of that edge
/// nearest *c*.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EdgeFlags {
    corners: Corners<bool>,
}

impl EdgeFlags {
    /// Flags with no corner marked.
    pub fn none() -> Self {
        Self::default()
    }

    /// Flags with every corner marked.
    pub fn all() -> Self {
        Self {
            corners: Corners::uniform(true),
        }
    }

    /// Whether the half-edge at `corner` is committed.
    pub fn marked(&self, corner: Corner) -> bool {
        self.corners[corner]
    }

    /// Commits the half-edge at `corner`.
    pub fn mark(&mut self, corner: Corner) {
        self.corners[corner] = true;
    }

    /// Clears the half-edge at `corner`.
    pub fn clear(&mut self, corner: Corner) {
        self.corners[corner] = false;
    }
}

/// The body of a tile in a channel plane.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Body {
    /// Free area that may host a channel; carries the half-edge flags.
    Space(EdgeFlags),
    /// Area covered by a placed subcell, never part of any channel.
    ///
    /// Cell tiles carry no flags: corner-discharge code treats them as
    /// committed on every side.
    Cell,
}

impl Body {
    /// Whether this is free space.
    pub fn is_space(&self) -> bool {
        matches!(self, Body::Space(_))
    }

    /// Whether this is an obstruction.
    pub fn is_cell(&self) -> bool {
        matches!(self, Body::Cell)
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Space(EdgeFlags::default())
    }
}

/// A placed subcell obstruction in the routing area.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Obstruction {
    /// The root-frame bounding box of one instance.
    pub bbox: Rect,
    /// Array parameters, if this obstruction is an array instance.
    pub array: Option<ArrayInfo>,
}

/// Array parameters of an arrayed obstruction.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ArrayInfo {
    /// Number of columns.
    pub cols: i64,
    /// Number of rows.
    pub rows: i64,
    /// X-distance between adjacent elements.
    pub xpitch: i64,
    /// Y-distance between adjacent elements.
    pub ypitch: i64,
}

impl Obstruction {
    /// A single (non-arrayed) obstruction.
    pub fn new(bbox: Rect) -> Self {
        Self { bbox, array: None }
    }

    /// An arrayed obstruction.
    pub fn array(bbox: Rect, array: ArrayInfo) -> Self {
        Self {
            bbox,
            array: Some(array),
        }
    }

    /// The bounding boxes of the individual elements.
    ///
    /// Arrays are enumerated per element so that interior edges of the array
    /// participate in the decomposition.
    pub fn elements(&self) -> Vec<Rect> {
        match self.array {
            None => vec![self.bbox],
            Some(a) => {
                let mut out = Vec::new();
                for j in 0..a.rows {
                    for i in 0..a.cols {
                        out.push(self.bbox.translate(Point::new(i * a.xpitch, j * a.ypitch)));
                    }
                }
                out
            }
        }
    }
}

/// Separation margins between subcells and routing.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellSeparation {
    /// Margin added to the top and right of each subcell.
    pub up: i64,
    /// Margin added to the bottom and left of each subcell.
    pub down: i64,
}

impl CellSeparation {
    /// Creates a new separation.
    pub const fn new(up: i64, down: i64) -> Self {
        Self { up, down }
    }
}

/// Errors raised by [`decompose`] for malformed parameters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The routing grid spacing must be positive.
    #[error("routing grid spacing must be positive, got {0}")]
    GridSpacing(i64),
    /// Subcell separations must be nonnegative.
    #[error("subcell separation must be nonnegative, got {0}")]
    Separation(i64),
}

/// The outcome of a channel decomposition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Decomposition {
    /// The rounded routing area had no interior; nothing to decompose.
    Empty,
    /// The decomposed channel plane.
    Channels(ChannelPlane),
}

impl Decomposition {
    /// The channel plane, if the routing area was not empty.
    pub fn channels(self) -> Option<ChannelPlane> {
        match self {
            Decomposition::Empty => None,
            Decomposition::Channels(plane) => Some(plane),
        }
    }
}

/// A decomposed channel plane: every free tile inside the routing area is
/// one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPlane {
    area: Rect,
    plane: Plane<Body>,
}

impl ChannelPlane {
    /// The rounded routing area.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The underlying tile plane.
    pub fn plane(&self) -> &Plane<Body> {
        &self.plane
    }

    /// The channels, in plane enumeration order.
    pub fn channels(&self) -> Vec<Rect> {
        self.plane
            .tiles_in(self.area)
            .into_iter()
            .filter(|&k| self.plane.body(k).is_space())
            .map(|k| self.plane.rect(k))
            .collect()
    }

    /// The convex cell-tile corners whose discharge obligation is still
    /// open: no vertical tile edge passes through the corner and the
    /// inward-facing horizontal half-edge is unflagged.
    ///
    /// A completed decomposition has none; a second decomposition pass over
    /// the result would be a no-op.
    pub fn undischarged_corners(&self) -> Vec<(Point, Corner)> {
        let mut out = Vec::new();
        for k in self.plane.tiles_in(self.area) {
            if !self.plane.body(k).is_cell() {
                continue;
            }
            let r = self.plane.rect(k);
            for corner in cut::CORNER_ORDER {
                let p = r.corner(corner);
                if cut::use_corner(&self.plane, self.area, p, corner).is_some() {
                    out.push((p, corner));
                }
            }
        }
        out
    }
}

/// Decomposes the free space of `route_area` into channels.
///
/// Paints every obstruction (expanded by `sep` and one jog grid, snapped
/// outward to canonical half-grid coordinates, and clipped to the rounded
/// routing area) into the plane, then discharges every convex obstruction
/// corner with the shorter of a horizontal or vertical cut.
///
/// Returns [`Decomposition::Empty`] if the rounded routing area has no
/// interior. The returned plane is caller-owned; no state persists.
pub fn decompose(
    obstructions: &[Obstruction],
    route_area: Rect,
    grid: RoutingGrid,
    sep: CellSeparation,
) -> Result<Decomposition, Error> {
    if grid.spacing <= 0 {
        return Err(Error::GridSpacing(grid.spacing));
    }
    if sep.up < 0 {
        return Err(Error::Separation(sep.up));
    }
    if sep.down < 0 {
        return Err(Error::Separation(sep.down));
    }

    let area = grid.round_route_area(route_area);
    if area.is_degenerate() {
        return Ok(Decomposition::Empty);
    }
    let _guard = span!(
        Level::INFO,
        "decompose",
        left = area.left(),
        bot = area.bot(),
        right = area.right(),
        top = area.top()
    )
    .entered();

    let ctx = Context { grid, sep, area };

    // Two identical planes: corner discovery reads the search plane while
    // all mutation goes to the result plane.
    let mut search = Plane::new(Body::default());
    let mut result = Plane::new(Body::default());
    paint::paint_cells(&mut search, &mut result, obstructions, &ctx);
    paint::clip_to_area(&mut result, area);
    paint::prime_flags(&mut result, area);
    cut::run(&search, &mut result, area);

    let plane = ChannelPlane { area, plane: result };
    debug!(channels = plane.channels().len(), "channel decomposition complete");
    Ok(Decomposition::Channels(plane))
}

/// Read-only parameters threaded through the decomposition passes.
pub(crate) struct Context {
    pub(crate) grid: RoutingGrid,
    pub(crate) sep: CellSeparation,
    pub(crate) area: Rect,
}
