//! Corner extension: cut selection, tile splitting, and merging.
//!
//! The driver enumerates the cell tiles of the search plane and tests each
//! of their four corners for eligibility. An eligible convex corner is
//! discharged by the shorter of two extensions:
//!
//! * if the horizontal clear distance is strictly shorter, the horizontal
//!   edge through the corner becomes a committed channel boundary, recorded
//!   in half-edge flags only;
//! * otherwise a column of free tiles is split along the corner's
//!   x-coordinate, and the resulting tiles are re-merged with neighbors
//!   wherever a split reproduced an existing horizontal edge.
//!
//! Every flag this module sets makes some later corner ineligible, and
//! every split creates a vertical edge that does the same, so repeated
//! passes reach a fixed point after the first.

use geometry::prelude::*;
use stitch::{Plane, TileKey};
use tracing::{debug, trace};

use crate::Body;

/// The order in which the corners of a cell tile are tested.
pub(crate) const CORNER_ORDER: [Corner; 4] = [
    Corner::LowerLeft,
    Corner::UpperLeft,
    Corner::UpperRight,
    Corner::LowerRight,
];

/// Discharges every eligible cell-tile corner.
///
/// Cell tiles are snapshotted from the search plane, which is never
/// mutated; all point location and plane surgery happens in the result
/// plane.
pub(crate) fn run(search: &Plane<Body>, result: &mut Plane<Body>, area: Rect) {
    let cells: Vec<Rect> = search
        .tiles_in(area)
        .into_iter()
        .filter(|&k| search.body(k).is_cell())
        .map(|k| search.rect(k))
        .collect();
    debug!(cells = cells.len(), "extending cell corners");

    for r in cells {
        for corner in CORNER_ORDER {
            let p = r.corner(corner);
            if let Some(tiles) = use_corner(result, area, p, corner) {
                mark_channel(result, area, tiles, p, corner);
            }
        }
    }
}

/// Tests whether the cell corner at `p` still needs a channel boundary.
///
/// Returns the two space tiles bracketing the corner: the *span* tile
/// spanning the column above (for upper corners) or below (for lower
/// corners) the corner, and the *side* tile beside the cell, filling the
/// quadrant across the corner's horizontal edge.
///
/// The corner is rejected when it lies on the routing area boundary, when
/// either bracketing tile is a cell, when a vertical tile edge already
/// passes through the corner, or when the half of the side tile's
/// horizontal edge facing the cell is already committed. Both horizontal
/// tiles must be checked for markings, since only one (the shorter) might
/// be marked.
pub(crate) fn use_corner(
    plane: &Plane<Body>,
    area: Rect,
    p: Point,
    corner: Corner,
) -> Option<[TileKey; 2]> {
    if p.x <= area.left() || p.x >= area.right() || p.y <= area.bot() || p.y >= area.top() {
        return None;
    }

    // Points locating the span tile and the side tile under the half-open
    // tile convention.
    let (p0, p1) = match corner {
        Corner::UpperRight => (p, Point::new(p.x, p.y - 1)),
        Corner::UpperLeft => (p, Point::new(p.x - 1, p.y - 1)),
        Corner::LowerRight => (Point::new(p.x, p.y - 1), p),
        Corner::LowerLeft => (Point::new(p.x, p.y - 1), Point::new(p.x - 1, p.y)),
    };

    let span = plane.point(None, p0);
    if plane.body(span).is_cell() {
        return None;
    }
    let sr = plane.rect(span);
    if sr.left() == p.x || sr.right() == p.x {
        // A vertical boundary already runs through the corner.
        return None;
    }

    let side = plane.point(Some(span), p1);
    if plane.body(side).is_cell() {
        // Not a convex corner.
        return None;
    }
    if marked(plane, side, corner.flip_horiz()) {
        return None;
    }
    Some([span, side])
}

/// Commits the shorter of the horizontal and vertical extensions from the
/// corner at `p`.
fn mark_channel(
    plane: &mut Plane<Body>,
    area: Rect,
    tiles: [TileKey; 2],
    p: Point,
    corner: Corner,
) {
    let pos = corner.is_right();
    let up = corner.is_upper();

    let x_dist = x_dist(plane, tiles, p.x, pos);
    let (y_dist, start) = y_dist(plane, area, tiles, p, up);
    trace!(
        x = p.x,
        y = p.y,
        x_dist,
        y_dist,
        "extending corner"
    );

    if x_dist < y_dist {
        mark_horizontal(plane, tiles, p.x, corner);
    } else {
        split_vertical(plane, area, start, p, up, y_dist);
    }
}

/// The distance from `x` to the nearer outer vertical edge of the two
/// bracketing tiles, in the chosen horizontal direction.
fn x_dist(plane: &Plane<Body>, tiles: [TileKey; 2], x: i64, pos: bool) -> i64 {
    let (a, b) = (plane.rect(tiles[0]), plane.rect(tiles[1]));
    if pos {
        (a.right() - x).min(b.right() - x)
    } else {
        (x - a.left()).min(x - b.left())
    }
}

/// Walks space tiles up (or down) the column at `point.x` from the span
/// tile, accumulating the clear distance to the nearest channel boundary.
///
/// The walk stops at the routing area boundary, at a cell tile, at a tile
/// whose left or right edge crosses the column, or at a horizontal
/// half-edge already committed as a channel boundary. Which flag guards the
/// crossing depends on the relative widths of the current and next tiles:
/// the flag half closest to the column on whichever tile is narrower there.
///
/// Returns the distance and the bottom tile of the would-be split column.
fn y_dist(
    plane: &Plane<Body>,
    area: Rect,
    tiles: [TileKey; 2],
    point: Point,
    up: bool,
) -> (i64, TileKey) {
    let mut current = tiles[0];
    let x = point.x;
    let y_start = point.y;
    let mut y = point.y;

    loop {
        let cr = plane.rect(current);
        if up {
            y = cr.top();
            if y >= area.top() {
                break;
            }
        } else {
            y = cr.bot();
            if y <= area.bot() {
                break;
            }
            y -= 1;
        }

        // A cell tile defines a channel boundary; going down, restore the
        // coordinate to the bottom of the last free tile.
        let next = plane.point(Some(current), Point::new(x, y));
        if plane.body(next).is_cell() {
            if !up {
                y += 1;
            }
            break;
        }

        // A vertical boundary crossing the column ends the walk.
        let nr = plane.rect(next);
        if nr.left() == x || nr.right() == x {
            break;
        }

        let flag = if cr.left() < nr.left() {
            if cr.right() > nr.right() {
                marked(plane, next, if up { Corner::LowerLeft } else { Corner::UpperLeft })
            } else {
                marked(plane, current, if up { Corner::UpperRight } else { Corner::LowerRight })
            }
        } else {
            marked(plane, current, if up { Corner::UpperLeft } else { Corner::LowerLeft })
        };
        if flag {
            if !up {
                y = cr.bot();
            }
            break;
        }
        current = next;
    }

    if up {
        (y - y_start, tiles[0])
    } else {
        (y_start - y, current)
    }
}

/// Records a horizontal cut as committed half-edge flags.
///
/// The side tile's half-edge facing the cell is always committed. If the
/// span tile reaches at least as far outward as the side tile, the cut
/// covers the side tile's whole horizontal edge, so its outer half is
/// committed too; if the side tile reaches at least as far, the cut crosses
/// into the span tile's half and its flag is set instead. Equal reaches set
/// both.
fn mark_horizontal(plane: &mut Plane<Body>, tiles: [TileKey; 2], x: i64, corner: Corner) {
    let [span, side] = tiles;
    let (span_reach, side_reach) = if corner.is_right() {
        (plane.rect(span).right() - x, plane.rect(side).right() - x)
    } else {
        (x - plane.rect(span).left(), x - plane.rect(side).left())
    };
    mark(plane, side, corner.flip_horiz());
    if span_reach >= side_reach {
        mark(plane, side, corner);
    }
    if side_reach >= span_reach {
        mark(plane, span, corner.flip_vert());
    }
}

/// Splits the column of free tiles along `x = p.x`, from `start` up to the
/// far end of the measured clear distance, merging the pieces with their
/// neighbors wherever geometry permits.
fn split_vertical(
    plane: &mut Plane<Body>,
    area: Rect,
    start: TileKey,
    p: Point,
    up: bool,
    y_dist: i64,
) {
    let x = p.x;
    let last_y = if up { p.y + y_dist } else { p.y };

    let mut tile = start;
    let mut new;
    loop {
        let r = plane.rect(tile);
        assert!(
            plane.body(tile).is_space(),
            "splitting a cell tile at ({}, {})",
            x,
            r.bot()
        );
        new = plane.split_x(tile, x);

        // The split copied the east half-edge flags onto the east portion,
        // where they now belong; clear them on the west portion. The cut
        // edge itself needs no flags: the split realizes the boundary
        // structurally.
        clear(plane, tile, Corner::UpperRight);
        clear(plane, tile, Corner::LowerRight);
        clear(plane, new, Corner::UpperLeft);
        clear(plane, new, Corner::LowerLeft);

        // Merge both portions downward where the split reproduced an
        // existing horizontal edge.
        if let Some(below) = plane.lb(new) {
            merge(plane, area, new, below);
        }
        if let Some(below) = plane.lb(tile) {
            merge(plane, area, tile, below);
        }

        if plane.rect(tile).top() >= last_y {
            break;
        }
        tile = plane.point(Some(tile), Point::new(x, plane.rect(tile).top()));
    }

    // And the final pair upward.
    if let Some(above) = plane.rt(new) {
        merge(plane, area, above, new);
    }
    if let Some(above) = plane.rt(tile) {
        merge(plane, area, above, tile);
    }
}

/// Merges two vertically adjacent space tiles if they share both side
/// coordinates, then tries to absorb exactly matching horizontal neighbors
/// of the composite.
///
/// `up` is preserved as the composite: it keeps its own top-edge flags and
/// takes the bottom-edge flags of `down`. A sideways merge likewise takes
/// the absorbed neighbor's outward half-edge flags. The secondary merge
/// matters: a vertical cut may have removed the only reason two adjacent
/// strips were separate.
fn merge(plane: &mut Plane<Body>, area: Rect, up: TileKey, down: TileKey) {
    if plane.body(up).is_cell() || plane.body(down).is_cell() {
        return;
    }
    let ur = plane.rect(up);
    let dr = plane.rect(down);
    if dr.left() != ur.left() || dr.right() != ur.right() {
        return;
    }
    assert!(
        dr.bot() >= area.bot() && ur.top() <= area.top(),
        "merging with a tile outside the routing area at ({}, {})",
        ur.left(),
        dr.bot()
    );

    set(plane, up, Corner::LowerLeft, marked(plane, down, Corner::LowerLeft));
    set(plane, up, Corner::LowerRight, marked(plane, down, Corner::LowerRight));
    plane.join_y(up, down);

    if let Some(side) = plane.bl(up) {
        let sr = plane.rect(side);
        let r = plane.rect(up);
        if plane.body(side).is_space()
            && sr.left() >= area.left()
            && sr.top() == r.top()
            && sr.bot() == r.bot()
        {
            set(plane, up, Corner::UpperLeft, marked(plane, side, Corner::UpperLeft));
            set(plane, up, Corner::LowerLeft, marked(plane, side, Corner::LowerLeft));
            plane.join_x(up, side);
        }
    }
    if let Some(side) = plane.tr(up) {
        let sr = plane.rect(side);
        let r = plane.rect(up);
        if plane.body(side).is_space()
            && sr.right() <= area.right()
            && sr.top() == r.top()
            && sr.bot() == r.bot()
        {
            set(plane, up, Corner::UpperRight, marked(plane, side, Corner::UpperRight));
            set(plane, up, Corner::LowerRight, marked(plane, side, Corner::LowerRight));
            plane.join_x(up, side);
        }
    }
}

/// Whether the half-edge at `corner` of tile `t` is committed. Cell tiles
/// are committed on every side.
fn marked(plane: &Plane<Body>, t: TileKey, corner: Corner) -> bool {
    match plane.body(t) {
        Body::Space(f) => f.marked(corner),
        Body::Cell => true,
    }
}

fn mark(plane: &mut Plane<Body>, t: TileKey, corner: Corner) {
    if let Body::Space(f) = plane.body_mut(t) {
        f.mark(corner);
    }
}

fn clear(plane: &mut Plane<Body>, t: TileKey, corner: Corner) {
    if let Body::Space(f) = plane.body_mut(t) {
        f.clear(corner);
    }
}

fn set(plane: &mut Plane<Body>, t: TileKey, corner: Corner, value: bool) {
    if let Body::Space(f) = plane.body_mut(t) {
        if value {
            f.mark(corner);
        } else {
            f.clear(corner);
        }
    }
}
