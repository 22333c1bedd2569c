//! Obstruction painting and boundary priming.
//!
//! Painting establishes the initial tile structure: for every subcell
//! element, the expanded canonical outline is painted as a cell tile into
//! both the search and result planes, clipped to the rounded routing area.
//! Priming then clips the free tiles of the result plane to the routing
//! area and initializes the half-edge flags so that only the outer boundary
//! of the area is pre-committed.

use geometry::prelude::*;
use stitch::Plane;
use tracing::trace;

use crate::{Body, Context, EdgeFlags, Obstruction};

/// Paints a cell tile over the expanded outline of every obstruction
/// element intersecting the routing area, into both planes.
pub(crate) fn paint_cells(
    search: &mut Plane<Body>,
    result: &mut Plane<Body>,
    obstructions: &[Obstruction],
    ctx: &Context,
) {
    for obs in obstructions {
        for bbox in obs.elements() {
            let expanded = ctx.grid.expand_cell(bbox, ctx.sep);
            let Some(clip) = expanded.intersection(ctx.area) else {
                continue;
            };
            if clip.is_degenerate() {
                continue;
            }
            trace!(
                left = clip.left(),
                bot = clip.bot(),
                right = clip.right(),
                top = clip.top(),
                "painting cell tile"
            );
            search.paint(clip, Body::Cell);
            result.paint(clip, Body::Cell);
        }
    }
}

/// Clips the space tiles of `plane` to the edges of the routing area.
///
/// Cell tiles are already clipped by painting; only free tiles can straddle
/// the area boundary. There is at most one space tile spanning the top of
/// the area (and likewise the bottom), by the horizontal strip property.
pub(crate) fn clip_to_area(plane: &mut Plane<Body>, area: Rect) {
    // Top and bottom.
    let t = plane.point(None, area.upper_right());
    let r = plane.rect(t);
    if r.top() > area.top() && r.bot() < area.top() {
        plane.split_y(t, area.top());
    }
    let t = plane.point(None, Point::new(area.right(), area.bot() - 1));
    let r = plane.rect(t);
    if r.bot() < area.bot() && r.top() > area.bot() {
        plane.split_y(t, area.bot());
    }

    // Walk up the left edge, splitting space tiles that straddle it.
    let mut p = area.lower_left();
    while p.y < area.top() {
        let t = plane.point(None, p);
        let r = plane.rect(t);
        if r.left() < p.x && r.right() > p.x {
            plane.split_x(t, p.x);
        }
        p.y = r.top();
    }

    // The right edge, in the same manner.
    let mut p = Point::new(area.right(), area.bot());
    while p.y < area.top() {
        let t = plane.point(None, p);
        let r = plane.rect(t);
        if r.left() < p.x && r.right() > p.x {
            plane.split_x(t, p.x);
        }
        p.y = r.top();
    }
}

/// Resets the flags of every space tile in the routing area, marking only
/// the halves of horizontal edges lying on the area boundary.
pub(crate) fn prime_flags(plane: &mut Plane<Body>, area: Rect) {
    for k in plane.tiles_in(area) {
        if plane.body(k).is_cell() {
            continue;
        }
        let mut flags = EdgeFlags::none();
        let r = plane.rect(k);
        if r.top() == area.top() {
            flags.mark(Corner::UpperLeft);
            flags.mark(Corner::UpperRight);
        }
        if r.bot() == area.bot() {
            flags.mark(Corner::LowerLeft);
            flags.mark(Corner::LowerRight);
        }
        *plane.body_mut(k) = Body::Space(flags);
    }
}
