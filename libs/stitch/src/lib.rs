//! Corner-stitched tile planes.
//!
//! A [`Plane`] decomposes 2-D space into non-overlapping, axis-aligned
//! rectangular tiles. Every point of the plane's universe rectangle lies in
//! exactly one tile. Tiles use half-open coordinates: a tile with rectangle
//! `(l, b)-(r, t)` contains the points `(x, y)` with `l <= x < r` and
//! `b <= y < t`.
//!
//! Each tile carries four *corner stitches* linking it to its neighborhood:
//!
//! * `tr` — the topmost tile adjacent to its right edge,
//! * `rt` — the rightmost tile adjacent to its top edge,
//! * `bl` — the bottommost tile adjacent to its left edge,
//! * `lb` — the leftmost tile adjacent to its bottom edge.
//!
//! The stitches allow O(1) splits and joins and fast point location and
//! neighbor traversal without a global index. Tiles live in an arena and are
//! addressed by stable [`TileKey`] handles, so the cross-linked mesh involves
//! no ownership cycles.
//!
//! [`Plane::paint`] overwrites a rectangle with a new body and restores the
//! *canonical form* among equal-body tiles: no two horizontally adjacent
//! tiles with equal bodies share both top and bottom, and no two vertically
//! adjacent tiles with equal bodies share both left and right. Free space
//! painted this way always consists of maximal horizontal strips.
//!
//! Geometric misuse (splitting on an existing edge, joining tiles that do
//! not share a full edge, locating a point outside the universe) is a
//! programmer error and panics with the offending coordinates.
#![warn(missing_docs)]

use geometry::prelude::*;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use tracing::trace;

new_key_type! {
    /// A stable handle to a tile in a [`Plane`].
    pub struct TileKey;
}

/// Half the side length of the universe rectangle covered by every plane.
const UNIVERSE_REACH: i64 = 1 << 40;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Tile<B> {
    rect: Rect,
    body: B,
    /// Topmost neighbor along the right edge.
    tr: Option<TileKey>,
    /// Rightmost neighbor along the top edge.
    rt: Option<TileKey>,
    /// Bottommost neighbor along the left edge.
    bl: Option<TileKey>,
    /// Leftmost neighbor along the bottom edge.
    lb: Option<TileKey>,
}

/// A corner-stitched decomposition of a fixed universe rectangle into tiles
/// with bodies of type `B`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plane<B> {
    tiles: SlotMap<TileKey, Tile<B>>,
    hint: TileKey,
}

impl<B: Copy + Eq> Plane<B> {
    /// Creates a plane consisting of a single tile with the given body
    /// covering the entire universe.
    pub fn new(body: B) -> Self {
        let mut tiles = SlotMap::with_key();
        let hint = tiles.insert(Tile {
            rect: Self::universe(),
            body,
            tr: None,
            rt: None,
            bl: None,
            lb: None,
        });
        Self { tiles, hint }
    }

    /// The universe rectangle covered by every plane.
    pub fn universe() -> Rect {
        Rect::from_sides(-UNIVERSE_REACH, -UNIVERSE_REACH, UNIVERSE_REACH, UNIVERSE_REACH)
    }

    /// The number of tiles in the plane.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the plane contains no tiles. Always false: a plane covers its
    /// universe with at least one tile.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `t` refers to a live tile (joins free the absorbed tile).
    pub fn contains_key(&self, t: TileKey) -> bool {
        self.tiles.contains_key(t)
    }

    /// The rectangle covered by tile `t`.
    pub fn rect(&self, t: TileKey) -> Rect {
        self.tiles[t].rect
    }

    /// The body of tile `t`.
    pub fn body(&self, t: TileKey) -> B {
        self.tiles[t].body
    }

    /// Mutable access to the body of tile `t`.
    pub fn body_mut(&mut self, t: TileKey) -> &mut B {
        &mut self.tiles[t].body
    }

    /// The topmost tile adjacent to the right edge of `t`, if any.
    pub fn tr(&self, t: TileKey) -> Option<TileKey> {
        self.tiles[t].tr
    }

    /// The rightmost tile adjacent to the top edge of `t`, if any.
    pub fn rt(&self, t: TileKey) -> Option<TileKey> {
        self.tiles[t].rt
    }

    /// The bottommost tile adjacent to the left edge of `t`, if any.
    pub fn bl(&self, t: TileKey) -> Option<TileKey> {
        self.tiles[t].bl
    }

    /// The leftmost tile adjacent to the bottom edge of `t`, if any.
    pub fn lb(&self, t: TileKey) -> Option<TileKey> {
        self.tiles[t].lb
    }

    /// Whether tile `t` contains point `p` under the half-open convention.
    pub fn contains(&self, t: TileKey, p: Point) -> bool {
        let r = self.tiles[t].rect;
        r.left() <= p.x && p.x < r.right() && r.bot() <= p.y && p.y < r.top()
    }

    /// Locates the tile containing point `p`.
    ///
    /// The search starts from `hint` (or from an internal hint tile) and
    /// follows stitches toward `p`, first correcting the y-coordinate via
    /// `lb`/`rt`, then the x-coordinate via `bl`/`tr`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside the universe rectangle.
    pub fn point(&self, hint: Option<TileKey>, p: Point) -> TileKey {
        let u = Self::universe();
        assert!(
            u.left() <= p.x && p.x < u.right() && u.bot() <= p.y && p.y < u.top(),
            "point ({}, {}) lies outside the plane universe",
            p.x,
            p.y
        );
        let mut t = hint.unwrap_or(self.hint);
        loop {
            let r = self.tiles[t].rect;
            if p.y < r.bot() {
                t = self.tiles[t].lb.expect("stitch chain broken below universe");
            } else if p.y >= r.top() {
                t = self.tiles[t].rt.expect("stitch chain broken above universe");
            } else if p.x < r.left() {
                t = self.tiles[t].bl.expect("stitch chain broken left of universe");
            } else if p.x >= r.right() {
                t = self.tiles[t].tr.expect("stitch chain broken right of universe");
            } else {
                return t;
            }
        }
    }

    /// Splits tile `t` along the vertical line `x = x`.
    ///
    /// `t` keeps the left portion; the returned tile is the new right
    /// portion with the same body.
    ///
    /// # Panics
    ///
    /// Panics unless `x` lies strictly inside the tile.
    pub fn split_x(&mut self, t: TileKey, x: i64) -> TileKey {
        let old = self.tiles[t];
        let r = old.rect;
        assert!(
            r.left() < x && x < r.right(),
            "split_x at x = {} must fall strictly inside tile ({}, {})-({}, {})",
            x,
            r.left(),
            r.bot(),
            r.right(),
            r.top()
        );

        // The leftmost bottom neighbor of the new right portion is the
        // bottom neighbor containing x.
        let new_lb = old.lb.map(|mut q| {
            while self.tiles[q].rect.right() <= x {
                q = self.tiles[q].tr.expect("stitch chain broken along bottom edge");
            }
            q
        });
        let new = self.tiles.insert(Tile {
            rect: Rect::from_sides(x, r.bot(), r.right(), r.top()),
            body: old.body,
            tr: old.tr,
            rt: old.rt,
            bl: Some(t),
            lb: new_lb,
        });

        {
            let tile = &mut self.tiles[t];
            tile.rect = Rect::from_sides(r.left(), r.bot(), x, r.top());
            tile.tr = Some(new);
        }
        // The left portion's rightmost top neighbor is the top neighbor
        // containing x - 1.
        if let Some(mut q) = old.rt {
            while self.tiles[q].rect.left() >= x {
                q = self.tiles[q].bl.expect("stitch chain broken along top edge");
            }
            self.tiles[t].rt = Some(q);
        }

        // Repoint stitches of surrounding tiles that referenced `t` but now
        // abut the new right portion.
        for k in self.right_neighbors_of(r, old.tr) {
            if self.tiles[k].bl == Some(t) {
                self.tiles[k].bl = Some(new);
            }
        }
        for k in self.top_neighbors_of(r, old.rt) {
            if self.tiles[k].lb == Some(t) && self.tiles[k].rect.left() >= x {
                self.tiles[k].lb = Some(new);
            }
        }
        for k in self.bottom_neighbors_of(r, old.lb) {
            if self.tiles[k].rt == Some(t) && self.tiles[k].rect.right() > x {
                self.tiles[k].rt = Some(new);
            }
        }
        new
    }

    /// Splits tile `t` along the horizontal line `y = y`.
    ///
    /// `t` keeps the bottom portion; the returned tile is the new top
    /// portion with the same body.
    ///
    /// # Panics
    ///
    /// Panics unless `y` lies strictly inside the tile.
    pub fn split_y(&mut self, t: TileKey, y: i64) -> TileKey {
        let old = self.tiles[t];
        let r = old.rect;
        assert!(
            r.bot() < y && y < r.top(),
            "split_y at y = {} must fall strictly inside tile ({}, {})-({}, {})",
            y,
            r.left(),
            r.bot(),
            r.right(),
            r.top()
        );

        // The bottommost left neighbor of the new top portion is the left
        // neighbor containing y.
        let new_bl = old.bl.map(|mut q| {
            while self.tiles[q].rect.top() <= y {
                q = self.tiles[q].rt.expect("stitch chain broken along left edge");
            }
            q
        });
        let new = self.tiles.insert(Tile {
            rect: Rect::from_sides(r.left(), y, r.right(), r.top()),
            body: old.body,
            tr: old.tr,
            rt: old.rt,
            bl: new_bl,
            lb: Some(t),
        });

        {
            let tile = &mut self.tiles[t];
            tile.rect = Rect::from_sides(r.left(), r.bot(), r.right(), y);
            tile.rt = Some(new);
        }
        // The bottom portion's topmost right neighbor is the right neighbor
        // containing y - 1.
        if let Some(mut q) = old.tr {
            while self.tiles[q].rect.bot() >= y {
                q = self.tiles[q].lb.expect("stitch chain broken along right edge");
            }
            self.tiles[t].tr = Some(q);
        }

        for k in self.top_neighbors_of(r, old.rt) {
            if self.tiles[k].lb == Some(t) {
                self.tiles[k].lb = Some(new);
            }
        }
        for k in self.right_neighbors_of(r, old.tr) {
            if self.tiles[k].bl == Some(t) && self.tiles[k].rect.bot() >= y {
                self.tiles[k].bl = Some(new);
            }
        }
        for k in self.left_neighbors_of(r, old.bl) {
            if self.tiles[k].tr == Some(t) && self.tiles[k].rect.top() > y {
                self.tiles[k].tr = Some(new);
            }
        }
        new
    }

    /// Joins tile `other` into tile `t` across a shared full vertical edge.
    ///
    /// `t` is preserved as the composite (keeping its body); `other` is
    /// freed and its key becomes invalid.
    ///
    /// # Panics
    ///
    /// Panics unless the two tiles are horizontally adjacent and share both
    /// top and bottom coordinates.
    pub fn join_x(&mut self, t: TileKey, other: TileKey) {
        let a = self.tiles[t].rect;
        let b = self.tiles[other].rect;
        assert!(
            a.vspan() == b.vspan() && (a.right() == b.left() || b.right() == a.left()),
            "join_x: tiles ({}, {})-({}, {}) and ({}, {})-({}, {}) do not share a full vertical edge",
            a.left(),
            a.bot(),
            a.right(),
            a.top(),
            b.left(),
            b.bot(),
            b.right(),
            b.top()
        );
        self.adopt_neighbors(other, t);
        let other_stitches = self.tiles[other];
        {
            let tile = &mut self.tiles[t];
            if a.right() == b.left() {
                tile.tr = other_stitches.tr;
                tile.rt = other_stitches.rt;
            } else {
                tile.bl = other_stitches.bl;
                tile.lb = other_stitches.lb;
            }
            tile.rect = Rect::from_sides(
                a.left().min(b.left()),
                a.bot(),
                a.right().max(b.right()),
                a.top(),
            );
        }
        self.tiles.remove(other);
        if self.hint == other {
            self.hint = t;
        }
    }

    /// Joins tile `other` into tile `t` across a shared full horizontal
    /// edge.
    ///
    /// `t` is preserved as the composite (keeping its body); `other` is
    /// freed and its key becomes invalid.
    ///
    /// # Panics
    ///
    /// Panics unless the two tiles are vertically adjacent and share both
    /// left and right coordinates.
    pub fn join_y(&mut self, t: TileKey, other: TileKey) {
        let a = self.tiles[t].rect;
        let b = self.tiles[other].rect;
        assert!(
            a.hspan() == b.hspan() && (a.top() == b.bot() || b.top() == a.bot()),
            "join_y: tiles ({}, {})-({}, {}) and ({}, {})-({}, {}) do not share a full horizontal edge",
            a.left(),
            a.bot(),
            a.right(),
            a.top(),
            b.left(),
            b.bot(),
            b.right(),
            b.top()
        );
        self.adopt_neighbors(other, t);
        let other_stitches = self.tiles[other];
        {
            let tile = &mut self.tiles[t];
            if a.top() == b.bot() {
                tile.rt = other_stitches.rt;
                tile.tr = other_stitches.tr;
            } else {
                tile.lb = other_stitches.lb;
                tile.bl = other_stitches.bl;
            }
            tile.rect = Rect::from_sides(
                a.left(),
                a.bot().min(b.bot()),
                a.right(),
                a.top().max(b.top()),
            );
        }
        self.tiles.remove(other);
        if self.hint == other {
            self.hint = t;
        }
    }

    /// Repoints every stitch referencing `from` in the tiles surrounding it
    /// to reference `to` instead.
    fn adopt_neighbors(&mut self, from: TileKey, to: TileKey) {
        let old = self.tiles[from];
        let r = old.rect;
        for k in self.top_neighbors_of(r, old.rt) {
            if self.tiles[k].lb == Some(from) {
                self.tiles[k].lb = Some(to);
            }
        }
        for k in self.bottom_neighbors_of(r, old.lb) {
            if self.tiles[k].rt == Some(from) {
                self.tiles[k].rt = Some(to);
            }
        }
        for k in self.left_neighbors_of(r, old.bl) {
            if self.tiles[k].tr == Some(from) {
                self.tiles[k].tr = Some(to);
            }
        }
        for k in self.right_neighbors_of(r, old.tr) {
            if self.tiles[k].bl == Some(from) {
                self.tiles[k].bl = Some(to);
            }
        }
    }

    /// The tiles adjacent to the given side of `t`.
    ///
    /// Neighbors are returned in stitch-walk order: right to left along the
    /// top, left to right along the bottom, bottom to top along the left,
    /// top to bottom along the right.
    pub fn neighbors(&self, t: TileKey, side: Side) -> Vec<TileKey> {
        let tile = self.tiles[t];
        match side {
            Side::Top => self.top_neighbors_of(tile.rect, tile.rt),
            Side::Bot => self.bottom_neighbors_of(tile.rect, tile.lb),
            Side::Left => self.left_neighbors_of(tile.rect, tile.bl),
            Side::Right => self.right_neighbors_of(tile.rect, tile.tr),
        }
    }

    fn right_neighbors_of(&self, r: Rect, start: Option<TileKey>) -> Vec<TileKey> {
        let mut out = Vec::new();
        let mut q = start;
        while let Some(k) = q {
            out.push(k);
            if self.tiles[k].rect.bot() <= r.bot() {
                break;
            }
            q = self.tiles[k].lb;
        }
        out
    }

    fn top_neighbors_of(&self, r: Rect, start: Option<TileKey>) -> Vec<TileKey> {
        let mut out = Vec::new();
        let mut q = start;
        while let Some(k) = q {
            out.push(k);
            if self.tiles[k].rect.left() <= r.left() {
                break;
            }
            q = self.tiles[k].bl;
        }
        out
    }

    fn bottom_neighbors_of(&self, r: Rect, start: Option<TileKey>) -> Vec<TileKey> {
        let mut out = Vec::new();
        let mut q = start;
        while let Some(k) = q {
            out.push(k);
            if self.tiles[k].rect.right() >= r.right() {
                break;
            }
            q = self.tiles[k].tr;
        }
        out
    }

    fn left_neighbors_of(&self, r: Rect, start: Option<TileKey>) -> Vec<TileKey> {
        let mut out = Vec::new();
        let mut q = start;
        while let Some(k) = q {
            out.push(k);
            if self.tiles[k].rect.top() >= r.top() {
                break;
            }
            q = self.tiles[k].rt;
        }
        out
    }

    /// Enumerates the tiles overlapping `area` (with positive area) in a
    /// fixed order: strips down the area's left edge, each tile followed
    /// depth-first by the right neighbors it owns. A right neighbor is
    /// enumerated from the left neighbor containing the y-coordinate
    /// `max(neighbor.bot, area.bot)` on the shared edge, so every tile
    /// appears exactly once.
    pub fn tiles_in(&self, area: Rect) -> Vec<TileKey> {
        let mut out = Vec::new();
        if area.is_degenerate() {
            return out;
        }
        let mut y = area.top();
        while y > area.bot() {
            let t = self.point(None, Point::new(area.left(), y - 1));
            self.enum_right(t, area, &mut out);
            y = self.tiles[t].rect.bot();
        }
        out
    }

    fn enum_right(&self, t: TileKey, area: Rect, out: &mut Vec<TileKey>) {
        out.push(t);
        let r = self.tiles[t].rect;
        if r.right() >= area.right() {
            return;
        }
        let mut q = self.tiles[t].tr;
        while let Some(k) = q {
            let kr = self.tiles[k].rect;
            if kr.top() <= r.bot() {
                break;
            }
            if kr.bot().max(area.bot()) >= r.bot()
                && kr.bot() < area.top()
                && kr.top() > area.bot()
            {
                self.enum_right(k, area, out);
            }
            if kr.bot() <= r.bot() {
                break;
            }
            q = self.tiles[k].lb;
        }
    }

    /// Paints `area` with `body`, overwriting whatever the area contained,
    /// and restores canonical form among equal-body tiles in and around the
    /// painted area. A degenerate `area` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `area` is not contained in the universe.
    pub fn paint(&mut self, area: Rect, body: B) {
        if area.is_degenerate() {
            return;
        }
        assert!(
            Self::universe().contains_rect(area),
            "paint area ({}, {})-({}, {}) exceeds the plane universe",
            area.left(),
            area.bot(),
            area.right(),
            area.top()
        );
        trace!(
            left = area.left(),
            bot = area.bot(),
            right = area.right(),
            top = area.top(),
            "painting tile plane",
        );
        self.split_row(area.top(), area.left(), area.right());
        self.split_row(area.bot(), area.left(), area.right());
        self.split_col(area.left(), area.bot(), area.top());
        self.split_col(area.right(), area.bot(), area.top());
        for k in self.tiles_in(area) {
            debug_assert!(area.contains_rect(self.tiles[k].rect));
            self.tiles[k].body = body;
        }
        self.canonicalize(area.expand_all(1));
    }

    /// Splits every tile straddling `y` over the x-range `[x0, x1)`.
    fn split_row(&mut self, y: i64, x0: i64, x1: i64) {
        let mut x = x0;
        while x < x1 {
            let t = self.point(None, Point::new(x, y));
            let r = self.tiles[t].rect;
            if r.bot() < y {
                self.split_y(t, y);
            }
            x = r.right();
        }
    }

    /// Splits every tile straddling `x` over the y-range `[y0, y1)`.
    fn split_col(&mut self, x: i64, y0: i64, y1: i64) {
        let mut y = y0;
        while y < y1 {
            let t = self.point(None, Point::new(x, y));
            let r = self.tiles[t].rect;
            if r.left() < x {
                self.split_x(t, x);
            }
            y = r.top();
        }
    }

    /// Joins equal-body tiles in `region` until no horizontally adjacent
    /// pair shares both top and bottom and no vertically adjacent pair
    /// shares both left and right.
    fn canonicalize(&mut self, region: Rect) {
        let region = match region.intersection(Self::universe()) {
            Some(r) => r,
            None => return,
        };
        loop {
            let mut changed = false;
            for k in self.tiles_in(region) {
                if !self.tiles.contains_key(k) {
                    continue;
                }
                while let Some(n) = self.tiles[k].tr {
                    if self.tiles[n].rect.vspan() == self.tiles[k].rect.vspan()
                        && self.tiles[n].body == self.tiles[k].body
                    {
                        self.join_x(k, n);
                        changed = true;
                    } else {
                        break;
                    }
                }
            }
            for k in self.tiles_in(region) {
                if !self.tiles.contains_key(k) {
                    continue;
                }
                if let Some(n) = self.tiles[k].rt {
                    if self.tiles[n].rect.hspan() == self.tiles[k].rect.hspan()
                        && self.tiles[n].body == self.tiles[k].body
                    {
                        self.join_y(k, n);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Brute-force lookup of the tile containing `p`, for validating
    /// stitch-based point location.
    fn find_by_scan(plane: &Plane<u8>, p: Point) -> TileKey {
        let keys = plane.tiles_in(Plane::<u8>::universe());
        let mut hits: Vec<TileKey> = keys
            .into_iter()
            .filter(|&k| plane.contains(k, p))
            .collect();
        assert_eq!(hits.len(), 1, "point ({}, {}) not in exactly one tile", p.x, p.y);
        hits.pop().unwrap()
    }

    /// Validates every stitch in the plane against brute-force lookups.
    fn check_stitches(plane: &Plane<u8>) {
        let u = Plane::<u8>::universe();
        for k in plane.tiles_in(u) {
            let r = plane.rect(k);
            if r.right() < u.right() {
                let want = find_by_scan(plane, Point::new(r.right(), r.top() - 1));
                assert_eq!(plane.tr(k), Some(want), "bad tr stitch at {:?}", r);
            } else {
                assert_eq!(plane.tr(k), None);
            }
            if r.top() < u.top() {
                let want = find_by_scan(plane, Point::new(r.right() - 1, r.top()));
                assert_eq!(plane.rt(k), Some(want), "bad rt stitch at {:?}", r);
            } else {
                assert_eq!(plane.rt(k), None);
            }
            if r.left() > u.left() {
                let want = find_by_scan(plane, Point::new(r.left() - 1, r.bot()));
                assert_eq!(plane.bl(k), Some(want), "bad bl stitch at {:?}", r);
            } else {
                assert_eq!(plane.bl(k), None);
            }
            if r.bot() > u.bot() {
                let want = find_by_scan(plane, Point::new(r.left(), r.bot() - 1));
                assert_eq!(plane.lb(k), Some(want), "bad lb stitch at {:?}", r);
            } else {
                assert_eq!(plane.lb(k), None);
            }
        }
    }

    /// Checks that the tiles overlapping `area` cover it exactly once.
    fn check_coverage(plane: &Plane<u8>, area: Rect) {
        let keys = plane.tiles_in(area);
        let mut covered = 0i64;
        for &k in &keys {
            let clip = plane.rect(k).intersection(area).unwrap();
            covered += clip.width() * clip.height();
        }
        assert_eq!(covered, area.width() * area.height(), "coverage gap or overlap");
        for (i, &a) in keys.iter().enumerate() {
            for &b in &keys[i + 1..] {
                assert!(!plane.rect(a).overlaps(plane.rect(b)));
            }
        }
    }

    #[test]
    fn fresh_plane_is_one_tile() {
        let plane = Plane::new(0u8);
        assert_eq!(plane.len(), 1);
        let t = plane.point(None, Point::zero());
        assert_eq!(plane.rect(t), Plane::<u8>::universe());
    }

    #[test]
    fn paint_produces_maximal_strips() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(40, 40, 60, 60), 1);
        // Strip above, strip below, left and right side tiles, painted tile.
        assert_eq!(plane.len(), 5);

        let cell = plane.point(None, Point::new(50, 50));
        assert_eq!(plane.body(cell), 1);
        assert_eq!(plane.rect(cell), Rect::from_sides(40, 40, 60, 60));

        let above = plane.point(None, Point::new(50, 60));
        assert_eq!(plane.rect(above).bot(), 60);
        assert_eq!(plane.rect(above).hspan(), Plane::<u8>::universe().hspan());

        let left = plane.point(None, Point::new(39, 50));
        assert_eq!(plane.rect(left), Rect::from_sides(-UNIVERSE_REACH, 40, 40, 60));

        check_stitches(&plane);
        check_coverage(&plane, Rect::from_sides(0, 0, 100, 100));
    }

    #[test]
    fn neighbors_walk_each_side_in_order() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(40, 40, 60, 60), 1);
        let cell = plane.point(None, Point::new(50, 50));

        let above = plane.neighbors(cell, Side::Top);
        assert_eq!(above.len(), 1);
        assert_eq!(plane.rect(above[0]).bot(), 60);

        let left = plane.neighbors(cell, Side::Left);
        assert_eq!(left.len(), 1);
        assert_eq!(plane.rect(left[0]).right(), 40);

        // The strip above sees three neighbors on its bottom edge, left to
        // right: the left side tile, the painted tile, the right side tile.
        let below_top = plane.neighbors(above[0], Side::Bot);
        assert_eq!(below_top.len(), 3);
        assert_eq!(below_top[0], left[0]);
        assert_eq!(below_top[1], cell);
        assert_eq!(plane.rect(below_top[2]).left(), 60);
    }

    #[test]
    fn paint_merges_overlapping_rects() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(0, 0, 50, 20), 1);
        plane.paint(Rect::from_sides(30, 0, 80, 20), 1);
        let t = plane.point(None, Point::new(40, 10));
        assert_eq!(plane.rect(t), Rect::from_sides(0, 0, 80, 20));
        check_stitches(&plane);
    }

    #[test]
    fn paint_repaints_to_space() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(10, 10, 30, 30), 1);
        plane.paint(Rect::from_sides(10, 10, 30, 30), 0);
        assert_eq!(plane.len(), 1);
        check_stitches(&plane);
    }

    #[test]
    fn split_and_join_roundtrip() {
        let mut plane = Plane::new(0u8);
        let t = plane.point(None, Point::zero());
        let right = plane.split_x(t, 10);
        assert_eq!(plane.rect(t).right(), 10);
        assert_eq!(plane.rect(right).left(), 10);
        check_stitches(&plane);

        let top = plane.split_y(right, 25);
        assert_eq!(plane.rect(top).bot(), 25);
        assert_eq!(plane.rect(right).top(), 25);
        check_stitches(&plane);

        plane.join_y(right, top);
        check_stitches(&plane);
        plane.join_x(t, right);
        assert_eq!(plane.len(), 1);
        check_stitches(&plane);
    }

    #[test]
    #[should_panic(expected = "split_x")]
    fn split_on_existing_edge_panics() {
        let mut plane = Plane::new(0u8);
        let t = plane.point(None, Point::zero());
        let _ = plane.split_x(t, 10);
        let t = plane.point(None, Point::new(5, 0));
        let _ = plane.split_x(t, 10);
    }

    #[test]
    fn point_location_agrees_with_scan() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(20, 20, 40, 60), 1);
        plane.paint(Rect::from_sides(60, 10, 90, 30), 1);
        for &p in &[
            Point::new(0, 0),
            Point::new(20, 20),
            Point::new(39, 59),
            Point::new(40, 60),
            Point::new(75, 15),
            Point::new(59, 29),
            Point::new(-100, 500),
        ] {
            assert_eq!(plane.point(None, p), find_by_scan(&plane, p));
        }
    }

    #[test]
    fn enumeration_is_deterministic_and_complete() {
        let mut plane = Plane::new(0u8);
        plane.paint(Rect::from_sides(10, 10, 30, 40), 1);
        plane.paint(Rect::from_sides(50, 20, 70, 60), 1);
        let area = Rect::from_sides(0, 0, 100, 100);
        let a = plane.tiles_in(area);
        let b = plane.tiles_in(area);
        assert_eq!(a, b);
        check_coverage(&plane, area);

        // Every overlapping tile appears exactly once.
        let mut seen = a.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), a.len());
    }
}
