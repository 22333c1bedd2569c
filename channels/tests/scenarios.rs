//! End-to-end decomposition scenarios.

use channels::{
    decompose, Body, CellSeparation, ChannelPlane, Decomposition, EdgeFlags, Obstruction,
    RoutingGrid,
};
use geometry::prelude::*;
use test_log::test;

fn run_grid(obstructions: &[Rect], area: Rect, grid: RoutingGrid) -> ChannelPlane {
    let obs: Vec<Obstruction> = obstructions.iter().copied().map(Obstruction::new).collect();
    decompose(&obs, area, grid, CellSeparation::default())
        .expect("valid parameters")
        .channels()
        .expect("non-empty routing area")
}

fn run(obstructions: &[Rect], area: Rect) -> ChannelPlane {
    run_grid(obstructions, area, RoutingGrid::new(Point::zero(), 10))
}

/// Every point of the routing area lies in exactly one tile.
fn check_coverage(plane: &ChannelPlane) {
    let area = plane.area();
    let keys = plane.plane().tiles_in(area);
    let mut covered = 0i64;
    for &k in &keys {
        let clip = plane.plane().rect(k).intersection(area).unwrap();
        covered += clip.width() * clip.height();
    }
    assert_eq!(covered, area.width() * area.height(), "coverage gap or overlap");
    for (i, &a) in keys.iter().enumerate() {
        for &b in &keys[i + 1..] {
            assert!(
                !plane.plane().rect(a).overlaps(plane.plane().rect(b)),
                "tiles overlap"
            );
        }
    }
}

/// Every channel lies entirely inside the routing area.
fn check_partition(plane: &ChannelPlane) {
    for rect in plane.channels() {
        assert!(plane.area().contains_rect(rect), "channel {rect:?} escapes the area");
    }
}

/// The tile structure (rectangles, bodies, and flags) for determinism
/// comparisons.
fn tile_list(plane: &ChannelPlane) -> Vec<(Rect, Body)> {
    plane
        .plane()
        .tiles_in(plane.area())
        .into_iter()
        .map(|k| (plane.plane().rect(k), plane.plane().body(k)))
        .collect()
}

fn check_all(obstructions: &[Rect], area: Rect) -> ChannelPlane {
    let plane = run(obstructions, area);
    check_coverage(&plane);
    check_partition(&plane);
    assert!(
        plane.undischarged_corners().is_empty(),
        "undischarged corners remain: {:?}",
        plane.undischarged_corners()
    );
    // Identical inputs give an identical plane.
    let again = run(obstructions, area);
    assert_eq!(tile_list(&plane), tile_list(&again));
    plane
}

fn sorted(mut rects: Vec<Rect>) -> Vec<Rect> {
    rects.sort();
    rects
}

#[test]
fn open_area_yields_a_single_channel() {
    let plane = check_all(&[], Rect::from_sides(0, 0, 100, 100));
    assert_eq!(plane.area(), Rect::from_sides(-5, -5, 105, 105));
    assert_eq!(plane.channels(), vec![Rect::from_sides(-5, -5, 105, 105)]);

    // The lone tile is fully flagged: all four half-edges lie on the
    // routing area boundary.
    let k = plane.plane().point(None, Point::zero());
    assert_eq!(plane.plane().body(k), Body::Space(EdgeFlags::all()));
}

#[test]
fn centered_square_obstruction_yields_four_channels() {
    // The obstruction expands to (35,35)-(65,65). Horizontal and vertical
    // clear distances tie at every corner, and ties choose vertical cuts.
    let plane = check_all(
        &[Rect::from_sides(40, 40, 60, 60)],
        Rect::from_sides(0, 0, 100, 100),
    );
    assert_eq!(
        sorted(plane.channels()),
        vec![
            Rect::from_sides(-5, -5, 35, 105),  // west
            Rect::from_sides(35, -5, 65, 35),   // south
            Rect::from_sides(35, 65, 65, 105),  // north
            Rect::from_sides(65, -5, 105, 105), // east
        ]
    );
}

#[test]
fn tall_obstruction_gets_short_caps() {
    // The obstruction expands to (35,5)-(65,95), leaving gaps of 10 above
    // and below against side clearances of 40, so every corner commits a
    // short vertical cut and the caps merge no further.
    let plane = check_all(
        &[Rect::from_sides(40, 10, 60, 90)],
        Rect::from_sides(0, 0, 100, 100),
    );
    assert_eq!(
        sorted(plane.channels()),
        vec![
            Rect::from_sides(-5, -5, 35, 105),  // west
            Rect::from_sides(35, -5, 65, 5),    // south cap
            Rect::from_sides(35, 95, 65, 105),  // north cap
            Rect::from_sides(65, -5, 105, 105), // east
        ]
    );

    // The west channel grew by merging: it keeps the top piece's NW flag
    // and takes the SW flag carried up from the bottom boundary strip.
    let west = plane.plane().point(None, Point::new(0, 50));
    let mut expect = EdgeFlags::none();
    expect.mark(Corner::UpperLeft);
    expect.mark(Corner::LowerLeft);
    assert_eq!(plane.plane().body(west), Body::Space(expect));
}

#[test]
fn two_obstructions_make_a_middle_channel() {
    let plane = check_all(
        &[
            Rect::from_sides(40, 20, 80, 80),
            Rect::from_sides(120, 20, 160, 80),
        ],
        Rect::from_sides(0, 0, 200, 100),
    );
    assert_eq!(
        sorted(plane.channels()),
        vec![
            Rect::from_sides(-5, -5, 35, 105),    // left strip
            Rect::from_sides(35, -5, 85, 15),     // south cap, first cell
            Rect::from_sides(35, 85, 85, 105),    // north cap, first cell
            Rect::from_sides(85, -5, 115, 105),   // middle strip
            Rect::from_sides(115, -5, 165, 15),   // south cap, second cell
            Rect::from_sides(115, 85, 165, 105),  // north cap, second cell
            Rect::from_sides(165, -5, 205, 105),  // right strip
        ]
    );
}

#[test]
fn odd_grid_spacing_keeps_all_edges_canonical() {
    let grid = RoutingGrid::new(Point::new(3, 3), 7);
    let obs = [Rect::from_sides(20, 20, 30, 30)];
    let plane = run_grid(&obs, Rect::from_sides(0, 0, 50, 50), grid);
    check_coverage(&plane);
    check_partition(&plane);

    // Canonical coordinates for origin 3, spacing 7 are 3 + 7k - 3 = 7k.
    assert_eq!(plane.area(), Rect::from_sides(0, 0, 56, 56));
    for k in plane.plane().tiles_in(plane.area()) {
        let r = plane.plane().rect(k);
        for side in [r.left(), r.bot(), r.right(), r.top()] {
            assert_eq!(side.rem_euclid(7), 0, "non-canonical tile edge in {r:?}");
        }
    }
}

#[test]
fn obstruction_flush_to_every_edge_leaves_one_channel() {
    // Expanded to (-5,-5)-(25,105), the cell reaches three area edges and
    // all four of its corners land on the boundary, so none participates.
    let plane = check_all(
        &[Rect::from_sides(0, 0, 20, 100)],
        Rect::from_sides(0, 0, 100, 100),
    );
    let cell = plane.plane().point(None, Point::new(0, 50));
    assert!(plane.plane().body(cell).is_cell());
    assert_eq!(plane.plane().rect(cell), Rect::from_sides(-5, -5, 25, 105));
    assert_eq!(plane.channels(), vec![Rect::from_sides(25, -5, 105, 105)]);
}

#[test]
fn flush_obstruction_discharges_only_interior_corners() {
    // Expanded to (-5,35)-(25,65): the west corners lie on the boundary and
    // are skipped; the east corners commit short vertical cuts whose pieces
    // merge into a single east channel.
    let plane = check_all(
        &[Rect::from_sides(0, 40, 20, 60)],
        Rect::from_sides(0, 0, 100, 100),
    );
    assert_eq!(
        sorted(plane.channels()),
        vec![
            Rect::from_sides(-5, -5, 25, 35),   // below the cell
            Rect::from_sides(-5, 65, 25, 105),  // above the cell
            Rect::from_sides(25, -5, 105, 105), // east
        ]
    );
}

#[test]
fn empty_rounded_area_returns_the_empty_sentinel() {
    let grid = RoutingGrid::new(Point::zero(), 10);
    let d = decompose(
        &[],
        Rect::from_sides(15, 15, 15, 15),
        grid,
        CellSeparation::default(),
    )
    .unwrap();
    assert!(matches!(d, Decomposition::Empty));
}

#[test]
fn crowded_area_preserves_invariants() {
    // A denser arrangement exercising abutting expanded outlines, caps,
    // and merge chains; the structural invariants are asserted.
    let obs = [
        Rect::from_sides(20, 20, 60, 50),
        Rect::from_sides(70, 10, 110, 40),
        Rect::from_sides(70, 60, 100, 90),
        Rect::from_sides(150, 30, 200, 80),
        Rect::from_sides(230, 120, 280, 180),
        Rect::from_sides(30, 130, 90, 160),
        Rect::from_sides(180, 140, 210, 170),
    ];
    let plane = check_all(&obs, Rect::from_sides(0, 0, 300, 200));
    assert!(plane.channels().len() > 5);
}

#[test]
fn arrays_expand_per_element() {
    // A 2x1 array with a pitch wide enough to leave a routable gap between
    // the elements: the interior edges must participate, producing a
    // channel between the two elements.
    let obs = [Obstruction::array(
        Rect::from_sides(20, 20, 50, 80),
        channels::ArrayInfo {
            cols: 2,
            rows: 1,
            xpitch: 80,
            ypitch: 0,
        },
    )];
    let plane = decompose(
        &obs,
        Rect::from_sides(0, 0, 160, 100),
        RoutingGrid::new(Point::zero(), 10),
        CellSeparation::default(),
    )
    .unwrap()
    .channels()
    .unwrap();
    check_coverage(&plane);
    check_partition(&plane);
    assert!(plane.undischarged_corners().is_empty());

    // A channel lies strictly between the two elements.
    let between = plane.plane().point(None, Point::new(70, 50));
    assert!(plane.plane().body(between).is_space());
    let r = plane.plane().rect(between);
    assert!(r.left() >= 55 && r.right() <= 95);
}
