use super::*;
use crate::arrangement::{build_arrangement, Arrangement, DirectedEdge, VertexId};
use crate::error::Error;
use crate::geom2::{rational, Point, Rational, Segment};
use proptest::prelude::*;

fn p(x: i64, y: i64) -> Point {
    Point::from_ints(x, y)
}

fn seg(ax: i64, ay: i64, bx: i64, by: i64) -> Segment {
    Segment::new(p(ax, ay), p(bx, by))
}

fn square(x0: i64, y0: i64, side: i64) -> Vec<Segment> {
    let (x1, y1) = (x0 + side, y0 + side);
    vec![
        seg(x0, y0, x1, y0),
        seg(x1, y0, x1, y1),
        seg(x1, y1, x0, y1),
        seg(x0, y1, x0, y0),
    ]
}

fn traced(segs: &[Segment]) -> (Arrangement, Vec<Region>) {
    let arr = build_arrangement(segs).unwrap();
    let regions = enumerate_regions(&arr).unwrap();
    check_consistency(&arr, &regions).unwrap();
    (arr, regions)
}

fn sorted_areas(arr: &Arrangement, regions: &[Region]) -> Vec<Rational> {
    let mut areas: Vec<Rational> = regions
        .iter()
        .map(|r| r.signed_area(&arr.vertices))
        .collect();
    areas.sort();
    areas
}

#[test]
fn unit_square_has_inner_and_outer_walk() {
    let (arr, regions) = traced(&square(0, 0, 1));
    assert_eq!(regions.len(), 2);
    assert_eq!(
        sorted_areas(&arr, &regions),
        vec![rational(-1, 1), rational(1, 1)]
    );
}

#[test]
fn next_edge_turns_into_the_left_face() {
    let arr = build_arrangement(&square(0, 0, 1)).unwrap();
    let rot = RotationSystem::new(&arr);
    let id = |x, y| arr.vertices.id_of(&p(x, y)).unwrap();
    // (0,0) -> (1,0) continues up the right side, keeping the square on the left.
    let e = DirectedEdge::new(id(0, 0), id(1, 0));
    assert_eq!(rot.next(e).unwrap(), DirectedEdge::new(id(1, 0), id(1, 1)));
    // The reverse direction walks the outside, clockwise.
    let r = DirectedEdge::new(id(1, 0), id(0, 0));
    assert_eq!(rot.next(r).unwrap(), DirectedEdge::new(id(0, 0), id(0, 1)));
}

#[test]
fn rotation_lookup_miss_is_an_inconsistency() {
    let arr = build_arrangement(&square(0, 0, 1)).unwrap();
    let rot = RotationSystem::new(&arr);
    let id = |x, y| arr.vertices.id_of(&p(x, y)).unwrap();
    let diagonal = DirectedEdge::new(id(0, 0), id(1, 1));
    assert!(matches!(rot.next(diagonal), Err(Error::Inconsistent(_))));
}

#[test]
fn crossed_square_yields_four_triangles() {
    let mut segs = square(0, 0, 2);
    segs.push(seg(0, 0, 2, 2));
    segs.push(seg(0, 2, 2, 0));
    let (arr, regions) = traced(&segs);
    assert_eq!(regions.len(), 5);
    let areas = sorted_areas(&arr, &regions);
    assert_eq!(areas[0], rational(-4, 1));
    assert!(areas[1..].iter().all(|a| *a == rational(1, 1)));
    assert!(regions
        .iter()
        .filter(|r| r.signed_area(&arr.vertices) > rational(0, 1))
        .all(|r| r.len() == 3));
}

#[test]
fn dangling_edge_is_walked_twice_inside_its_face() {
    let mut segs = square(0, 0, 2);
    segs.push(seg(0, 0, 1, 1));
    let (arr, regions) = traced(&segs);
    assert_eq!(regions.len(), 2);
    let inner = regions
        .iter()
        .find(|r| r.signed_area(&arr.vertices) > rational(0, 1))
        .unwrap();
    assert_eq!(inner.len(), 6);
    assert_eq!(inner.signed_area(&arr.vertices), rational(4, 1));
}

#[test]
fn lone_segment_is_a_single_zero_area_walk() {
    let (arr, regions) = traced(&[seg(0, 0, 3, 1)]);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].len(), 2);
    assert_eq!(regions[0].signed_area(&arr.vertices), rational(0, 1));
}

#[test]
fn disjoint_squares_are_separate_components() {
    let mut segs = square(0, 0, 1);
    segs.extend(square(5, 5, 2));
    let (arr, regions) = traced(&segs);
    assert_eq!(Components::of(&arr).count(), 2);
    assert_eq!(regions.len(), 4);
    assert_eq!(
        sorted_areas(&arr, &regions),
        vec![rational(-4, 1), rational(-1, 1), rational(1, 1), rational(4, 1)]
    );
}

#[test]
fn consistency_check_catches_missing_walk() {
    let arr = build_arrangement(&square(0, 0, 1)).unwrap();
    let mut regions = enumerate_regions(&arr).unwrap();
    regions.pop();
    assert!(matches!(
        check_consistency(&arr, &regions),
        Err(Error::Inconsistent(_))
    ));
    let bogus = vec![Region::new(vec![VertexId(0), VertexId(3)])];
    assert!(check_consistency(&arr, &bogus).is_err());
}

fn grid_segment() -> impl Strategy<Value = Segment> {
    (0i64..=4, 0i64..=4, 0i64..=4, 0i64..=4)
        .prop_filter("non-degenerate", |(a, b, c, d)| (a, b) != (c, d))
        .prop_map(|(a, b, c, d)| seg(a, b, c, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_directed_edge_walked_once(segs in prop::collection::vec(grid_segment(), 1..7)) {
        let arr = build_arrangement(&segs).unwrap();
        let regions = enumerate_regions(&arr).unwrap();
        prop_assert!(check_consistency(&arr, &regions).is_ok());
        let walked: usize = regions.iter().map(Region::len).sum();
        prop_assert_eq!(walked, 2 * arr.adjacency.edge_count());
        let vs = arr.vertices.as_slice();
        prop_assert!(vs.windows(2).all(|w| w[0] < w[1]));
    }
}
