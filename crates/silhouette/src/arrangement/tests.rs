use super::*;
use crate::error::Error;
use crate::geom2::{rational, Point, Segment};

fn p(x: i64, y: i64) -> Point {
    Point::from_ints(x, y)
}

fn seg(ax: i64, ay: i64, bx: i64, by: i64) -> Segment {
    Segment::new(p(ax, ay), p(bx, by))
}

fn square_edges() -> Vec<Segment> {
    vec![
        seg(0, 0, 2, 0),
        seg(2, 0, 2, 2),
        seg(2, 2, 0, 2),
        seg(0, 2, 0, 0),
    ]
}

#[test]
fn square_with_cross_splits_edges() {
    let mut segs = square_edges();
    segs.push(seg(0, 0, 2, 2));
    segs.push(seg(0, 2, 2, 0));
    let arr = build_arrangement(&segs).unwrap();
    // 4 corners + centre
    assert_eq!(arr.vertices.len(), 5);
    let centre = arr.vertices.id_of(&p(1, 1)).unwrap();
    assert_eq!(arr.adjacency.degree(centre), 4);
    // 4 sides + 4 half-diagonals
    assert_eq!(arr.adjacency.edge_count(), 8);
    let corner = arr.vertices.id_of(&p(0, 0)).unwrap();
    let far = arr.vertices.id_of(&p(2, 2)).unwrap();
    assert!(!arr.adjacency.has_edge(corner, far));
    assert!(arr.adjacency.has_edge(corner, centre));
}

#[test]
fn vertices_are_sorted_and_unique() {
    let segs = vec![seg(3, 0, 0, 0), seg(0, 0, 3, 0), seg(1, -1, 1, 1)];
    let vs = collect_vertices(&segs);
    let pts = vs.as_slice();
    assert_eq!(pts.len(), 5);
    assert!(pts.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(vs.id_of(&p(1, 0)), Some(VertexId(2)));
}

#[test]
fn overlapping_segments_do_not_duplicate_edges() {
    let segs = vec![seg(0, 0, 4, 0), seg(1, 0, 3, 0), seg(0, 0, 4, 0)];
    let arr = build_arrangement(&segs).unwrap();
    assert_eq!(arr.vertices.len(), 4);
    assert_eq!(arr.adjacency.edge_count(), 3);
    for v in arr.vertices.ids() {
        assert!(arr.adjacency.degree(v) <= 2);
    }
}

#[test]
fn rational_intersections_become_vertices() {
    let segs = vec![seg(0, 0, 3, 1), seg(1, 0, 1, 5)];
    let arr = build_arrangement(&segs).unwrap();
    let third = Point::new(rational(1, 1), rational(1, 3));
    let id = arr.vertices.id_of(&third).unwrap();
    assert_eq!(arr.adjacency.degree(id), 4);
}

#[test]
fn zero_length_segment_is_rejected() {
    let segs = vec![seg(0, 0, 1, 0), seg(5, 5, 5, 5)];
    match build_arrangement(&segs) {
        Err(Error::SegmentUnderflow { index, found, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(found, 1);
        }
        other => panic!("expected underflow, got {other:?}"),
    }
}

#[test]
fn directed_edges_cover_both_orientations() {
    let arr = build_arrangement(&square_edges()).unwrap();
    let directed: Vec<DirectedEdge> = arr.adjacency.directed_edges().collect();
    assert_eq!(directed.len(), 8);
    for e in &directed {
        assert!(directed.contains(&e.reversed()));
    }
}
