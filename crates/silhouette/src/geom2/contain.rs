//! Exact point location and polygon-in-polygon containment.
//!
//! Conventions
//! - Polygons are implicitly closed and may repeat edges (face walks around
//!   dangling edges do); crossing parity handles the repeats.
//! - `polygon_within` is inclusive: touching the outer boundary is allowed.

use num_traits::{Signed, Zero};

use super::predicates::{comparable_distance, intersection_points, midpoint, on_segment};
use super::types::{Point, Segment};

/// Where a point lies relative to a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// Exact point location by crossing parity: counts edges that cross the
/// rightward horizontal ray from `q`, each edge taken half-open in `y`.
pub fn locate(q: &Point, polygon: &[Point]) -> Location {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let mut a = &polygon[i] - q;
        let mut b = &polygon[(i + 1) % n] - q;
        if a.y > b.y {
            std::mem::swap(&mut a, &mut b);
        }
        let det = a.cross(&b);
        if det.is_zero() && !a.dot(&b).is_positive() {
            return Location::Boundary;
        }
        if !a.y.is_positive() && b.y.is_positive() && det.is_positive() {
            inside = !inside;
        }
    }
    if inside {
        Location::Inside
    } else {
        Location::Outside
    }
}

/// Edges of an implicitly closed polygon as segments.
pub fn polygon_edges(polygon: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Segment::new(polygon[i].clone(), polygon[(i + 1) % n].clone()))
}

/// Inclusive containment: every point of `inner`'s boundary lies inside or on
/// the boundary of `outer`.
///
/// Decided exactly: all vertices of `inner` must not be outside, and every
/// edge of `inner` is cut at the vertices of `outer` lying on it and at its
/// crossings with edges of `outer`; the midpoint of each piece must not be
/// outside either. Between consecutive cuts a piece cannot cross the outer
/// boundary, so its midpoint decides the whole piece.
pub fn polygon_within(inner: &[Point], outer: &[Point]) -> bool {
    if inner.iter().any(|p| locate(p, outer) == Location::Outside) {
        return false;
    }
    let outer_edges: Vec<Segment> = polygon_edges(outer).collect();
    polygon_edges(inner).all(|edge| {
        let mut cuts: Vec<Point> = vec![edge.a.clone(), edge.b.clone()];
        for p in outer.iter().filter(|p| on_segment(p, &edge)) {
            cuts.push(p.clone());
        }
        for o in &outer_edges {
            cuts.extend(intersection_points(&edge, o));
        }
        cuts.sort_by_cached_key(|p| comparable_distance(&edge.a, p));
        cuts.dedup();
        cuts.windows(2)
            .all(|w| locate(&midpoint(&w[0], &w[1]), outer) != Location::Outside)
    })
}
