//! Exact predicates and constructions on points and segments.
//!
//! Every function here is sign-exact; nothing converts to floating point.

use std::cmp::Ordering;

use num_traits::{One, Signed, Zero};

use super::types::{rational, Point, Rational, Segment};

/// Signed area of an implicitly closed polygon (shoelace). Positive for
/// counter-clockwise order. Fewer than three points give zero.
pub fn signed_area(points: &[Point]) -> Rational {
    let n = points.len();
    if n < 3 {
        return Rational::zero();
    }
    let mut twice = Rational::zero();
    for i in 0..n {
        let j = (i + 1) % n;
        twice += points[i].cross(&points[j]);
    }
    twice / rational(2, 1)
}

/// `(a - o) × (b - o)`: positive when `o → a → b` turns left.
#[inline]
pub fn orient(o: &Point, a: &Point, b: &Point) -> Rational {
    (a - o).cross(&(b - o))
}

/// Closed-segment membership: collinear and between the endpoints.
pub fn on_segment(p: &Point, s: &Segment) -> bool {
    let a = &s.a - p;
    let b = &s.b - p;
    a.cross(&b).is_zero() && !a.dot(&b).is_positive()
}

/// Squared Euclidean distance. Monotone in the true distance, so it orders
/// points along a segment without leaving the rationals.
#[inline]
pub fn comparable_distance(from: &Point, to: &Point) -> Rational {
    let d = to - from;
    d.dot(&d)
}

#[inline]
pub fn midpoint(a: &Point, b: &Point) -> Point {
    (a + b).scale(&rational(1, 2))
}

/// Result of intersecting two closed segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intersection {
    None,
    Point(Point),
    /// Collinear overlap, reported by its two extreme points (ordered).
    Overlap(Point, Point),
}

impl Intersection {
    /// Discrete representatives: empty, one point, or the overlap endpoints.
    pub fn into_points(self) -> Vec<Point> {
        match self {
            Intersection::None => Vec::new(),
            Intersection::Point(p) => vec![p],
            Intersection::Overlap(p, q) => vec![p, q],
        }
    }
}

/// Exact intersection of two closed segments.
///
/// Non-parallel segments meet in at most one point (Cramer's rule with both
/// parameters checked against `[0, 1]`). Collinear segments report the
/// extreme points of their common part; these are always endpoints of one of
/// the inputs. Zero-length segments behave as points.
pub fn segment_intersection(s: &Segment, t: &Segment) -> Intersection {
    if s.is_degenerate() {
        return if on_segment(&s.a, t) {
            Intersection::Point(s.a.clone())
        } else {
            Intersection::None
        };
    }
    if t.is_degenerate() {
        return if on_segment(&t.a, s) {
            Intersection::Point(t.a.clone())
        } else {
            Intersection::None
        };
    }

    let r = s.direction();
    let q = t.direction();
    let denom = r.cross(&q);
    let w = &t.a - &s.a;

    if denom.is_zero() {
        if !w.cross(&r).is_zero() {
            return Intersection::None; // parallel, distinct lines
        }
        return collinear_overlap(s, t);
    }

    let ts = w.cross(&q) / &denom;
    let tt = w.cross(&r) / &denom;
    let unit = Rational::one();
    let in_unit = |x: &Rational| !x.is_negative() && *x <= unit;
    if in_unit(&ts) && in_unit(&tt) {
        Intersection::Point(&s.a + &r.scale(&ts))
    } else {
        Intersection::None
    }
}

fn collinear_overlap(s: &Segment, t: &Segment) -> Intersection {
    let mut shared: Vec<Point> = [&s.a, &s.b, &t.a, &t.b]
        .into_iter()
        .filter(|p| on_segment(p, s) && on_segment(p, t))
        .cloned()
        .collect();
    shared.sort();
    shared.dedup();
    match shared.len() {
        0 => Intersection::None,
        1 => Intersection::Point(shared.remove(0)),
        _ => {
            let last = shared.len() - 1;
            let hi = shared.swap_remove(last);
            let lo = shared.swap_remove(0);
            Intersection::Overlap(lo, hi)
        }
    }
}

/// Discrete intersection points of two segments (see [`segment_intersection`]).
#[inline]
pub fn intersection_points(s: &Segment, t: &Segment) -> Vec<Point> {
    segment_intersection(s, t).into_points()
}

/// Quadrant key of a nonzero direction, counter-clockwise from +x:
/// 0: x>0,y≥0; 1: x≤0,y>0; 2: x<0,y≤0; 3: x≥0,y<0.
pub fn quadrant(v: &Point) -> u8 {
    let (x, y) = (&v.x, &v.y);
    if x.is_positive() && !y.is_negative() {
        0
    } else if !x.is_positive() && y.is_positive() {
        1
    } else if x.is_negative() && !y.is_positive() {
        2
    } else {
        3
    }
}

/// Strict counter-clockwise order of directions starting at +x, without
/// trigonometry: quadrant first, then the sign of the cross product.
pub fn angular_cmp(a: &Point, b: &Point) -> Ordering {
    match quadrant(a).cmp(&quadrant(b)) {
        Ordering::Equal => {
            let c = a.cross(b);
            if c.is_positive() {
                Ordering::Less
            } else if c.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        o => o,
    }
}
