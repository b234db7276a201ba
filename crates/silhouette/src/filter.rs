//! Face filtering and exact area verification.
//!
//! Purpose
//! - Orientation filter: drop the outer walks. Within each connected
//!   component the minimum-area walk is the outer one; it is either nested
//!   as a hole into the smallest bounded face of another component that
//!   encloses it, or discarded as part of the unbounded face.
//! - Hole filter: drop faces lying within a silhouette hole (inclusive
//!   containment, see `geom2::polygon_within`).
//! - Verification: retained face areas must sum exactly to the silhouette's
//!   signed area.

use num_traits::{Signed, Zero};
use tracing::{info, warn};

use crate::arrangement::{Arrangement, VertexSet};
use crate::error::{Error, Result};
use crate::geom2::{locate, polygon_within, Location, Rational};
use crate::regions::{Components, Face, Region};
use crate::silhouette::{expected_area, SilhouetteEntry};

/// Counts from one filtering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Outer walks that bound the unbounded face.
    pub outer_discarded: usize,
    /// Outer walks nested as holes into an enclosing face.
    pub nested: usize,
    /// Faces dropped because they lie within a silhouette hole.
    pub hole_interior: usize,
    /// Faces kept.
    pub kept: usize,
}

/// Retained faces and the report of how they were chosen.
#[derive(Clone, Debug)]
pub struct FilterOutcome {
    pub faces: Vec<Face>,
    pub report: FilterReport,
}

/// Run the orientation filter and the hole filter over all walks.
pub fn filter_regions(
    regions: Vec<Region>,
    arrangement: &Arrangement,
    silhouettes: &[SilhouetteEntry],
) -> FilterOutcome {
    let vertices = &arrangement.vertices;
    let components = Components::of(arrangement);
    let (mut faces, report) = orient_and_nest(regions, vertices, &components);

    let before = faces.len();
    faces.retain(|f| !inside_any_hole(&f.boundary, vertices, silhouettes));
    let report = FilterReport {
        hole_interior: before - faces.len(),
        kept: faces.len(),
        ..report
    };
    info!(
        kept = report.kept,
        outer = report.outer_discarded,
        nested = report.nested,
        hole_interior = report.hole_interior,
        "regions filtered"
    );
    FilterOutcome { faces, report }
}

struct Walk {
    region: Region,
    area: Rational,
    component: usize,
}

fn orient_and_nest(
    regions: Vec<Region>,
    vertices: &VertexSet,
    components: &Components,
) -> (Vec<Face>, FilterReport) {
    let walks: Vec<Walk> = regions
        .into_iter()
        .filter_map(|region| {
            let component = components.of_region(&region)?;
            let area = region.signed_area(vertices);
            Some(Walk {
                region,
                area,
                component,
            })
        })
        .collect();

    // Outer walk per component: the minimum-area one (first on ties).
    let mut outer: Vec<Option<usize>> = vec![None; components.count()];
    for (k, w) in walks.iter().enumerate() {
        let better = match outer[w.component] {
            Some(best) => w.area < walks[best].area,
            None => true,
        };
        if better {
            outer[w.component] = Some(k);
        }
    }
    let is_outer = |k: usize| outer[walks[k].component] == Some(k);

    let negatives = walks.iter().filter(|w| w.area.is_negative()).count();
    let bounded = walks.len() - outer.iter().flatten().count();
    if components.count() == 1 && bounded > 0 && negatives != 1 {
        warn!(negatives, "connected arrangement should have exactly one negative region");
    }
    for (k, w) in walks.iter().enumerate() {
        if !is_outer(k) && !w.area.is_positive() {
            warn!(region = k, area = %w.area, "bounded region with non-positive area");
        }
    }

    // Enclosing face of each outer walk: smallest bounded walk of another
    // component strictly containing one of its vertices.
    let mut holes: Vec<Vec<usize>> = vec![Vec::new(); walks.len()];
    let mut report = FilterReport::default();
    for o in outer.iter().flatten().copied() {
        let probe = vertices.point(walks[o].region.cycle[0]);
        let host = walks
            .iter()
            .enumerate()
            .filter(|&(k, w)| !is_outer(k) && w.component != walks[o].component)
            .filter(|(_, w)| {
                locate(probe, &w.region.polygon(vertices)) == Location::Inside
            })
            .min_by(|(_, a), (_, b)| a.area.cmp(&b.area))
            .map(|(k, _)| k);
        match host {
            Some(h) => {
                holes[h].push(o);
                report.nested += 1;
            }
            None => report.outer_discarded += 1,
        }
    }

    let mut slots: Vec<Option<Region>> = walks.into_iter().map(|w| Some(w.region)).collect();
    let mut faces = Vec::new();
    for k in 0..slots.len() {
        if outer.contains(&Some(k)) {
            continue;
        }
        let Some(boundary) = slots[k].take() else {
            continue;
        };
        let nested = holes[k]
            .iter()
            .filter_map(|&h| slots[h].take())
            .collect();
        faces.push(Face {
            boundary,
            holes: nested,
        });
    }
    (faces, report)
}

/// Short-circuiting search: is `region` within any hole of the silhouette?
pub fn inside_any_hole(
    region: &Region,
    vertices: &VertexSet,
    silhouettes: &[SilhouetteEntry],
) -> bool {
    let polygon = region.polygon(vertices);
    silhouettes
        .iter()
        .filter(|s| !s.is_solid)
        .any(|s| polygon_within(&polygon, &s.polygon))
}

/// Expected (silhouette) and actual (retained faces) total signed areas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub expected: Rational,
    pub actual: Rational,
}

impl Verification {
    #[inline]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// Turn a mismatch into [`Error::AreaMismatch`].
    pub fn check(self) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(Error::AreaMismatch {
                expected: self.expected,
                actual: self.actual,
            })
        }
    }
}

/// Compare the retained faces' total area with the silhouette's, exactly.
pub fn verify(faces: &[Face], vertices: &VertexSet, silhouettes: &[SilhouetteEntry]) -> Verification {
    let actual = faces
        .iter()
        .fold(Rational::zero(), |acc, f| acc + f.signed_area(vertices));
    let verification = Verification {
        expected: expected_area(silhouettes),
        actual,
    };
    if verification.passed() {
        info!(area = %verification.actual, "area verified");
    } else {
        warn!(
            expected = %verification.expected,
            actual = %verification.actual,
            "area mismatch"
        );
    }
    verification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::build_arrangement;
    use crate::geom2::{rational, Point, Segment};
    use crate::regions::enumerate_regions;
    use crate::silhouette::{boundary_segments, normalize_all};

    fn p(x: i64, y: i64) -> Point {
        Point::from_ints(x, y)
    }

    fn square(x0: i64, y0: i64, side: i64) -> Vec<Point> {
        vec![
            p(x0, y0),
            p(x0 + side, y0),
            p(x0 + side, y0 + side),
            p(x0, y0 + side),
        ]
    }

    fn hole(x0: i64, y0: i64, side: i64) -> Vec<Point> {
        let mut sq = square(x0, y0, side);
        sq.reverse();
        sq
    }

    fn filtered(polygons: Vec<Vec<Point>>, extra: Vec<Segment>) -> (Arrangement, FilterOutcome, Vec<SilhouetteEntry>) {
        let entries = normalize_all(polygons).unwrap();
        let mut segs = extra;
        segs.extend(boundary_segments(&entries));
        let arr = build_arrangement(&segs).unwrap();
        let regions = enumerate_regions(&arr).unwrap();
        let out = filter_regions(regions, &arr, &entries);
        (arr, out, entries)
    }

    #[test]
    fn connected_square_drops_only_the_outer_walk() {
        let (arr, out, entries) = filtered(vec![square(0, 0, 1)], vec![]);
        assert_eq!(out.faces.len(), 1);
        assert_eq!(out.report.outer_discarded, 1);
        assert_eq!(out.report.nested, 0);
        let v = verify(&out.faces, &arr.vertices, &entries);
        assert!(v.passed());
        assert_eq!(v.actual, rational(1, 1));
    }

    #[test]
    fn hole_interior_is_dropped_and_annulus_kept() {
        let (arr, out, entries) = filtered(vec![square(0, 0, 4), hole(1, 1, 2)], vec![]);
        assert_eq!(out.report.hole_interior, 1);
        assert_eq!(out.report.nested, 1);
        assert_eq!(out.faces.len(), 1);
        let face = &out.faces[0];
        assert_eq!(face.holes.len(), 1);
        assert_eq!(face.signed_area(&arr.vertices), rational(12, 1));
        assert!(verify(&out.faces, &arr.vertices, &entries).check().is_ok());
    }

    #[test]
    fn bridged_hole_is_traced_as_one_walk() {
        let bridge = vec![Segment::new(p(0, 0), p(1, 1))];
        let (arr, out, entries) = filtered(vec![square(0, 0, 4), hole(1, 1, 2)], bridge);
        assert_eq!(out.faces.len(), 1);
        assert!(out.faces[0].holes.is_empty());
        assert_eq!(out.faces[0].signed_area(&arr.vertices), rational(12, 1));
        assert!(verify(&out.faces, &arr.vertices, &entries).passed());
    }

    #[test]
    fn floating_crease_nests_with_zero_area() {
        let crease = vec![Segment::new(p(1, 1), p(2, 3))];
        let (arr, out, entries) = filtered(vec![square(0, 0, 4)], crease);
        assert_eq!(out.faces.len(), 1);
        assert_eq!(out.faces[0].holes.len(), 1);
        assert_eq!(out.report.nested, 1);
        assert!(verify(&out.faces, &arr.vertices, &entries).passed());
    }

    #[test]
    fn mismatch_is_reported_exactly() {
        let (arr, out, mut entries) = filtered(vec![square(0, 0, 2)], vec![]);
        entries[0].polygon = square(0, 0, 1);
        let v = verify(&out.faces, &arr.vertices, &entries);
        assert!(!v.passed());
        match v.check() {
            Err(Error::AreaMismatch { expected, actual }) => {
                assert_eq!(expected, rational(1, 1));
                assert_eq!(actual, rational(4, 1));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}
