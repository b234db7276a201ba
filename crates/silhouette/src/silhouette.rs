//! Silhouette polygons: orientation normalization and the expected area.
//!
//! A raw polygon's winding carries meaning: counter-clockwise pieces add
//! area, clockwise pieces are holes. After normalization every polygon is
//! counter-clockwise and the original winding survives in `is_solid`.

use num_traits::{Signed, Zero};

use crate::error::{Error, Result};
use crate::geom2::{polygon_edges, signed_area, Point, Polygon, Rational, Segment};

/// Positively oriented silhouette polygon plus its original winding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SilhouetteEntry {
    pub polygon: Polygon,
    /// True iff the raw polygon was already counter-clockwise.
    pub is_solid: bool,
}

impl SilhouetteEntry {
    /// Normalize a raw polygon. Fewer than three points or zero area is
    /// rejected; the error index is 0 (use [`normalize_all`] for indexed
    /// errors).
    pub fn normalize(polygon: Polygon) -> Result<Self> {
        Self::normalize_indexed(0, polygon)
    }

    fn normalize_indexed(index: usize, mut polygon: Polygon) -> Result<Self> {
        if polygon.len() < 3 {
            return Err(Error::DegeneratePolygon {
                index,
                reason: format!("{} points, need at least 3", polygon.len()),
            });
        }
        let area = signed_area(&polygon);
        if area.is_zero() {
            return Err(Error::DegeneratePolygon {
                index,
                reason: "zero signed area".to_string(),
            });
        }
        let is_solid = area.is_positive();
        if !is_solid {
            polygon.reverse();
        }
        Ok(Self { polygon, is_solid })
    }

    /// Always positive after normalization.
    #[inline]
    pub fn area(&self) -> Rational {
        signed_area(&self.polygon)
    }

    /// Contribution to the silhouette area: `+area` if solid, `-area` if a hole.
    pub fn signed_contribution(&self) -> Rational {
        if self.is_solid {
            self.area()
        } else {
            -self.area()
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.polygon
    }
}

/// Normalize every raw polygon, reporting the index of the first bad one.
pub fn normalize_all(polygons: Vec<Polygon>) -> Result<Vec<SilhouetteEntry>> {
    polygons
        .into_iter()
        .enumerate()
        .map(|(i, p)| SilhouetteEntry::normalize_indexed(i, p))
        .collect()
}

/// Every silhouette edge as a segment, in polygon order.
pub fn boundary_segments(entries: &[SilhouetteEntry]) -> Vec<Segment> {
    entries
        .iter()
        .flat_map(|e| polygon_edges(&e.polygon))
        .collect()
}

/// `Σ (area if solid else -area)`: the area the retained faces must add up to.
pub fn expected_area(entries: &[SilhouetteEntry]) -> Rational {
    entries
        .iter()
        .fold(Rational::zero(), |acc, e| acc + e.signed_contribution())
}
