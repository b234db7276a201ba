//! Region (face walk) and Face types.

use num_traits::Zero;

use crate::arrangement::{DirectedEdge, VertexId, VertexSet};
use crate::geom2::{signed_area, Point, Rational};

/// One face-boundary walk: the tail vertex of every directed edge visited,
/// in walk order. Bounded faces come out counter-clockwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub cycle: Vec<VertexId>,
}

impl Region {
    #[inline]
    pub fn new(cycle: Vec<VertexId>) -> Self {
        Self { cycle }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    pub fn polygon(&self, vertices: &VertexSet) -> Vec<Point> {
        vertices.polygon(&self.cycle)
    }

    pub fn signed_area(&self, vertices: &VertexSet) -> Rational {
        signed_area(&self.polygon(vertices))
    }

    /// Directed edges walked, closing back to the first vertex.
    pub fn directed_edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        let n = self.cycle.len();
        (0..n).map(move |i| DirectedEdge::new(self.cycle[i], self.cycle[(i + 1) % n]))
    }
}

/// A retained face: a positive boundary walk plus the outer walks of other
/// components nested directly inside it. In a connected arrangement `holes`
/// is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub boundary: Region,
    pub holes: Vec<Region>,
}

impl Face {
    pub fn simple(boundary: Region) -> Self {
        Self {
            boundary,
            holes: Vec::new(),
        }
    }

    /// Boundary area plus the (non-positive) hole walk areas.
    pub fn signed_area(&self, vertices: &VertexSet) -> Rational {
        self.holes
            .iter()
            .fold(self.boundary.signed_area(vertices), |acc, h| {
                acc + h.signed_area(vertices)
            })
    }

    /// Boundary first, then holes.
    pub fn cycles(&self) -> impl Iterator<Item = &Region> + '_ {
        std::iter::once(&self.boundary).chain(self.holes.iter())
    }
}

/// Sum of the signed areas of a set of walks.
pub fn total_area(regions: &[Region], vertices: &VertexSet) -> Rational {
    regions
        .iter()
        .fold(Rational::zero(), |acc, r| acc + r.signed_area(vertices))
}
