//! Segment arrangement: the planar subdivision induced by a set of segments.
//!
//! Purpose
//! - Turn raw segments into a deduplicated vertex set (endpoints plus every
//!   pairwise intersection) and an undirected, simple adjacency graph whose
//!   edges join consecutive vertices along each segment.
//!
//! Conventions
//! - Vertex ids are positions in the `(x, y)`-sorted vertex set.
//! - Overlapping collinear segments contribute the overlap's extreme points,
//!   which are endpoints of one of the two segments anyway; the edges they
//!   share collapse in the simple graph.
//! - Quadratic in the segment count; inputs are puzzle-sized.

mod build;
mod types;

pub use build::{build_arrangement, collect_vertices};
pub use types::{AdjacencyGraph, Arrangement, DirectedEdge, VertexId, VertexSet};

#[cfg(test)]
mod tests;
