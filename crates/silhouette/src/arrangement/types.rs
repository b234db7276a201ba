//! Data types for the segment arrangement.
//!
//! Kept small and explicit to make `build` and the face walk easy to read.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom2::Point;

/// Canonical vertex id: index into the sorted [`VertexSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed edge `from → to` of the arrangement graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
    pub from: VertexId,
    pub to: VertexId,
}

impl DirectedEdge {
    #[inline]
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Sorted, duplicate-free points. Invariant: strictly increasing by `(x, y)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexSet {
    points: Vec<Point>,
}

impl VertexSet {
    /// Sort and deduplicate (exact equality).
    pub fn from_points(mut points: Vec<Point>) -> Self {
        points.sort();
        points.dedup();
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn point(&self, id: VertexId) -> &Point {
        &self.points[id.0]
    }

    /// Id of an exact point, by binary search.
    pub fn id_of(&self, p: &Point) -> Option<VertexId> {
        self.points.binary_search(p).ok().map(VertexId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (VertexId(i), p))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.points.len()).map(VertexId)
    }

    /// Points of a vertex-id cycle, in order.
    pub fn polygon(&self, cycle: &[VertexId]) -> Vec<Point> {
        cycle.iter().map(|&v| self.point(v).clone()).collect()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

/// Undirected simple graph over vertex ids; neighbors kept in ascending id
/// order so traversal order is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adj: Vec<BTreeSet<VertexId>>,
}

impl AdjacencyGraph {
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: vec![BTreeSet::new(); n],
        }
    }

    /// Insert the undirected edge `{a, b}`. Returns false if it was present.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        let fresh = self.adj[a.0].insert(b);
        self.adj[b.0].insert(a);
        fresh
    }

    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &BTreeSet<VertexId> {
        &self.adj[v.0]
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adj[v.0].len()
    }

    #[inline]
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adj[a.0].contains(&b)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Both orientations of every edge, ordered by `(from, to)`.
    pub fn directed_edges(&self) -> impl Iterator<Item = DirectedEdge> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, ns)| {
            ns.iter().map(move |&n| DirectedEdge::new(VertexId(i), n))
        })
    }
}

/// Vertex set plus adjacency: the planar subdivision induced by the segments.
#[derive(Clone, Debug, Default)]
pub struct Arrangement {
    pub vertices: VertexSet,
    pub adjacency: AdjacencyGraph,
}
