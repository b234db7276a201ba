//! Arrangement construction (vertices, edges) from raw segments.

use tracing::{debug, enabled, info, Level};

use crate::error::{Error, Result};
use crate::geom2::{comparable_distance, intersection_points, on_segment, Point, Rational, Segment};

use super::types::{AdjacencyGraph, Arrangement, VertexId, VertexSet};

/// Build the arrangement of `segments`.
///
/// 1. Seed vertices with every endpoint.
/// 2. Add the discrete intersection points of every unordered segment pair.
/// 3. Sort and deduplicate; sorted position is the vertex id.
/// 4. Per segment, order the vertices lying on it by distance from its first
///    endpoint and connect consecutive ones.
///
/// Fails with [`Error::SegmentUnderflow`] if fewer than two vertices lie on a
/// segment, which only a zero-length segment can cause.
pub fn build_arrangement(segments: &[Segment]) -> Result<Arrangement> {
    let vertices = collect_vertices(segments);
    let mut adjacency = AdjacencyGraph::with_vertices(vertices.len());
    let mut duplicates = 0usize;

    for (index, s) in segments.iter().enumerate() {
        let mut on: Vec<(Rational, VertexId)> = vertices
            .iter()
            .filter(|(_, p)| on_segment(p, s))
            .map(|(id, p)| (comparable_distance(&s.a, p), id))
            .collect();
        if on.len() < 2 {
            return Err(Error::SegmentUnderflow {
                index,
                segment: s.clone(),
                found: on.len(),
            });
        }
        on.sort();
        for pair in on.windows(2) {
            if !adjacency.add_edge(pair[0].1, pair[1].1) {
                duplicates += 1;
            }
        }
    }

    info!(
        segments = segments.len(),
        vertices = vertices.len(),
        edges = adjacency.edge_count(),
        duplicates,
        "arrangement built"
    );
    let arrangement = Arrangement {
        vertices,
        adjacency,
    };
    if enabled!(Level::DEBUG) {
        dump_graph(&arrangement);
    }
    Ok(arrangement)
}

/// Endpoints plus pairwise intersection points, sorted and deduplicated.
pub fn collect_vertices(segments: &[Segment]) -> VertexSet {
    let mut points: Vec<Point> = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        points.push(s.a.clone());
        points.push(s.b.clone());
    }
    for (i, s) in segments.iter().enumerate() {
        for t in &segments[..i] {
            points.extend(intersection_points(s, t));
        }
    }
    VertexSet::from_points(points)
}

fn dump_graph(arrangement: &Arrangement) {
    for (id, p) in arrangement.vertices.iter() {
        let neighbors: Vec<String> = arrangement
            .adjacency
            .neighbors(id)
            .iter()
            .map(|&n| arrangement.vertices.point(n).to_string())
            .collect();
        debug!(vertex = %id, point = %p, neighbors = ?neighbors, "graph");
    }
}
