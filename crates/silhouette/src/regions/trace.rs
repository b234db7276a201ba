//! Rotation system, next-edge rule and the face walk.

use std::collections::HashSet;

use tracing::{debug, enabled, info, Level};

use crate::arrangement::{Arrangement, DirectedEdge, VertexId};
use crate::error::{Error, Result};
use crate::geom2::angular_cmp;

use super::types::Region;

/// Neighbors of every vertex in counter-clockwise order around it.
#[derive(Clone, Debug)]
pub struct RotationSystem {
    order: Vec<Vec<VertexId>>,
}

impl RotationSystem {
    pub fn new(arrangement: &Arrangement) -> Self {
        let vs = &arrangement.vertices;
        let order = vs
            .iter()
            .map(|(v, origin)| {
                let mut around: Vec<VertexId> =
                    arrangement.adjacency.neighbors(v).iter().copied().collect();
                around.sort_by(|&a, &b| {
                    angular_cmp(&(vs.point(a) - origin), &(vs.point(b) - origin))
                });
                around
            })
            .collect();
        Self { order }
    }

    /// Counter-clockwise neighbor order around `v`.
    #[inline]
    pub fn around(&self, v: VertexId) -> &[VertexId] {
        &self.order[v.0]
    }

    /// Next edge of the face to the left of `u → v`: leave `v` towards the
    /// neighbor immediately clockwise of `u`.
    pub fn next(&self, e: DirectedEdge) -> Result<DirectedEdge> {
        let around = self.around(e.to);
        let pos = around.iter().position(|&n| n == e.from).ok_or_else(|| {
            Error::inconsistent(format!(
                "edge {e}: vertex {} missing from the neighbor order of {}",
                e.from, e.to
            ))
        })?;
        let w = around[(pos + around.len() - 1) % around.len()];
        Ok(DirectedEdge::new(e.to, w))
    }
}

/// Enumerate every face walk of the embedded graph, the outer walk of each
/// connected component included.
///
/// Directed edges are visited in `(from, to)` order; each unused one starts a
/// walk that follows [`RotationSystem::next`] until it returns to its start.
pub fn enumerate_regions(arrangement: &Arrangement) -> Result<Vec<Region>> {
    let rotation = RotationSystem::new(arrangement);
    let mut used: HashSet<DirectedEdge> = HashSet::new();
    let mut regions = Vec::new();

    for start in arrangement.adjacency.directed_edges() {
        if used.contains(&start) {
            continue;
        }
        let mut cycle = Vec::new();
        let mut e = start;
        loop {
            if !used.insert(e) {
                return Err(Error::inconsistent(format!(
                    "walk from {start} re-entered edge {e} before closing"
                )));
            }
            cycle.push(e.from);
            e = rotation.next(e)?;
            if e == start {
                break;
            }
        }
        regions.push(Region::new(cycle));
    }

    info!(regions = regions.len(), "regions enumerated");
    if enabled!(Level::DEBUG) {
        for (k, r) in regions.iter().enumerate() {
            let poly: Vec<String> = r
                .polygon(&arrangement.vertices)
                .iter()
                .map(ToString::to_string)
                .collect();
            debug!(region = k, area = %r.signed_area(&arrangement.vertices), polygon = ?poly, "region");
        }
    }
    Ok(regions)
}
