//! Connected components and construction-time consistency checks.

use std::collections::{HashMap, VecDeque};

use num_traits::Zero;

use crate::arrangement::{Arrangement, DirectedEdge, VertexId};
use crate::error::{Error, Result};

use super::types::{total_area, Region};

/// Connected component label of every vertex.
#[derive(Clone, Debug)]
pub struct Components {
    label: Vec<usize>,
    count: usize,
}

impl Components {
    /// Breadth-first labelling; labels follow the smallest vertex id of each
    /// component.
    pub fn of(arrangement: &Arrangement) -> Self {
        let n = arrangement.vertices.len();
        let mut label = vec![usize::MAX; n];
        let mut count = 0;
        let mut queue = VecDeque::new();
        for root in 0..n {
            if label[root] != usize::MAX {
                continue;
            }
            label[root] = count;
            queue.push_back(VertexId(root));
            while let Some(v) = queue.pop_front() {
                for &w in arrangement.adjacency.neighbors(v) {
                    if label[w.0] == usize::MAX {
                        label[w.0] = count;
                        queue.push_back(w);
                    }
                }
            }
            count += 1;
        }
        Self { label, count }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn of_vertex(&self, v: VertexId) -> usize {
        self.label[v.0]
    }

    /// Component of a walk (all its vertices share one).
    #[inline]
    pub fn of_region(&self, r: &Region) -> Option<usize> {
        r.cycle.first().map(|&v| self.of_vertex(v))
    }
}

/// Invariants every correct face walk satisfies:
/// - walk areas sum to zero;
/// - every directed edge is walked exactly once;
/// - walk count equals `E - V + 2C` (Euler, one outer walk per component).
pub fn check_consistency(arrangement: &Arrangement, regions: &[Region]) -> Result<()> {
    let total = total_area(regions, &arrangement.vertices);
    if !total.is_zero() {
        return Err(Error::inconsistent(format!(
            "region areas sum to {total}, expected 0"
        )));
    }

    let mut seen: HashMap<DirectedEdge, usize> = HashMap::new();
    for (k, r) in regions.iter().enumerate() {
        for e in r.directed_edges() {
            if !arrangement.adjacency.has_edge(e.from, e.to) {
                return Err(Error::inconsistent(format!(
                    "region {k} walks {e}, which is not an arrangement edge"
                )));
            }
            if let Some(prev) = seen.insert(e, k) {
                return Err(Error::inconsistent(format!(
                    "edge {e} walked by regions {prev} and {k}"
                )));
            }
        }
    }
    let directed = 2 * arrangement.adjacency.edge_count();
    if seen.len() != directed {
        return Err(Error::inconsistent(format!(
            "{} of {directed} directed edges walked",
            seen.len()
        )));
    }

    let v = arrangement.vertices.len();
    let c = Components::of(arrangement).count();
    let expected = (directed / 2 + 2 * c).checked_sub(v);
    if expected != Some(regions.len()) {
        return Err(Error::inconsistent(format!(
            "{} regions, Euler count E - V + 2C = {} - {v} + 2*{c}",
            regions.len(),
            directed / 2
        )));
    }
    Ok(())
}
