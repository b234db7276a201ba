//! Curated internal API (UNSTABLE).
//!
//! Flat re-export surface for the CLI, benches and examples. Not a public
//! API; names may move between modules without notice.

// Exact geometry
pub use crate::geom2::{
    angular_cmp, locate, polygon_within, rational, segment_intersection, signed_area,
    Intersection, Location, Point, Polygon, Rational, Segment,
};
// Silhouettes
pub use crate::silhouette::{boundary_segments, expected_area, normalize_all, SilhouetteEntry};
// Arrangement and faces
pub use crate::arrangement::{build_arrangement, Arrangement, DirectedEdge, VertexId, VertexSet};
pub use crate::regions::{check_consistency, enumerate_regions, Components, Face, Region};
// Filtering and verification
pub use crate::filter::{filter_regions, verify, FilterOutcome, FilterReport, Verification};
// Pipeline and text format
pub use crate::io::{parse_input, solution_to_string, write_solution, RawProblem};
pub use crate::pipeline::{run, Arranged, Filtered, Outcome, PipelineCfg, Problem, Traced};
pub use crate::{Error, Result};
