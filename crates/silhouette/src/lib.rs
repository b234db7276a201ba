//! Exact planar arrangements of skeleton segments over silhouette polygons.
//!
//! Pipeline: parse → normalize silhouettes → arrange segments → trace face
//! walks → filter (outer walks, hole interiors) → verify area conservation.
//! All geometry is exact rational arithmetic; floating point never takes
//! part in a decision.
//!
//! API Policy
//! - Project-internal crate; the CLI is the only consumer. Breaking changes
//!   are fine when they improve the design.

pub mod api;
pub mod arrangement;
pub mod error;
pub mod filter;
pub mod geom2;
pub mod io;
pub mod pipeline;
pub mod regions;
pub mod silhouette;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use pipeline::{run, Outcome, PipelineCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arrangement::{Arrangement, VertexId, VertexSet};
    pub use crate::geom2::{rational, Point, Polygon, Rational, Segment};
    pub use crate::io::{parse_input, write_solution, RawProblem};
    pub use crate::pipeline::{run, Outcome, PipelineCfg};
    pub use crate::regions::{Face, Region};
    pub use crate::{Error, Result};
}
