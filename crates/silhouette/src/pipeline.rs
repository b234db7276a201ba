//! Staged pipeline: normalize → arrange → trace → filter → verify.
//!
//! Each stage consumes the previous one by value and returns a fresh context,
//! so no stage can observe a half-built later stage.

use tracing::info;

use crate::arrangement::{build_arrangement, Arrangement, VertexSet};
use crate::error::Result;
use crate::filter::{filter_regions, verify, FilterReport, Verification};
use crate::geom2::{Polygon, Segment};
use crate::regions::{check_consistency, enumerate_regions, Face, Region};
use crate::silhouette::{boundary_segments, normalize_all, SilhouetteEntry};

/// Pipeline switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineCfg {
    /// Add every silhouette edge to the skeleton segments before arranging.
    pub silhouette_edges: bool,
    /// Run `check_consistency` on the traced walks.
    pub consistency_checks: bool,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            silhouette_edges: true,
            consistency_checks: true,
        }
    }
}

/// Normalized input.
#[derive(Clone, Debug)]
pub struct Problem {
    pub silhouettes: Vec<SilhouetteEntry>,
    pub segments: Vec<Segment>,
}

impl Problem {
    pub fn new(polygons: Vec<Polygon>, segments: Vec<Segment>) -> Result<Self> {
        Ok(Self {
            silhouettes: normalize_all(polygons)?,
            segments,
        })
    }

    pub fn arrange(self, cfg: PipelineCfg) -> Result<Arranged> {
        let mut segments = self.segments;
        if cfg.silhouette_edges {
            segments.extend(boundary_segments(&self.silhouettes));
        }
        let arrangement = build_arrangement(&segments)?;
        Ok(Arranged {
            cfg,
            silhouettes: self.silhouettes,
            arrangement,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Arranged {
    pub cfg: PipelineCfg,
    pub silhouettes: Vec<SilhouetteEntry>,
    pub arrangement: Arrangement,
}

impl Arranged {
    pub fn trace(self) -> Result<Traced> {
        let regions = enumerate_regions(&self.arrangement)?;
        if self.cfg.consistency_checks {
            check_consistency(&self.arrangement, &regions)?;
        }
        Ok(Traced {
            silhouettes: self.silhouettes,
            arrangement: self.arrangement,
            regions,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Traced {
    pub silhouettes: Vec<SilhouetteEntry>,
    pub arrangement: Arrangement,
    pub regions: Vec<Region>,
}

impl Traced {
    pub fn filter(self) -> Filtered {
        let out = filter_regions(self.regions, &self.arrangement, &self.silhouettes);
        Filtered {
            silhouettes: self.silhouettes,
            vertices: self.arrangement.vertices,
            faces: out.faces,
            report: out.report,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Filtered {
    pub silhouettes: Vec<SilhouetteEntry>,
    pub vertices: VertexSet,
    pub faces: Vec<Face>,
    pub report: FilterReport,
}

impl Filtered {
    pub fn verify(self) -> Outcome {
        let verification = verify(&self.faces, &self.vertices, &self.silhouettes);
        Outcome {
            vertices: self.vertices,
            faces: self.faces,
            report: self.report,
            verification,
        }
    }
}

/// Final result of a run. Verification failure is recorded, not raised; use
/// [`Outcome::into_verified`] to abort on it.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub vertices: VertexSet,
    pub faces: Vec<Face>,
    pub report: FilterReport,
    pub verification: Verification,
}

impl Outcome {
    #[inline]
    pub fn verified(&self) -> bool {
        self.verification.passed()
    }

    pub fn into_verified(self) -> Result<Self> {
        let verification = self.verification.check()?;
        Ok(Self {
            verification,
            ..self
        })
    }
}

/// Run every stage with `cfg`.
pub fn run(polygons: Vec<Polygon>, segments: Vec<Segment>, cfg: PipelineCfg) -> Result<Outcome> {
    info!(polygons = polygons.len(), segments = segments.len(), "pipeline start");
    let outcome = Problem::new(polygons, segments)?
        .arrange(cfg)?
        .trace()?
        .filter()
        .verify();
    info!(
        vertices = outcome.vertices.len(),
        faces = outcome.faces.len(),
        verified = outcome.verified(),
        "pipeline done"
    );
    Ok(outcome)
}
