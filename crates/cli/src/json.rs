//! JSON rendering of a solution. Coordinates and areas are exact fraction
//! strings (`"1/2"`, `"3"`); vertex ids index `vertices`.

use serde::Serialize;
use silhouette::api::{FilterReport, Outcome, Rational};

#[derive(Debug, Serialize)]
pub struct SolutionJson {
    pub vertices: Vec<VertexJson>,
    pub faces: Vec<FaceJson>,
    pub report: ReportJson,
    pub verification: VerificationJson,
}

#[derive(Debug, Serialize)]
pub struct VertexJson {
    pub id: usize,
    pub x: String,
    pub y: String,
}

#[derive(Debug, Serialize)]
pub struct FaceJson {
    pub boundary: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<usize>>,
    pub area: String,
}

#[derive(Debug, Serialize)]
pub struct ReportJson {
    pub outer_discarded: usize,
    pub nested: usize,
    pub hole_interior: usize,
    pub kept: usize,
}

#[derive(Debug, Serialize)]
pub struct VerificationJson {
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

fn exact(q: &Rational) -> String {
    q.to_string()
}

impl From<FilterReport> for ReportJson {
    fn from(r: FilterReport) -> Self {
        Self {
            outer_discarded: r.outer_discarded,
            nested: r.nested,
            hole_interior: r.hole_interior,
            kept: r.kept,
        }
    }
}

impl SolutionJson {
    pub fn from_outcome(out: &Outcome) -> Self {
        let vertices = out
            .vertices
            .iter()
            .map(|(id, p)| VertexJson {
                id: id.0,
                x: exact(&p.x),
                y: exact(&p.y),
            })
            .collect();
        let faces = out
            .faces
            .iter()
            .map(|f| FaceJson {
                boundary: f.boundary.cycle.iter().map(|v| v.0).collect(),
                holes: f
                    .holes
                    .iter()
                    .map(|h| h.cycle.iter().map(|v| v.0).collect())
                    .collect(),
                area: exact(&f.signed_area(&out.vertices)),
            })
            .collect();
        Self {
            vertices,
            faces,
            report: out.report.into(),
            verification: VerificationJson {
                expected: exact(&out.verification.expected),
                actual: exact(&out.verification.actual),
                passed: out.verified(),
            },
        }
    }
}
