use thiserror::Error;

use crate::geom2::{Rational, Segment};

/// Errors raised by the pipeline. Every variant is fatal for the run that
/// produced it: there is no partial result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error at token {position}: {reason}")]
    Parse { position: usize, reason: String },

    #[error("silhouette polygon {index} is degenerate: {reason}")]
    DegeneratePolygon { index: usize, reason: String },

    #[error("segment {index} {segment} has {found} arrangement vertex on it, expected at least 2")]
    SegmentUnderflow {
        index: usize,
        segment: Segment,
        found: usize,
    },

    #[error("arrangement inconsistency: {0}")]
    Inconsistent(String),

    #[error("area mismatch: silhouette area {expected}, face area {actual}")]
    AreaMismatch { expected: Rational, actual: Rational },
}

impl Error {
    pub(crate) fn parse(position: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent(reason.into())
    }
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
