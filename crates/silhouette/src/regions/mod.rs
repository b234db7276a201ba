//! Face extraction: walk every face of the embedded arrangement graph.
//!
//! Purpose
//! - Order each vertex's neighbors counter-clockwise (exact quadrant/cross
//!   comparator), derive the next-edge rule, and walk every directed edge
//!   exactly once. Each closed walk is one `Region`.
//!
//! Conventions
//! - Bounded faces walk counter-clockwise (positive area); the outer walk of
//!   each connected component walks clockwise (negative area, or zero for a
//!   component without cycles).
//! - Walks are iterative; stack use does not depend on face size.
//! - A lookup miss in the rotation system or a walk that revisits an edge is
//!   an internal inconsistency, never a user error.

mod check;
mod trace;
mod types;

pub use check::{check_consistency, Components};
pub use trace::{enumerate_regions, RotationSystem};
pub use types::{total_area, Face, Region};

#[cfg(test)]
mod tests;
