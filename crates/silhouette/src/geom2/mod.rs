//! Exact 2D geometry over arbitrary-precision rationals.
//!
//! Purpose
//! - Point/segment/polygon types and the predicates the arrangement, face
//!   walk and filter stages need: signed area, segment intersection,
//!   point-on-segment, along-segment distance, angular order, point location
//!   and polygon containment.
//!
//! Conventions
//! - No floating point anywhere in this module; every comparison is exact.
//! - Counter-clockwise is positive (signed area, orientation, angular order).
//! - Segments and polygon edges are closed (endpoints included).

mod contain;
mod predicates;
mod types;

pub use contain::{locate, polygon_edges, polygon_within, Location};
pub use predicates::{
    angular_cmp, comparable_distance, intersection_points, midpoint, on_segment, orient, quadrant,
    segment_intersection, signed_area, Intersection,
};
pub use types::{rational, Point, Polygon, Rational, Segment};
