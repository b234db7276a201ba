//! Exact 2D value types.
//!
//! - `Rational`: arbitrary-precision fraction; equality and order are exact.
//! - `Point`: rational coordinates, ordered lexicographically by `(x, y)`.
//! - `Segment`: the two endpoints of a skeleton edge; `a` is the reference
//!   endpoint for distance ordering along the segment.
//! - `Polygon`: implicitly closed point cycle; orientation is significant.

use std::fmt;
use std::ops::{Add, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;

/// Exact rational number used for every coordinate and derived quantity.
pub type Rational = BigRational;

/// Implicitly closed polygon (last point connects to the first).
pub type Polygon = Vec<Point>;

/// Rational from an integer numerator and denominator. Panics on `den == 0`,
/// so only call it with literal denominators.
#[inline]
pub fn rational(num: i64, den: i64) -> Rational {
    Rational::new(BigInt::from(num), BigInt::from(den))
}

/// Point (or difference vector) with exact coordinates.
///
/// Derived `Ord` is lexicographic by `(x, y)`, which is the vertex order used
/// throughout the arrangement.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

impl Point {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(Rational::from_integer(x.into()), Rational::from_integer(y.into()))
    }

    /// z-component of the cross product `self × other` (both as vectors).
    #[inline]
    pub fn cross(&self, other: &Point) -> Rational {
        &self.x * &other.y - &self.y * &other.x
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> Rational {
        &self.x * &other.x + &self.y * &other.y
    }

    /// Scale a vector by a rational factor.
    #[inline]
    pub fn scale(&self, k: &Rational) -> Point {
        Point::new(&self.x * k, &self.y * k)
    }
}

impl Sub for &Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: &Point) -> Point {
        Point::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl Add for &Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: &Point) -> Point {
        Point::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Input skeleton edge. Endpoint order only matters for `a` being the origin
/// of the along-segment distance key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    /// Direction vector `b - a`.
    #[inline]
    pub fn direction(&self) -> Point {
        &self.b - &self.a
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.a, self.b)
    }
}
