//! SVG rendering of a problem: silhouette fill (nonzero rule) and skeleton
//! strokes.
//!
//! Conventions
//! - The bounding box and translation are computed exactly; coordinates turn
//!   into `f64` only when written.
//! - Viewbox is padded by 0.005 on every side; numbers print with 3 decimals.

use nalgebra::Vector2;
use num_traits::{ToPrimitive, Zero};
use silhouette::api::{rational, Point, Polygon, Rational, Segment};
use std::fmt::Write;

const PAD: f64 = 0.005;

#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    /// Grow the viewbox to cover every silhouette vertex.
    pub expand_viewbox: bool,
    /// Start the viewbox at the silhouette instead of the unit square,
    /// translate to the origin and hide the unit reference square.
    pub shrink_viewbox: bool,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            expand_viewbox: true,
            shrink_viewbox: true,
        }
    }
}

fn to_vec2(p: &Point) -> Vector2<f64> {
    Vector2::new(
        p.x.to_f64().unwrap_or(f64::NAN),
        p.y.to_f64().unwrap_or(f64::NAN),
    )
}

/// Exact viewbox corners `(min, max)` under `cfg`, before translation.
fn viewbox(polygons: &[Polygon], cfg: RenderCfg) -> (Point, Point) {
    let first = polygons.iter().flatten().next();
    let (mut lo, mut hi) = match first {
        Some(p) if cfg.shrink_viewbox => (p.clone(), p.clone()),
        _ => (
            Point::new(Rational::zero(), Rational::zero()),
            Point::new(rational(1, 1), rational(1, 1)),
        ),
    };
    if cfg.expand_viewbox {
        for p in polygons.iter().flatten() {
            if p.x < lo.x {
                lo.x = p.x.clone();
            }
            if p.x > hi.x {
                hi.x = p.x.clone();
            }
            if p.y < lo.y {
                lo.y = p.y.clone();
            }
            if p.y > hi.y {
                hi.y = p.y.clone();
            }
        }
    }
    (lo, hi)
}

/// Render the problem as a 400x400 px SVG document.
pub fn render_svg(polygons: &[Polygon], segments: &[Segment], cfg: RenderCfg) -> String {
    let (lo, hi) = viewbox(polygons, cfg);
    let shift = if cfg.shrink_viewbox {
        tracing::info!(x = %lo.x, y = %lo.y, "translate");
        lo.clone()
    } else {
        Point::new(Rational::zero(), Rational::zero())
    };
    let place = |p: &Point| to_vec2(&(p - &shift));

    let origin = place(&lo);
    let size = to_vec2(&(&hi - &lo));
    let corner = origin - Vector2::repeat(PAD);
    let extent = size + Vector2::repeat(2.0 * PAD);

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="400px" height="400px" viewBox="{:.3} {:.3} {:.3} {:.3}" stroke-linejoin="round" stroke-linecap="round">"#,
        corner.x, corner.y, extent.x, extent.y
    );
    if !cfg.shrink_viewbox {
        svg.push_str(
            r#"<rect x="0" y="0" width="1" height="1" fill="none" stroke="blue" stroke-width="0.005"/>"#,
        );
    }
    svg.push_str(r#"<path fill="silver" stroke="gray" stroke-width="0.005" fill-rule="nonzero" d=""#);
    for polygon in polygons {
        for (j, p) in polygon.iter().enumerate() {
            let v = place(p);
            let cmd = if j == 0 { 'M' } else { 'L' };
            let _ = write!(svg, "{cmd}{:.3} {:.3}", v.x, v.y);
        }
        svg.push('Z');
    }
    svg.push_str(r#""/><g fill="none" stroke="purple" stroke-width="0.003">"#);
    for s in segments {
        let (a, b) = (place(&s.a), place(&s.b));
        let _ = write!(svg, r#"<path d="M{:.3} {:.3}L{:.3} {:.3}"/>"#, a.x, a.y, b.x, b.y);
    }
    svg.push_str("</g></svg>");
    svg
}
