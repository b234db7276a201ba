//! Text problem format in, text solution format out.
//!
//! Input (commas count as whitespace):
//! ```text
//! <polygon count>
//! <point count>          # per polygon
//! x,y                    # per point; coordinates are `n` or `n/d`
//! <segment count>
//! x1,y1 x2,y2            # per segment
//! ```
//!
//! Output:
//! ```text
//! <vertex count>
//! xn/xd yn/yd            # per vertex, in id order
//! <cycle count>
//! <len>  id id ...       # per cycle; a face's boundary, then its holes
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use crate::arrangement::VertexSet;
use crate::error::{Error, Result};
use crate::geom2::{Point, Polygon, Rational, Segment};
use crate::regions::Face;

/// Parsed but not yet normalized input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawProblem {
    pub polygons: Vec<Polygon>,
    pub segments: Vec<Segment>,
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
    /// Tokens handed out so far; the next token's position.
    consumed: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            consumed: 0,
        }
    }

    /// Position of the token most recently handed out.
    #[inline]
    fn last(&self) -> usize {
        self.consumed.saturating_sub(1)
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        let tok = self.iter.next().ok_or_else(|| {
            Error::parse(
                self.consumed,
                format!("unexpected end of input, expected {what}"),
            )
        })?;
        self.consumed += 1;
        Ok(tok)
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let tok = self.next_token(what)?;
        usize::from_str(tok)
            .map_err(|e| Error::parse(self.last(), format!("{what} {tok:?}: {e}")))
    }

    fn rational(&mut self) -> Result<Rational> {
        let tok = self.next_token("coordinate")?;
        Rational::from_str(tok)
            .map_err(|e| Error::parse(self.last(), format!("coordinate {tok:?}: {e}")))
    }

    fn point(&mut self) -> Result<Point> {
        let x = self.rational()?;
        let y = self.rational()?;
        Ok(Point::new(x, y))
    }
}

/// Parse the textual problem format. Token positions in errors are 0-based
/// and count whitespace-separated tokens after commas are blanked.
pub fn parse_input(text: &str) -> Result<RawProblem> {
    let cleaned = text.replace(',', " ");
    let mut toks = Tokens::new(&cleaned);

    let n_polygons = toks.count("polygon count")?;
    // Counts are untrusted; vectors grow with the tokens actually read.
    let mut polygons = Vec::new();
    for _ in 0..n_polygons {
        let n_points = toks.count("point count")?;
        let polygon = (0..n_points)
            .map(|_| toks.point())
            .collect::<Result<Polygon>>()?;
        polygons.push(polygon);
    }

    let n_segments = toks.count("segment count")?;
    let mut segments = Vec::new();
    for _ in 0..n_segments {
        let a = toks.point()?;
        let b = toks.point()?;
        segments.push(Segment::new(a, b));
    }

    if let Some(tok) = toks.iter.next() {
        return Err(Error::parse(toks.consumed, format!("trailing token {tok:?}")));
    }
    Ok(RawProblem { polygons, segments })
}

/// Write the solution format. Coordinates are always `num/den`, even for
/// integers.
pub fn write_solution<W: Write>(w: &mut W, vertices: &VertexSet, faces: &[Face]) -> io::Result<()> {
    writeln!(w, "{}", vertices.len())?;
    for (_, p) in vertices.iter() {
        writeln!(
            w,
            "{}/{} {}/{}",
            p.x.numer(),
            p.x.denom(),
            p.y.numer(),
            p.y.denom()
        )?;
    }
    let cycles = faces.iter().map(|f| 1 + f.holes.len()).sum::<usize>();
    writeln!(w, "{cycles}")?;
    for region in faces.iter().flat_map(Face::cycles) {
        write!(w, "{} ", region.len())?;
        for v in &region.cycle {
            write!(w, " {v}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// [`write_solution`] into a `String`.
pub fn solution_to_string(vertices: &VertexSet, faces: &[Face]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_solution(&mut buf, vertices, faces);
    String::from_utf8_lossy(&buf).into_owned()
}
