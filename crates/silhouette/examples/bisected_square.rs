//! Solve a small problem read from stdin (or a built-in bisected unit square)
//! and print the solution format to stdout.
//!
//! Usage:
//!   cargo run -p silhouette --example bisected_square
//!   cargo run -p silhouette --example bisected_square < problem.txt

use std::io::{IsTerminal, Read};

use silhouette::api::*;

const BUILTIN: &str = "1\n4\n0,0\n1,0\n1,1\n0,1\n1\n0,1/2 1,1/2\n";

fn main() -> Result<()> {
    let mut text = String::new();
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        // Unreadable stdin falls back to the built-in problem.
        let _ = stdin.lock().read_to_string(&mut text);
    }
    if text.trim().is_empty() {
        text = BUILTIN.to_string();
    }

    let raw = parse_input(&text)?;
    let out = run(raw.polygons, raw.segments, PipelineCfg::default())?.into_verified()?;
    eprintln!(
        "faces={} area={} (outer walks dropped: {}, nested: {}, in holes: {})",
        out.faces.len(),
        out.verification.actual,
        out.report.outer_discarded,
        out.report.nested,
        out.report.hole_interior
    );
    print!("{}", solution_to_string(&out.vertices, &out.faces));
    Ok(())
}
