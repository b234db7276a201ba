//! Per-face statistics table (CSV or Parquet, chosen by file extension).

use anyhow::{Context, Result};
use num_traits::ToPrimitive;
use polars::prelude::*;
use silhouette::api::Outcome;
use std::fs::File;
use std::path::Path;

/// One row per retained face: exact area string plus an `f64` approximation
/// for plotting.
pub fn face_table(out: &Outcome) -> Result<DataFrame> {
    let n = out.faces.len();
    let mut face = Vec::with_capacity(n);
    let mut boundary_len = Vec::with_capacity(n);
    let mut hole_count = Vec::with_capacity(n);
    let mut area = Vec::with_capacity(n);
    let mut area_approx = Vec::with_capacity(n);
    for (k, f) in out.faces.iter().enumerate() {
        let a = f.signed_area(&out.vertices);
        face.push(k as u32);
        boundary_len.push(f.boundary.len() as u32);
        hole_count.push(f.holes.len() as u32);
        area_approx.push(a.to_f64().unwrap_or(f64::NAN));
        area.push(a.to_string());
    }
    let df = df!(
        "face" => face,
        "boundary_len" => boundary_len,
        "hole_count" => hole_count,
        "area" => area,
        "area_approx" => area_approx,
    )?;
    Ok(df)
}

/// Write `df` to `path`: Parquet for `.parquet`, CSV otherwise.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let parquet = path.extension().is_some_and(|e| e == "parquet");
    if parquet {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    tracing::info!(rows = df.height(), path = %path.display(), parquet, "face table written");
    Ok(())
}
