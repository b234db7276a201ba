use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use silhouette::api::{parse_input, run, write_solution, PipelineCfg, RawProblem};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod json;
mod provenance;
mod render;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "silhouette")]
#[command(about = "Exact face extraction for silhouette/skeleton problems")]
struct Cmd {
    /// Log at DEBUG level (graph and region dumps)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Arrange, trace, filter and verify; write the faces
    Solve {
        /// Problem file (stdin if omitted)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Solution file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Per-face statistics table; `.parquet` or CSV
        #[arg(long)]
        table: Option<PathBuf>,
        /// Do not add silhouette edges to the skeleton
        #[arg(long)]
        no_silhouette_edges: bool,
        /// Skip the face-walk consistency checks
        #[arg(long)]
        skip_checks: bool,
    },
    /// Draw the problem as SVG
    Render {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Keep the viewbox at the unit square
        #[arg(long)]
        no_expand_viewbox: bool,
        /// Keep original coordinates and draw the unit square
        #[arg(long)]
        no_shrink_viewbox: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out,
            format,
            table,
            no_silhouette_edges,
            skip_checks,
        } => {
            let cfg = PipelineCfg {
                silhouette_edges: !no_silhouette_edges,
                consistency_checks: !skip_checks,
            };
            solve(input.as_deref(), out.as_deref(), format, table.as_deref(), cfg)
        }
        Action::Render {
            input,
            out,
            no_expand_viewbox,
            no_shrink_viewbox,
        } => {
            let cfg = render::RenderCfg {
                expand_viewbox: !no_expand_viewbox,
                shrink_viewbox: !no_shrink_viewbox,
            };
            draw(input.as_deref(), out.as_deref(), cfg)
        }
    }
}

fn read_problem(input: Option<&Path>) -> Result<RawProblem> {
    let text = match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    let raw = parse_input(&text).context("parsing problem")?;
    tracing::info!(
        polygons = raw.polygons.len(),
        segments = raw.segments.len(),
        "problem read"
    );
    Ok(raw)
}

/// Write `bytes` to `out` (creating parent dirs) or to stdout.
fn emit(out: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn solve(
    input: Option<&Path>,
    out: Option<&Path>,
    format: Format,
    table: Option<&Path>,
    cfg: PipelineCfg,
) -> Result<()> {
    let raw = read_problem(input)?;
    let outcome = run(raw.polygons, raw.segments, cfg)?;
    if !outcome.verified() {
        bail!(
            "verification failed: silhouette area {}, face area {}",
            outcome.verification.expected,
            outcome.verification.actual
        );
    }

    let bytes = match format {
        Format::Text => {
            let mut buf = Vec::new();
            write_solution(&mut buf, &outcome.vertices, &outcome.faces)?;
            buf
        }
        Format::Json => {
            let mut buf = serde_json::to_vec_pretty(&json::SolutionJson::from_outcome(&outcome))?;
            buf.push(b'\n');
            buf
        }
    };
    let params = json!({
        "format": format!("{format:?}").to_lowercase(),
        "silhouette_edges": cfg.silhouette_edges,
        "consistency_checks": cfg.consistency_checks,
        "faces": outcome.faces.len(),
        "area": outcome.verification.actual.to_string(),
    });
    emit(out, &bytes)?;
    if let Some(path) = out {
        write_sidecar(path, Payload::new("solve", input, params.clone()))?;
    }
    if let Some(path) = table {
        let mut df = table::face_table(&outcome)?;
        table::write_table(&mut df, path)?;
        write_sidecar(path, Payload::new("solve", input, params))?;
    }
    Ok(())
}

fn draw(input: Option<&Path>, out: Option<&Path>, cfg: render::RenderCfg) -> Result<()> {
    let raw = read_problem(input)?;
    let svg = render::render_svg(&raw.polygons, &raw.segments, cfg);
    emit(out, svg.as_bytes())?;
    if let Some(path) = out {
        let params = json!({
            "expand_viewbox": cfg.expand_viewbox,
            "shrink_viewbox": cfg.shrink_viewbox,
        });
        write_sidecar(path, Payload::new("render", input, params))?;
    }
    Ok(())
}
