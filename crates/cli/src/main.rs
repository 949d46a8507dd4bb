use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::vector;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::geom::vec::{angle_between, VecDump};
use planar::geom::{CoordSystem, GeomCfg};
use planar::render::{draw_arrow, ArrowStyle, Color, RecordingSurface, Topology};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Vector algebra demos and arrow-glyph geometry dumps")]
struct Cmd {
    /// Near-zero tolerance for all degeneracy checks
    #[arg(long, default_value_t = 1e-6)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print vector arithmetic results in the diagnostic dump format
    Dump {
        /// First vector as "x,y"
        #[arg(long, default_value = "1,2", value_parser = parse_vec)]
        a: (f64, f64),
        /// Second vector as "x,y"
        #[arg(long, default_value = "4,5", value_parser = parse_vec)]
        b: (f64, f64),
        /// Scale factor applied to the first vector
        #[arg(long, default_value_t = 1.33)]
        scale: f64,
    },
    /// Render arrows through a coordinate system and emit vertex batches as JSON
    Arrow {
        /// Vector(s) to draw, in local coordinates, as "x,y" (repeatable)
        #[arg(long = "vec", value_parser = parse_vec, required = true)]
        vecs: Vec<(f64, f64)>,
        /// Frame origin as "x,y"
        #[arg(long, default_value = "100,100", value_parser = parse_vec)]
        origin: (f64, f64),
        /// X basis vector as "x,y"
        #[arg(long, default_value = "50,10", value_parser = parse_vec)]
        unit_x: (f64, f64),
        /// Y basis vector as "x,y"
        #[arg(long, default_value = "10,50", value_parser = parse_vec)]
        unit_y: (f64, f64),
        /// Stroke width
        #[arg(long, default_value_t = 3.0)]
        width: f64,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg { eps: cmd.eps };
    match cmd.action {
        Action::Dump { a, b, scale } => dump(a, b, scale, cfg),
        Action::Arrow {
            vecs,
            origin,
            unit_x,
            unit_y,
            width,
            out,
        } => arrow(vecs, origin, unit_x, unit_y, width, out, cfg),
    }
}

fn parse_vec(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let parse = |t: &str| {
        t.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {t:?}: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn dump(a: (f64, f64), b: (f64, f64), scale: f64, cfg: GeomCfg) -> Result<()> {
    let a = vector![a.0, a.1];
    let b = vector![b.0, b.1];
    println!("a = {}", VecDump(a));
    println!("b = {}", VecDump(b));
    println!("a + b = {}", VecDump(a + b));
    println!("a - b = {}", VecDump(a - b));
    println!("{} * a = {}", scale, VecDump(a * scale));
    let angle = angle_between(a, b, cfg).context("angle between a and b")?;
    println!("a^b = {angle}");
    Ok(())
}

#[derive(Serialize)]
struct BatchRecord {
    topology: &'static str,
    color: [u8; 4],
    vertices: Vec<[f64; 2]>,
}

fn arrow(
    vecs: Vec<(f64, f64)>,
    origin: (f64, f64),
    unit_x: (f64, f64),
    unit_y: (f64, f64),
    width: f64,
    out: Option<String>,
    cfg: GeomCfg,
) -> Result<()> {
    if !(width.is_finite() && width > 0.0) {
        bail!("stroke width must be positive and finite, got {width}");
    }
    let cs = CoordSystem::new(
        vector![origin.0, origin.1],
        vector![unit_x.0, unit_x.1],
        vector![unit_y.0, unit_y.1],
        cfg,
    )
    .context("building coordinate system")?;

    let style = ArrowStyle {
        width,
        color: Color::BLACK,
    };
    let mut surface = RecordingSurface::new();
    for &(x, y) in &vecs {
        draw_arrow(vector![x, y], &cs, style, &mut surface);
    }
    tracing::info!(
        arrows = vecs.len(),
        batches = surface.batches.len(),
        vertices = surface.vertex_count(),
        "recorded"
    );

    let json = batches_json(&surface)?;
    match out {
        Some(path) => {
            let path = Path::new(&path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn batches_json(surface: &RecordingSurface) -> Result<String> {
    let records: Vec<BatchRecord> = surface
        .batches
        .iter()
        .map(|batch| {
            let color = batch
                .vertices
                .first()
                .map(|v| [v.color.r, v.color.g, v.color.b, v.color.a])
                .unwrap_or([0, 0, 0, 255]);
            BatchRecord {
                topology: match batch.topology {
                    Topology::TriangleStrip => "triangle_strip",
                    Topology::TriangleFan => "triangle_fan",
                },
                color,
                vertices: batch.vertices.iter().map(|v| [v.pos.x, v.pos.y]).collect(),
            }
        })
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vec_accepts_spaces_and_rejects_garbage() {
        assert_eq!(parse_vec("2,5").unwrap(), (2.0, 5.0));
        assert_eq!(parse_vec(" -1.5 , 0.25 ").unwrap(), (-1.5, 0.25));
        assert!(parse_vec("2;5").is_err());
        assert!(parse_vec("2,five").is_err());
    }

    #[test]
    fn arrow_json_round_trips_through_a_file() -> Result<()> {
        let cfg = GeomCfg::default();
        let cs = CoordSystem::new(
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![0.0, 1.0],
            cfg,
        )?;
        let mut surface = RecordingSurface::new();
        draw_arrow(
            vector![9.0, 0.0],
            &cs,
            ArrowStyle {
                width: 1.0,
                color: Color::BLACK,
            },
            &mut surface,
        );

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("arrows.json");
        std::fs::write(&path, batches_json(&surface)?)?;
        let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        let batches = parsed.as_array().expect("array of batches");
        // Shaft quad then head quad.
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0]["topology"], "triangle_strip");
        assert_eq!(batches[1]["vertices"].as_array().unwrap().len(), 4);
        // Head tip is the second vertex of the head batch.
        assert_eq!(batches[1]["vertices"][1][0], 9.0);
        Ok(())
    }
}
