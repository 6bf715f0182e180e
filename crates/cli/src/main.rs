use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector2;
use tracing_subscriber::fmt::SubscriberBuilder;

use hullwire::cloud::{draw_cloud_normal, CloudCfg, ReplayToken};
use hullwire::codec::encode_points;
use hullwire::timing::timed;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-cloud marshaling driver for the native hull library")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a random cloud and emit it as a points document
    Cloud {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 100.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Run a full marshaling flow against the native hull library
    Hull {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 100.0)]
        scale: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Flow::Points)]
        flow: Flow,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Flow {
    /// Fixed-layout struct arrays across the boundary
    Points,
    /// JSON documents in bounded transfer buffers
    Json,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Cloud {
            count,
            scale,
            seed,
            out,
        } => cloud(count, scale, seed, out),
        Action::Hull {
            count,
            scale,
            seed,
            flow,
        } => hull(count, scale, seed, flow),
    }
}

fn draw(count: usize, scale: f64, seed: u64) -> Vec<Vector2<f64>> {
    let cfg = CloudCfg { count, scale };
    timed("create_points", || {
        draw_cloud_normal(cfg, ReplayToken { seed, index: 0 })
    })
}

fn cloud(count: usize, scale: f64, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(count, scale, seed, "cloud");
    let points = draw(count, scale, seed);
    let document = timed("encode_points", || encode_points(&points))?;
    match out {
        Some(path) => {
            std::fs::write(&path, &document).with_context(|| format!("writing {path}"))?;
            tracing::info!(path, bytes = document.len(), "cloud_written");
        }
        None => println!("{document}"),
    }
    Ok(())
}

fn hull(count: usize, scale: f64, seed: u64, flow: Flow) -> Result<()> {
    tracing::info!(count, scale, seed, "hull");
    let points = draw(count, scale, seed);
    let vertices = match flow {
        Flow::Points => hull_points(&points)?,
        Flow::Json => hull_json(&points)?,
    };
    tracing::info!(inputs = points.len(), vertices = vertices.len(), "hull_done");
    for v in &vertices {
        println!("hull point: {},{}", v.x, v.y);
    }
    Ok(())
}

#[cfg(feature = "native-points")]
fn hull_points(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>> {
    let hull = timed("hull_from_points", || unsafe {
        hullwire::ffi::hull_from_points(hullwire::ffi::sys::points::convex_hull, points)
    })?;
    Ok(hull)
}

#[cfg(not(feature = "native-points"))]
fn hull_points(_points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>> {
    anyhow::bail!("built without the struct-flavor library; rebuild with --features native-points")
}

#[cfg(feature = "native-json")]
fn hull_json(points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>> {
    let hull = timed("hull_via_text", || unsafe {
        hullwire::codec::hull_via_text(hullwire::ffi::sys::json::convex_hull, points)
    })?;
    Ok(hull)
}

#[cfg(not(feature = "native-json"))]
fn hull_json(_points: &[Vector2<f64>]) -> Result<Vec<Vector2<f64>>> {
    anyhow::bail!("built without the json-flavor library; rebuild with --features native-json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cloud_writes_a_decodable_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cloud.json");
        cloud(25, 100.0, 7, Some(path.to_string_lossy().into_owned())).unwrap();
        let document = std::fs::read_to_string(&path).unwrap();
        let points = hullwire::codec::decode_points(&document).unwrap();
        assert_eq!(points.len(), 25);
    }

    #[test]
    fn cloud_draw_is_replayable() {
        assert_eq!(draw(10, 100.0, 3), draw(10, 100.0, 3));
    }
}
