//! Swirl demo — traces a batch of flow lines through a synthetic vortex
//! field and prints outline statistics.
//!
//! Usage:
//! ```text
//! cargo run --example swirl
//! ```

use flowtrace::trace::{sample_start_points, TraceRequest};
use flowtrace::{trace_and_polygonize, AngleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FIELD_SIZE: usize = 120;
const LINE_COUNT: usize = 64;
const STEP_LENGTH: f64 = 1.5;
const MAX_STEPS: usize = 200;

fn main() -> flowtrace::Result<()> {
    // Default: WARN for everything, INFO for flowtrace.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("swirl=info".parse().unwrap_or_default())
        .add_directive("flowtrace=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let field = swirl_field(FIELD_SIZE)?;

    let mut rng = StdRng::seed_from_u64(1);
    let starts = sample_start_points(&field, LINE_COUNT, &mut rng);
    let requests = starts
        .iter()
        .enumerate()
        .map(|(i, start)| {
            TraceRequest::new(i as u64, *start, STEP_LENGTH, MAX_STEPS, 0.5, 4.0)
        })
        .collect::<flowtrace::Result<Vec<_>>>()?;

    let polygons = trace_and_polygonize(&field, &requests);

    let drawn = polygons.iter().filter(|p| !p.is_empty()).count();
    let vertices: usize = polygons.iter().map(flowtrace::TaperedPolygon::len).sum();
    let longest = polygons.iter().map(flowtrace::TaperedPolygon::len).max();

    println!("traced {} lines ({} non-empty)", polygons.len(), drawn);
    println!("total ring vertices: {vertices}");
    if let Some(longest) = longest {
        println!("longest ring: {longest} vertices");
    }

    Ok(())
}

/// Builds a square field whose angles rotate around the center.
#[allow(clippy::cast_precision_loss)]
fn swirl_field(size: usize) -> flowtrace::Result<AngleField> {
    let center = (size as f64 + 1.0) / 2.0;
    let rows = (1..=size)
        .map(|row| {
            (1..=size)
                .map(|col| {
                    let dx = col as f64 - center;
                    let dy = row as f64 - center;
                    // Perpendicular to the radius, in degrees.
                    dy.atan2(dx).to_degrees() + 90.0
                })
                .collect()
        })
        .collect();
    AngleField::from_rows(rows)
}
