mod batch;
mod start_points;
mod taper_polygon;
mod trace_line;

pub use batch::{trace_and_polygonize, TraceBatch};
pub use start_points::sample_start_points;
pub use taper_polygon::TaperPolygon;
pub use trace_line::TraceLine;

use crate::error::{Result, TraceError};
use crate::math::Point2;

/// Parameters for tracing one flow line.
///
/// Requests are independent of each other; the `id` is opaque to the tracer
/// and only carried for downstream correlation.
#[derive(Debug, Clone, Copy)]
pub struct TraceRequest {
    id: u64,
    start: Point2,
    step_length: f64,
    max_steps: usize,
    taper_min: f64,
    taper_max: f64,
}

impl TraceRequest {
    /// Creates a new trace request.
    ///
    /// `taper_max` is typically at least `taper_min`, but this is not
    /// required; the taper interpolates between whatever values are given.
    ///
    /// # Errors
    ///
    /// - `TraceError::InvalidStepLength` if `step_length` is not positive
    ///   and finite
    /// - `TraceError::NonFinite` if the start position or a taper bound is
    ///   NaN or infinite
    pub fn new(
        id: u64,
        start: Point2,
        step_length: f64,
        max_steps: usize,
        taper_min: f64,
        taper_max: f64,
    ) -> Result<Self> {
        if !step_length.is_finite() || step_length <= 0.0 {
            return Err(TraceError::InvalidStepLength(step_length).into());
        }
        for (parameter, value) in [
            ("start_x", start.x),
            ("start_y", start.y),
            ("taper_min", taper_min),
            ("taper_max", taper_max),
        ] {
            if !value.is_finite() {
                return Err(TraceError::NonFinite { parameter, value }.into());
            }
        }
        Ok(Self {
            id,
            start,
            step_length,
            max_steps,
            taper_min,
            taper_max,
        })
    }

    /// Returns the caller-supplied correlation id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the start position.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the step length.
    #[must_use]
    pub fn step_length(&self) -> f64 {
        self.step_length
    }

    /// Returns the maximum number of integration steps.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the half-width at the line's start.
    #[must_use]
    pub fn taper_min(&self) -> f64 {
        self.taper_min
    }

    /// Returns the half-width at the line's end.
    #[must_use]
    pub fn taper_max(&self) -> f64 {
        self.taper_max
    }
}

/// The ordered positions visited by one traced flow line.
///
/// Empty when the start point lay outside the field; otherwise holds between
/// 1 and `max_steps + 1` points, start point first.
#[derive(Debug, Clone, Default)]
pub struct Centerline {
    /// The trace positions, in visit order.
    pub points: Vec<Point2>,
}

impl Centerline {
    /// Returns the number of traced positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Reports whether no positions were traced (invalid start point).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A closed tapered outline derived from a [`Centerline`].
///
/// Vertices run along the outward side (`y + offset`, in trace order) and
/// back along the return side (`y − offset`, in reverse order). The ring is
/// implicit: the first vertex is not repeated at the end.
///
/// The offset is applied on the y axis only, not perpendicular to the local
/// path direction, so a centerline that doubles back in x yields a
/// self-intersecting ring. Renderers must tolerate this (even-odd or
/// nonzero fill).
#[derive(Debug, Clone, Default)]
pub struct TaperedPolygon {
    /// The ring vertices, in order.
    pub vertices: Vec<Point2>,
}

impl TaperedPolygon {
    /// Returns the number of ring vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Reports whether the ring is empty (degenerate request).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
