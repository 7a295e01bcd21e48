use rayon::prelude::*;

use crate::field::{AngleField, SampleMode};

use super::{TaperPolygon, TaperedPolygon, TraceLine, TraceRequest};

/// Traces and tapers a batch of independent flow lines.
///
/// Requests share only the read-only field, so the batch fans out across a
/// rayon worker pool with no locking. Output order matches request order, so
/// results correlate with requests by position (or by the request ids the
/// caller stored).
#[derive(Debug)]
pub struct TraceBatch {
    requests: Vec<TraceRequest>,
    mode: SampleMode,
}

impl TraceBatch {
    /// Creates a batch using nearest-cell sampling.
    #[must_use]
    pub fn new(requests: Vec<TraceRequest>) -> Self {
        Self::with_mode(requests, SampleMode::Nearest)
    }

    /// Creates a batch with an explicit sampling mode.
    #[must_use]
    pub fn with_mode(requests: Vec<TraceRequest>, mode: SampleMode) -> Self {
        Self { requests, mode }
    }

    /// Executes the batch, returning one polygon per request in order.
    ///
    /// A request whose start point lies outside the field yields an empty
    /// polygon; the other requests are unaffected.
    #[must_use]
    pub fn execute(&self, field: &AngleField) -> Vec<TaperedPolygon> {
        self.requests
            .par_iter()
            .map(|request| {
                let centerline = TraceLine::with_mode(*request, self.mode).execute(field);
                TaperPolygon::new(centerline, request.taper_min(), request.taper_max())
                    .execute()
            })
            .collect()
    }
}

/// Traces every request through the field and tapers each resulting
/// centerline, using nearest-cell sampling.
///
/// Returns one polygon per request, in request order; invalid or degenerate
/// requests yield empty polygons.
#[must_use]
pub fn trace_and_polygonize(
    field: &AngleField,
    requests: &[TraceRequest],
) -> Vec<TaperedPolygon> {
    TraceBatch::new(requests.to_vec()).execute(field)
}
