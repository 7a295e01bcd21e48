use crate::math::Point2;

use super::{Centerline, TaperedPolygon};

/// Expands a [`Centerline`] into a closed tapered outline.
///
/// The half-width grows linearly from `taper_min` at the first point to
/// `taper_max` at the last. The outline walks the outward side forward and
/// the return side backward with the same per-point offsets, so the two
/// sides meet at the endpoints and the ring stays symmetric about the
/// centerline.
#[derive(Debug)]
pub struct TaperPolygon {
    centerline: Centerline,
    taper_min: f64,
    taper_max: f64,
}

impl TaperPolygon {
    /// Creates a new tapering operation.
    #[must_use]
    pub fn new(centerline: Centerline, taper_min: f64, taper_max: f64) -> Self {
        Self {
            centerline,
            taper_min,
            taper_max,
        }
    }

    /// Executes the tapering, producing the closed ring.
    ///
    /// An empty centerline yields an empty polygon; otherwise the ring holds
    /// exactly twice as many vertices as the centerline has points. A
    /// single-point centerline uses `taper_min` as its only offset, giving a
    /// doubled point pair.
    #[must_use]
    pub fn execute(&self) -> TaperedPolygon {
        let points = &self.centerline.points;
        if points.is_empty() {
            return TaperedPolygon::default();
        }

        let offsets = self.offsets(points.len());
        let mut vertices = Vec::with_capacity(2 * points.len());
        for (point, offset) in points.iter().zip(&offsets) {
            vertices.push(Point2::new(point.x, point.y + offset));
        }
        for (point, offset) in points.iter().zip(&offsets).rev() {
            vertices.push(Point2::new(point.x, point.y - offset));
        }

        TaperedPolygon { vertices }
    }

    /// Returns the per-point half-widths, `taper_min` at index 0 through
    /// `taper_max` at index `n - 1`.
    #[allow(clippy::cast_precision_loss)]
    fn offsets(&self, n: usize) -> Vec<f64> {
        if n == 1 {
            return vec![self.taper_min];
        }
        let span = self.taper_max - self.taper_min;
        let denom = (n - 1) as f64;
        (0..n)
            .map(|i| self.taper_min + span * (i as f64) / denom)
            .collect()
    }
}
