use crate::field::{AngleField, SampleMode};
use crate::math::Vector2;

use super::{Centerline, TraceRequest};

/// Integrates one flow line through an [`AngleField`].
///
/// The field angle is resampled at every step, so the path curves with the
/// local field direction rather than its own previous heading. Termination
/// is boundary-driven: a line that exits the field stops early, which is
/// expected rather than an error.
#[derive(Debug)]
pub struct TraceLine {
    request: TraceRequest,
    mode: SampleMode,
}

impl TraceLine {
    /// Creates a trace operation using nearest-cell sampling.
    #[must_use]
    pub fn new(request: TraceRequest) -> Self {
        Self::with_mode(request, SampleMode::Nearest)
    }

    /// Creates a trace operation with an explicit sampling mode.
    #[must_use]
    pub fn with_mode(request: TraceRequest, mode: SampleMode) -> Self {
        Self { request, mode }
    }

    /// Executes the trace, returning the visited positions.
    ///
    /// A start point outside the field yields an empty centerline. Otherwise
    /// the result holds the start point plus up to `max_steps` further
    /// positions; a step whose candidate position would leave the field
    /// stops the line without appending the candidate.
    #[must_use]
    pub fn execute(&self, field: &AngleField) -> Centerline {
        let start = self.request.start();
        if !field.contains(start.x, start.y) {
            return Centerline::default();
        }

        let mut points = Vec::with_capacity(self.request.max_steps() + 1);
        points.push(start);
        let mut current = start;

        for _ in 0..self.request.max_steps() {
            let angle = field
                .sample_with(current.x, current.y, self.mode)
                .to_radians();
            let step = Vector2::new(angle.cos(), angle.sin()) * self.request.step_length();
            let candidate = current + step;
            if !field.contains(candidate.x, candidate.y) {
                break;
            }
            points.push(candidate);
            current = candidate;
        }

        Centerline { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point2, TOLERANCE};
    use approx::assert_relative_eq;

    fn request(start: Point2, step_length: f64, max_steps: usize) -> TraceRequest {
        TraceRequest::new(0, start, step_length, max_steps, 0.0, 1.0).unwrap()
    }

    #[test]
    fn start_outside_field_is_empty() {
        let field = AngleField::constant(10, 10, 0.0).unwrap();
        for start in [
            Point2::new(0.5, 5.0),
            Point2::new(10.5, 5.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 11.0),
        ] {
            let centerline = TraceLine::new(request(start, 1.0, 5)).execute(&field);
            assert!(centerline.is_empty());
        }
    }

    #[test]
    fn constant_zero_field_traces_straight_line() {
        let field = AngleField::constant(10, 10, 0.0).unwrap();
        let centerline =
            TraceLine::new(request(Point2::new(1.0, 1.0), 1.0, 5)).execute(&field);

        assert_eq!(centerline.len(), 6);
        for (i, point) in centerline.points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected_x = 1.0 + i as f64;
            assert_relative_eq!(point.x, expected_x, epsilon = TOLERANCE);
            assert_relative_eq!(point.y, 1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn ninety_degree_field_traces_down_rows() {
        let field = AngleField::constant(10, 10, 90.0).unwrap();
        let centerline =
            TraceLine::new(request(Point2::new(3.0, 1.0), 1.0, 4)).execute(&field);

        assert_eq!(centerline.len(), 5);
        let last = centerline.points[4];
        assert_relative_eq!(last.x, 3.0, epsilon = TOLERANCE);
        assert_relative_eq!(last.y, 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn zero_max_steps_yields_only_start_point() {
        let field = AngleField::constant(4, 4, 123.0).unwrap();
        let start = Point2::new(2.5, 3.5);
        let centerline = TraceLine::new(request(start, 1.0, 0)).execute(&field);

        assert_eq!(centerline.len(), 1);
        assert_relative_eq!(centerline.points[0].x, start.x);
        assert_relative_eq!(centerline.points[0].y, start.y);
    }

    #[test]
    fn line_stops_at_field_boundary() {
        // All angles point right; a start near the right edge exits early.
        let field = AngleField::constant(10, 10, 0.0).unwrap();
        let centerline =
            TraceLine::new(request(Point2::new(8.5, 5.0), 2.0, 100)).execute(&field);

        assert!(centerline.len() < 101);
        // 8.5 is in range, 10.5 is not: only the start survives.
        assert_eq!(centerline.len(), 1);
    }

    #[test]
    fn length_stays_within_bound() {
        let field = AngleField::constant(50, 50, 37.0).unwrap();
        for max_steps in [0, 1, 7, 40] {
            let centerline =
                TraceLine::new(request(Point2::new(25.0, 25.0), 0.5, max_steps))
                    .execute(&field);
            assert!(!centerline.is_empty());
            assert!(centerline.len() <= max_steps + 1);
        }
    }

    #[test]
    fn path_follows_local_field_direction() {
        // Rows 1-2 push right, rows 3+ push down: the line turns a corner.
        let mut rows = vec![vec![0.0; 10]; 2];
        rows.extend(vec![vec![90.0; 10]; 8]);
        let field = AngleField::from_rows(rows).unwrap();

        let centerline =
            TraceLine::new(request(Point2::new(1.0, 2.6), 1.0, 4)).execute(&field);

        assert_eq!(centerline.len(), 5);
        // y = 2.6 rounds to row 3, so the very first step already points down.
        assert_relative_eq!(centerline.points[1].x, 1.0, epsilon = TOLERANCE);
        assert_relative_eq!(centerline.points[1].y, 3.6, epsilon = TOLERANCE);
    }

    #[test]
    fn bilinear_mode_blends_between_rows() {
        // Row 1 pushes right, row 2 pushes down; halfway between the rows the
        // blended angle is 45 degrees.
        let field =
            AngleField::from_rows(vec![vec![0.0; 8], vec![90.0; 8], vec![90.0; 8]])
                .unwrap();
        let start = Point2::new(1.0, 1.5);
        let req = request(start, 1.0, 1);

        let centerline = TraceLine::with_mode(req, SampleMode::Bilinear).execute(&field);
        assert_eq!(centerline.len(), 2);
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(centerline.points[1].x, 1.0 + half_sqrt2, epsilon = TOLERANCE);
        assert_relative_eq!(centerline.points[1].y, 1.5 + half_sqrt2, epsilon = TOLERANCE);
    }
}
