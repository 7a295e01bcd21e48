use crate::error::{FieldError, Result};

use super::SampleMode;

/// An immutable rectangular grid of flow angles, in degrees.
///
/// Coordinates are 1-based: the valid continuous range is
/// `[1, width] × [1, height]` (inclusive), with row 1 at the top. The field
/// is agnostic to the angle range; callers typically rescale into a chosen
/// sub-range such as `[-90, 90]` before construction.
#[derive(Debug, Clone)]
pub struct AngleField {
    width: usize,
    height: usize,
    /// Row-major cell angles, row 1 first.
    angles: Vec<f64>,
}

impl AngleField {
    /// Creates a field from rows of angle values, top row first.
    ///
    /// # Errors
    ///
    /// - `FieldError::Empty` if there are no rows or the first row is empty
    /// - `FieldError::Ragged` if any row differs in length from the first
    /// - `FieldError::NonFinite` if any cell is NaN or infinite
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(FieldError::Empty.into());
        }

        let mut angles = Vec::with_capacity(width * height);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FieldError::Ragged {
                    row: r + 1,
                    len: row.len(),
                    expected: width,
                }
                .into());
            }
            for (c, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(FieldError::NonFinite {
                        col: c + 1,
                        row: r + 1,
                        value,
                    }
                    .into());
                }
            }
            angles.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height,
            angles,
        })
    }

    /// Creates a field where every cell holds the same angle.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the angle is not
    /// finite.
    pub fn constant(width: usize, height: usize, angle: f64) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FieldError::Empty.into());
        }
        if !angle.is_finite() {
            return Err(FieldError::NonFinite {
                col: 1,
                row: 1,
                value: angle,
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            angles: vec![angle; width * height],
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the angle at a 1-based cell index.
    ///
    /// Callers must keep `col` in `1..=width` and `row` in `1..=height`.
    #[must_use]
    pub fn angle_at(&self, col: usize, row: usize) -> f64 {
        self.angles[(row - 1) * self.width + (col - 1)]
    }

    /// Reports whether a continuous position lies inside the field's valid
    /// coordinate range (inclusive on all four edges).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 1.0 && x <= self.width as f64 && y >= 1.0 && y <= self.height as f64
    }

    /// Samples the angle at a continuous position by nearest cell.
    ///
    /// Each coordinate is rounded half away from zero (`f64::round`), the
    /// fixed tie-break rule for this field. Callers must bounds-check with
    /// [`AngleField::contains`] first; for any contained position the
    /// rounded cell is in range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.angle_at(x.round() as usize, y.round() as usize)
    }

    /// Samples the angle at a continuous position by bilinear blending of
    /// the four surrounding cells, clamped at the field borders.
    ///
    /// Callers must bounds-check with [`AngleField::contains`] first.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_bilinear(&self, x: f64, y: f64) -> f64 {
        let (c0, tx) = Self::split_axis(x, self.width);
        let (r0, ty) = Self::split_axis(y, self.height);
        let c1 = (c0 + 1).min(self.width);
        let r1 = (r0 + 1).min(self.height);

        let top = lerp(self.angle_at(c0, r0), self.angle_at(c1, r0), tx);
        let bottom = lerp(self.angle_at(c0, r1), self.angle_at(c1, r1), tx);
        lerp(top, bottom, ty)
    }

    /// Samples the angle at a continuous position with the given mode.
    #[must_use]
    pub fn sample_with(&self, x: f64, y: f64, mode: SampleMode) -> f64 {
        match mode {
            SampleMode::Nearest => self.sample(x, y),
            SampleMode::Bilinear => self.sample_bilinear(x, y),
        }
    }

    /// Splits a contained coordinate into its lower cell index and the
    /// fractional distance toward the next cell.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn split_axis(value: f64, extent: usize) -> (usize, f64) {
        let lower = (value.floor() as usize).clamp(1, extent.max(2) - 1);
        let t = (value - lower as f64).clamp(0.0, 1.0);
        (lower, t)
    }
}

/// Linear interpolation between `a` and `b`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
