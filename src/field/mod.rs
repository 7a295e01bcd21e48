mod angle_field;

pub use angle_field::AngleField;

/// Strategy for turning a continuous position into a field angle.
///
/// [`SampleMode::Nearest`] is the baseline contract; bilinear blending is an
/// explicitly selected alternative, never a silent behavior change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Round each coordinate to the nearest cell (half away from zero).
    #[default]
    Nearest,
    /// Blend the four surrounding cells, clamped at the field borders.
    Bilinear,
}
