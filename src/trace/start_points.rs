use rand::Rng;

use crate::field::AngleField;
use crate::math::Point2;

/// Samples `count` start points uniformly over the field's coordinate range.
///
/// The generator is caller-supplied, so reproducibility is the caller's
/// choice (seed a [`rand::rngs::StdRng`] for deterministic batches); there
/// is no process-wide seed state. Every returned point satisfies
/// [`AngleField::contains`].
#[allow(clippy::cast_precision_loss)]
pub fn sample_start_points<R: Rng + ?Sized>(
    field: &AngleField,
    count: usize,
    rng: &mut R,
) -> Vec<Point2> {
    let max_x = field.width() as f64;
    let max_y = field.height() as f64;
    (0..count)
        .map(|_| Point2::new(rng.gen_range(1.0..=max_x), rng.gen_range(1.0..=max_y)))
        .collect()
}
