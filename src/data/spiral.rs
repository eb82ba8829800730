use rand::Rng;

use crate::data::Dataset;
use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;

/// Generates `samples` points per class arranged as interleaved spiral arms.
///
/// Along arm `c` the radius runs from 0 to 1 while the angle sweeps
/// `[4c, 4(c + 1)]` radians with N(0, 0.2²) jitter. Much harder to separate
/// than `vertical_data`.
pub fn spiral_data<R: Rng + ?Sized>(samples: usize, classes: usize, rng: &mut R) -> Dataset {
    let mut rows = Vec::with_capacity(samples * classes);
    let mut labels = Vec::with_capacity(samples * classes);
    let step = if samples > 1 { 1.0 / (samples - 1) as f64 } else { 0.0 };
    for class in 0..classes {
        let start = class as f64 * 4.0;
        for i in 0..samples {
            let r = i as f64 * step;
            let t = start + 4.0 * r + Matrix::sample_standard_normal(rng) * 0.2;
            rows.push(vec![r * (t * 2.5).sin(), r * (t * 2.5).cos()]);
            labels.push(class);
        }
    }
    Dataset { features: Matrix::from_data(rows), labels: Labels::Sparse(labels) }
}
