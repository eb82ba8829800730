use rand::Rng;

use crate::data::Dataset;
use crate::error::SearchError;
use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;

/// Generates `samples` points per class, each class a narrow vertical band.
///
/// Class `c` is centered at `(c / 3, 0.5)` with N(0, 0.1²) spread on both
/// axes. Samples are grouped by class; labels are sparse.
pub fn vertical_data<R: Rng + ?Sized>(samples: usize, classes: usize, rng: &mut R) -> Dataset {
    let mut rows = Vec::with_capacity(samples * classes);
    let mut labels = Vec::with_capacity(samples * classes);
    for class in 0..classes {
        let cx = class as f64 / 3.0;
        for _ in 0..samples {
            let x = Matrix::sample_standard_normal(rng) * 0.1 + cx;
            let y = Matrix::sample_standard_normal(rng) * 0.1 + 0.5;
            rows.push(vec![x, y]);
            labels.push(class);
        }
    }
    Dataset { features: Matrix::from_data(rows), labels: Labels::Sparse(labels) }
}

/// `vertical_data` with one class per output of `network`.
///
/// Fails if the network does not take the two coordinates as input.
pub fn vertical_data_for<R: Rng + ?Sized>(
    network: &NetworkSpec,
    samples: usize,
    rng: &mut R,
) -> Result<Dataset, SearchError> {
    let n_inputs = network.n_inputs();
    if n_inputs != 2 {
        return Err(SearchError::ShapeMismatch {
            expected: (samples * network.n_outputs(), n_inputs),
            got: (samples * network.n_outputs(), 2),
        });
    }
    Ok(vertical_data(samples, network.n_outputs(), rng))
}
