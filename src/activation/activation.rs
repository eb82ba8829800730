use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Element-wise `max(0, x)`.
    ReLU,
    /// Row-valued: each sample row is normalized as a whole.
    Softmax,
}

impl ActivationFunction {
    /// Activates a whole batch (one sample per row).
    pub fn apply(&self, inputs: &Matrix) -> Matrix {
        match self {
            ActivationFunction::ReLU => inputs.map(|x| x.max(0.0)),
            ActivationFunction::Softmax => softmax(inputs),
        }
    }
}

/// Row-wise softmax. The row maximum is subtracted before exponentiating so
/// every exponent is <= 0 and `exp` cannot overflow.
fn softmax(inputs: &Matrix) -> Matrix {
    let mut exps = Matrix::zeros(inputs.rows, inputs.cols);
    for (i, max) in inputs.row_max().into_iter().enumerate() {
        for j in 0..inputs.cols {
            exps.data[i][j] = (inputs.data[i][j] - max).exp();
        }
    }

    let sums = exps.row_sum();
    for (row, sum) in exps.data.iter_mut().zip(sums) {
        for e in row.iter_mut() {
            *e /= sum;
        }
    }
    exps
}

/// An activation stage of the network. Keeps the output of the last forward
/// pass around so it can be inspected after evaluation.
#[derive(Debug, Clone)]
pub struct Activation {
    pub function: ActivationFunction,
    pub output: Matrix,
}

impl Activation {
    pub fn new(function: ActivationFunction) -> Activation {
        Activation { function, output: Matrix::default() }
    }

    pub fn forward(&mut self, inputs: &Matrix) -> Matrix {
        self.output = self.function.apply(inputs);
        self.output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn relu_clamps_negatives() {
        let mut relu = Activation::new(ActivationFunction::ReLU);
        let out = relu.forward(&Matrix::from_data(vec![vec![-1.5, 0.0, 2.0]]));
        assert_eq!(out.data, vec![vec![0.0, 0.0, 2.0]]);
        assert_eq!(relu.output, out);
    }

    #[test]
    fn softmax_rows_are_distributions() {
        let inputs = Matrix::from_data(vec![
            vec![1.0, 2.0, 3.0],
            vec![-4.0, 0.0, 4.0],
            vec![0.0, 0.0, 0.0],
        ]);
        let out = ActivationFunction::Softmax.apply(&inputs);

        for row in &out.data {
            assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
        }
        assert_abs_diff_eq!(out.data[2][0], 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out.data[0][2], 0.665_240_955_774_821_6, epsilon = 1e-12);
    }

    #[test]
    fn softmax_survives_large_inputs() {
        let base = Matrix::from_data(vec![
            vec![1.0, 2.0, 3.0],
            vec![-0.7, 0.2, 0.9],
        ]);
        let scaled = base.map(|x| x * 1e3);
        let huge = base.map(|x| x * 1e300);

        for out in [ActivationFunction::Softmax.apply(&scaled), ActivationFunction::Softmax.apply(&huge)] {
            for row in &out.data {
                assert!(row.iter().all(|p| p.is_finite() && *p >= 0.0));
                assert_abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn softmax_is_shift_invariant() {
        let a = Matrix::from_data(vec![vec![0.1, 0.2, 0.7]]);
        let b = a.map(|x| x + 50.0);
        let pa = ActivationFunction::Softmax.apply(&a);
        let pb = ActivationFunction::Softmax.apply(&b);
        for (x, y) in pa.data[0].iter().zip(pb.data[0].iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-12);
        }
    }
}
