use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;

/// Categorical cross-entropy loss for use with a Softmax output layer.
pub struct CrossEntropyLoss;

/// Predictions are clipped into [CLIP, 1 - CLIP] so log() never sees 0.
pub const CLIP: f64 = 1e-7;

impl CrossEntropyLoss {
    /// Per-sample negative log-likelihood.
    ///
    /// `predicted` — softmax probabilities, shape [samples, n_classes]
    /// `labels`    — sparse class indices or one-hot rows for the same samples
    ///
    /// # Panics
    /// Panics if the labels do not describe `predicted.rows` samples, or if
    /// one-hot rows are not `predicted.cols` wide; run `Labels::validate`
    /// first for a recoverable error.
    pub fn forward(predicted: &Matrix, labels: &Labels) -> Vec<f64> {
        assert_eq!(labels.len(), predicted.rows, "one label per predicted row");
        let clipped = predicted.map(|p| p.clamp(CLIP, 1.0 - CLIP));

        let confidences: Vec<f64> = match labels {
            Labels::Sparse(indices) => clipped.data.iter().zip(indices.iter())
                .map(|(row, &class)| row[class])
                .collect(),
            Labels::OneHot(expected) => {
                assert_eq!(expected.cols, predicted.cols, "one-hot width must match predicted classes");
                clipped.data.iter().zip(expected.data.iter())
                    .map(|(row, target)| row.iter().zip(target.iter()).map(|(p, t)| p * t).sum())
                    .collect()
            }
        };

        confidences.into_iter().map(|c| -c.ln()).collect()
    }

    /// Mean loss over the whole batch.
    pub fn calculate(predicted: &Matrix, labels: &Labels) -> f64 {
        let losses = CrossEntropyLoss::forward(predicted, labels);
        if losses.is_empty() {
            return 0.0;
        }
        losses.iter().sum::<f64>() / losses.len() as f64
    }
}

/// Fraction of samples whose highest-probability class is the true class.
pub fn accuracy(predicted: &Matrix, labels: &Labels) -> f64 {
    let n = labels.len();
    if n == 0 {
        return 0.0;
    }
    let correct = predicted.argmax_rows().into_iter().zip(labels.classes())
        .filter(|(p, y)| p == y)
        .count();
    correct as f64 / n as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn probabilities() -> Matrix {
        Matrix::from_data(vec![
            vec![0.7, 0.1, 0.2],
            vec![0.1, 0.5, 0.4],
            vec![0.02, 0.9, 0.08],
        ])
    }

    #[test]
    fn sparse_loss_picks_true_class() {
        let labels = Labels::Sparse(vec![0, 1, 1]);
        let losses = CrossEntropyLoss::forward(&probabilities(), &labels);

        assert_abs_diff_eq!(losses[0], -(0.7f64).ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(losses[1], -(0.5f64).ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(losses[2], -(0.9f64).ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            CrossEntropyLoss::calculate(&probabilities(), &labels),
            -((0.7f64).ln() + (0.5f64).ln() + (0.9f64).ln()) / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn encodings_agree() {
        let sparse = Labels::Sparse(vec![0, 1, 1]);
        let one_hot = Labels::OneHot(sparse.to_one_hot(3));
        assert_abs_diff_eq!(
            CrossEntropyLoss::calculate(&probabilities(), &sparse),
            CrossEntropyLoss::calculate(&probabilities(), &one_hot),
            epsilon = 1e-12
        );
    }

    #[test]
    fn clipping_keeps_loss_finite_and_positive() {
        let certain = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);

        let right = CrossEntropyLoss::calculate(&certain, &Labels::Sparse(vec![0, 1]));
        let wrong = CrossEntropyLoss::calculate(&certain, &Labels::Sparse(vec![1, 0]));

        assert!(right > 0.0 && right < 1e-6);
        assert_abs_diff_eq!(wrong, -(CLIP).ln(), epsilon = 1e-9);
    }

    #[test]
    #[should_panic(expected = "one-hot width must match")]
    fn forward_rejects_narrow_one_hot_rows() {
        let narrow = Labels::OneHot(Matrix::from_data(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        ]));
        CrossEntropyLoss::forward(&probabilities(), &narrow);
    }

    #[test]
    fn accuracy_counts_argmax_hits() {
        let labels = Labels::Sparse(vec![0, 2, 1]);
        assert_abs_diff_eq!(accuracy(&probabilities(), &labels), 2.0 / 3.0);
        assert_eq!(accuracy(&Matrix::default(), &Labels::Sparse(vec![])), 0.0);
    }
}
