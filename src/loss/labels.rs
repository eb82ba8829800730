use serde::{Serialize, Deserialize};

use crate::error::SearchError;
use crate::math::matrix::Matrix;

/// How far a one-hot row may sum away from 1.0.
const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Ground truth for a batch, in one of the two supported encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Labels {
    /// One class index per sample.
    Sparse(Vec<usize>),
    /// One row per sample with a single 1.0 at the true class.
    OneHot(Matrix),
}

impl Labels {
    pub fn len(&self) -> usize {
        match self {
            Labels::Sparse(indices) => indices.len(),
            Labels::OneHot(matrix) => matrix.rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True class index of every sample.
    pub fn classes(&self) -> Vec<usize> {
        match self {
            Labels::Sparse(indices) => indices.clone(),
            Labels::OneHot(matrix) => matrix.argmax_rows(),
        }
    }

    pub fn to_one_hot(&self, n_classes: usize) -> Matrix {
        let mut res = Matrix::zeros(self.len(), n_classes);
        for (row, class) in self.classes().into_iter().enumerate() {
            res.data[row][class] = 1.0;
        }
        res
    }

    /// Checks that the labels describe exactly `samples` samples drawn from
    /// `n_classes` classes.
    pub fn validate(&self, samples: usize, n_classes: usize) -> Result<(), SearchError> {
        if self.len() != samples {
            return Err(SearchError::SampleCountMismatch { features: samples, labels: self.len() });
        }
        match self {
            Labels::Sparse(indices) => {
                if let Some((index, &label)) = indices.iter().enumerate().find(|(_, &l)| l >= n_classes) {
                    return Err(SearchError::LabelOutOfRange { index, label, classes: n_classes });
                }
            }
            Labels::OneHot(matrix) => {
                if matrix.rows > 0 && matrix.cols != n_classes {
                    return Err(SearchError::OneHotWidth { expected: n_classes, got: matrix.cols });
                }
                // Targets must be a distribution, else the loss can go negative or infinite.
                let bad_row = matrix.data.iter().position(|row| {
                    let sum: f64 = row.iter().sum();
                    row.iter().any(|t| t.is_nan() || *t < 0.0) || (sum - 1.0).abs() > ROW_SUM_TOLERANCE
                });
                if let Some(index) = bad_row {
                    return Err(SearchError::NotOneHot { index });
                }
            }
        }
        Ok(())
    }
}
