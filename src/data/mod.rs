pub mod spiral;
pub mod vertical;

use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;

pub use spiral::spiral_data;
pub use vertical::{vertical_data, vertical_data_for};

/// Feature matrix (one sample per row) plus matching labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Labels,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.features.rows
    }

    pub fn is_empty(&self) -> bool {
        self.features.rows == 0
    }
}
