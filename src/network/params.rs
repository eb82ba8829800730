use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Owned copy of one layer's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    pub weights: Matrix,
    pub biases: Matrix,
}

/// Deep copy of every weight and bias in a network, input → output.
///
/// A snapshot never shares storage with the network it was taken from, so
/// mutating the network afterwards cannot leak into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub layers: Vec<LayerParams>,
}

impl ParameterSet {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of scalar parameters.
    pub fn count(&self) -> usize {
        self.layers.iter()
            .map(|l| l.weights.rows * l.weights.cols + l.biases.rows * l.biases.cols)
            .sum()
    }
}
