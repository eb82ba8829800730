use rand::Rng;

use crate::{math::matrix::Matrix, layers::dense::Layer, network::network::Network};

/// Gaussian noise proposal for random-perturbation search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    pub scale: f64,
}

impl Perturbation {
    pub fn new(scale: f64) -> Perturbation {
        Perturbation { scale }
    }

    /// Moves one layer to `old + scale * N(0, 1)`, weights first, then biases.
    pub fn step<R: Rng + ?Sized>(&self, layer: &mut Layer, rng: &mut R) {
        let (w_rows, w_cols) = layer.weights.shape();
        let (b_rows, b_cols) = layer.biases.shape();
        let weights = layer.weights.clone() + Matrix::gaussian(w_rows, w_cols, self.scale, rng);
        let biases = layer.biases.clone() + Matrix::gaussian(b_rows, b_cols, self.scale, rng);
        layer.set_parameters(weights, biases);
    }

    /// Perturbs every layer of `network`, input → output.
    pub fn apply<R: Rng + ?Sized>(&self, network: &mut Network, rng: &mut R) {
        for layer in &mut network.layers {
            self.step(layer, rng);
        }
    }
}
