use rand::Rng;

use crate::math::matrix::Matrix;

/// Fully connected affine layer: `output = inputs · weights + biases`.
#[derive(Debug, Clone)]
pub struct Layer{
    pub weights: Matrix,  // n_inputs × n_neurons
    pub biases: Matrix,   // 1 × n_neurons
    pub output: Matrix,
}

impl Layer {
    /// Weights are `init_scale * N(0, 1)`, biases start at zero.
    pub fn new<R: Rng + ?Sized>(
        n_inputs: usize,
        n_neurons: usize,
        init_scale: f64,
        rng: &mut R,
    ) -> Layer {
        Layer {
            weights: Matrix::gaussian(n_inputs, n_neurons, init_scale, rng),
            biases: Matrix::zeros(1, n_neurons),
            output: Matrix::default(),
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.rows
    }

    pub fn n_neurons(&self) -> usize {
        self.weights.cols
    }

    /// Forward pass over a batch (one sample per row).
    ///
    /// # Panics
    /// Panics if `inputs.cols` differs from the layer's input width.
    pub fn forward(&mut self, inputs: &Matrix) -> Matrix {
        assert_eq!(
            inputs.cols,
            self.n_inputs(),
            "layer expects {} input features, got {}",
            self.n_inputs(),
            inputs.cols
        );
        self.output = (inputs * &self.weights).add_row(&self.biases);
        self.output.clone()
    }

    /// Replaces the parameters with new values of identical shape.
    pub fn set_parameters(&mut self, weights: Matrix, biases: Matrix) {
        assert_eq!(weights.shape(), self.weights.shape(), "weight shape is fixed");
        assert_eq!(biases.shape(), self.biases.shape(), "bias shape is fixed");
        self.weights = weights;
        self.biases = biases;
    }
}
