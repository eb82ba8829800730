use rand::Rng;

use crate::activation::activation::Activation;
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::params::{LayerParams, ParameterSet};
use crate::network::spec::NetworkSpec;

/// A stack of dense layers, each followed by its activation.
#[derive(Debug, Clone)]
pub struct Network {
    pub layers: Vec<Layer>,
    pub activations: Vec<Activation>,
}

impl Network {
    /// Builds a freshly initialized network from `spec`.
    ///
    /// Layers are initialized in order, so a seeded `rng` gives the same
    /// starting parameters every time.
    pub fn new<R: Rng + ?Sized>(spec: &NetworkSpec, init_scale: f64, rng: &mut R) -> Network {
        let layers = spec.layers.iter()
            .map(|l| Layer::new(l.input_size, l.size, init_scale, rng))
            .collect();
        let activations = spec.layers.iter()
            .map(|l| Activation::new(l.activation))
            .collect();
        Network { layers, activations }
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, |l| l.n_inputs())
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.n_neurons())
    }

    /// Forward pass over a whole batch; returns the last activation's output.
    pub fn forward(&mut self, inputs: &Matrix) -> Matrix {
        let mut current = inputs.clone();
        for (layer, activation) in self.layers.iter_mut().zip(self.activations.iter_mut()) {
            let z = layer.forward(&current);
            current = activation.forward(&z);
        }
        current
    }

    pub fn snapshot(&self) -> ParameterSet {
        ParameterSet {
            layers: self.layers.iter()
                .map(|l| LayerParams { weights: l.weights.clone(), biases: l.biases.clone() })
                .collect(),
        }
    }

    /// Overwrites every layer's parameters with copies from `params`.
    ///
    /// # Panics
    /// Panics if `params` was taken from a network of a different shape.
    pub fn restore(&mut self, params: &ParameterSet) {
        assert_eq!(params.len(), self.layers.len(), "snapshot layer count differs");
        for (layer, saved) in self.layers.iter_mut().zip(params.layers.iter()) {
            layer.set_parameters(saved.weights.clone(), saved.biases.clone());
        }
    }
}
