use serde::{Serialize, Deserialize};
use crate::activation::activation::ActivationFunction;
use crate::error::SearchError;

/// Describes one dense layer and the activation that follows it.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `input_size` — number of neurons feeding into this layer (i.e. the output
///                  size of the previous layer, or the raw input dimension for
///                  the first layer)
/// - `activation` — activation applied after the affine transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub input_size: usize,
    pub activation: ActivationFunction,
}

/// A serializable description of a network architecture, input → output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    /// Dense → ReLU → Dense → Softmax.
    pub fn two_layer(n_inputs: usize, hidden: usize, n_classes: usize) -> NetworkSpec {
        NetworkSpec {
            layers: vec![
                LayerSpec { size: hidden, input_size: n_inputs, activation: ActivationFunction::ReLU },
                LayerSpec { size: n_classes, input_size: hidden, activation: ActivationFunction::Softmax },
            ],
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, |l| l.input_size)
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    /// Rejects empty specs, zero-width layers, and layers whose input width
    /// does not match the previous layer's size.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.layers.is_empty() {
            return Err(SearchError::InvalidArchitecture("network has no layers".to_owned()));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.size == 0 || layer.input_size == 0 {
                return Err(SearchError::InvalidArchitecture(format!("layer {i} has zero width")));
            }
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[1].input_size != pair[0].size {
                return Err(SearchError::InvalidArchitecture(format!(
                    "layer {} expects {} inputs but layer {} produces {}",
                    i + 1, pair[1].input_size, i, pair[0].size
                )));
            }
        }
        Ok(())
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::two_layer(2, 3, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_layout() {
        let spec = NetworkSpec::default();
        assert_eq!(spec.n_inputs(), 2);
        assert_eq!(spec.n_outputs(), 3);
        assert_eq!(spec.layers[0].activation, ActivationFunction::ReLU);
        assert_eq!(spec.layers[1].activation, ActivationFunction::Softmax);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_broken_chains() {
        let mut spec = NetworkSpec::two_layer(2, 3, 3);
        spec.layers[1].input_size = 4;
        assert!(matches!(spec.validate(), Err(SearchError::InvalidArchitecture(_))));

        assert!(NetworkSpec { layers: vec![] }.validate().is_err());
        assert!(NetworkSpec::two_layer(2, 0, 3).validate().is_err());
    }
}
