pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::{Activation, ActivationFunction};
pub use layers::dense::Layer;
pub use network::{Network, NetworkSpec, ParameterSet};
pub use loss::{CrossEntropyLoss, Labels};
pub use optim::perturb::Perturbation;
pub use train::{train_loop, Improvement, SearchConfig, TrainingReport, TrainingState};
pub use data::Dataset;
pub use error::SearchError;
