pub mod cross_entropy;
pub mod labels;

pub use cross_entropy::{accuracy, CrossEntropyLoss};
pub use labels::Labels;
