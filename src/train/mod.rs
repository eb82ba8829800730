pub mod improvement;
pub mod loop_fn;
pub mod report;
pub mod state;
pub mod train_config;

pub use improvement::Improvement;
pub use loop_fn::train_loop;
pub use report::{Evaluation, TrainingReport};
pub use state::{evaluate, StepOutcome, TrainingState};
pub use train_config::SearchConfig;
