use thiserror::Error;

/// Everything that can go wrong before or around a search run.
///
/// Shape errors inside the numeric core (mismatched matrix products and the
/// like) are precondition violations and panic instead; the checks that
/// produce these values run up front so a bad dataset fails before the loop.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    #[error("{features} feature rows but {labels} labels")]
    SampleCountMismatch { features: usize, labels: usize },
    #[error("label {label} of sample {index} is not a class index below {classes}")]
    LabelOutOfRange {
        index: usize,
        label: usize,
        classes: usize,
    },
    #[error("one-hot labels have {got} columns, the network predicts {expected} classes")]
    OneHotWidth { expected: usize, got: usize },
    #[error("one-hot row {index} is not a distribution over classes")]
    NotOneHot { index: usize },
    #[error("invalid architecture: {0}")]
    InvalidArchitecture(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("dataset has no samples")]
    EmptyDataset,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
