use serde::{Serialize, Deserialize};

/// Emitted by `train_loop` every time a candidate beats the incumbent.
///
/// When a `progress_tx` channel is configured in `SearchConfig`, the loop
/// sends one `Improvement` per accepted iteration. Receivers format, print
/// or plot them; the loop itself never writes to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// 0-based iteration that produced the new incumbent.
    pub iteration: usize,
    /// Mean cross-entropy of the new incumbent over the full dataset.
    pub loss: f64,
    /// Fraction of samples classified correctly, in [0, 1].
    pub accuracy: f64,
}
