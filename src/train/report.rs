use serde::{Serialize, Deserialize};

use crate::network::params::ParameterSet;
use crate::train::improvement::Improvement;

/// Loss, accuracy and predicted classes of one full-batch forward pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss: f64,
    pub accuracy: f64,
    /// Arg-max class of every sample.
    pub predictions: Vec<usize>,
}

impl Evaluation {
    /// Number of samples predicted as each of `n_classes` classes.
    pub fn class_counts(&self, n_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; n_classes];
        for &p in &self.predictions {
            if p < n_classes {
                counts[p] += 1;
            }
        }
        counts
    }
}

/// Everything a finished run hands back to its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    /// The freshly initialized network, before any perturbation.
    pub initial: Evaluation,
    /// The network restored to the incumbent after the last iteration.
    pub final_eval: Evaluation,
    /// Lowest loss ever accepted; `None` if no iteration improved.
    pub lowest_loss: Option<f64>,
    pub improvements: Vec<Improvement>,
    /// Candidate loss of every iteration, accepted or not.
    pub loss_history: Vec<f64>,
    /// Incumbent parameters.
    pub parameters: ParameterSet,
}

impl TrainingReport {
    pub fn iterations(&self) -> usize {
        self.loss_history.len()
    }

    /// One-line human-readable summary of the run.
    pub fn summary(&self) -> String {
        let lowest = match self.lowest_loss {
            Some(loss) => format!("{loss:.6}"),
            None => "none".to_owned(),
        };
        format!(
            "{} iterations, {} improvements, lowest loss {} | loss {:.6} -> {:.6} | accuracy {:.3} -> {:.3}",
            self.iterations(),
            self.improvements.len(),
            lowest,
            self.initial.loss,
            self.final_eval.loss,
            self.initial.accuracy,
            self.final_eval.accuracy,
        )
    }
}
