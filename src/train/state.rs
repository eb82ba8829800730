use rand::Rng;

use crate::loss::cross_entropy::{accuracy, CrossEntropyLoss};
use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::params::ParameterSet;
use crate::optim::perturb::Perturbation;
use crate::train::improvement::Improvement;
use crate::train::report::Evaluation;

/// Result of a single search iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The candidate beat the incumbent and replaced it.
    Accepted(Improvement),
    /// The candidate was no better; it was reset to the incumbent.
    Rejected { loss: f64, accuracy: f64 },
}

impl StepOutcome {
    /// Loss of the candidate evaluated in this step.
    pub fn loss(&self) -> f64 {
        match self {
            StepOutcome::Accepted(improvement) => improvement.loss,
            StepOutcome::Rejected { loss, .. } => *loss,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, StepOutcome::Accepted(_))
    }
}

/// Search state carried from one iteration to the next.
///
/// `candidate` is the network being perturbed; `incumbent` is an owned copy
/// of the best parameters seen so far. Between steps the two always hold the
/// same values.
#[derive(Debug, Clone)]
pub struct TrainingState {
    pub candidate: Network,
    pub incumbent: ParameterSet,
    /// `f64::INFINITY` until the first candidate is accepted.
    pub lowest_loss: f64,
    /// Number of steps taken so far.
    pub iteration: usize,
}

impl TrainingState {
    pub fn new(network: Network) -> TrainingState {
        let incumbent = network.snapshot();
        TrainingState {
            candidate: network,
            incumbent,
            lowest_loss: f64::INFINITY,
            iteration: 0,
        }
    }

    /// One perturb → evaluate → keep-or-revert round.
    ///
    /// A candidate is accepted only when its loss is strictly below
    /// `lowest_loss`; otherwise every parameter is reset from the incumbent
    /// and the noise is discarded.
    pub fn step<R: Rng + ?Sized>(
        self,
        features: &Matrix,
        labels: &Labels,
        perturbation: &Perturbation,
        rng: &mut R,
    ) -> (TrainingState, StepOutcome) {
        let TrainingState { mut candidate, mut incumbent, mut lowest_loss, iteration } = self;

        perturbation.apply(&mut candidate, rng);
        let eval = evaluate(&mut candidate, features, labels);

        let outcome = if eval.loss < lowest_loss {
            incumbent = candidate.snapshot();
            lowest_loss = eval.loss;
            StepOutcome::Accepted(Improvement { iteration, loss: eval.loss, accuracy: eval.accuracy })
        } else {
            candidate.restore(&incumbent);
            StepOutcome::Rejected { loss: eval.loss, accuracy: eval.accuracy }
        };

        let next = TrainingState { candidate, incumbent, lowest_loss, iteration: iteration + 1 };
        (next, outcome)
    }

    /// Ends the search, handing back the network set to the incumbent.
    pub fn into_best(self) -> Network {
        let mut network = self.candidate;
        network.restore(&self.incumbent);
        network
    }
}

/// Full-batch forward pass followed by loss and accuracy.
pub fn evaluate(network: &mut Network, features: &Matrix, labels: &Labels) -> Evaluation {
    let probabilities = network.forward(features);
    Evaluation {
        loss: CrossEntropyLoss::calculate(&probabilities, labels),
        accuracy: accuracy(&probabilities, labels),
        predictions: probabilities.argmax_rows(),
    }
}
