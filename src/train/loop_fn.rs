use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::error::SearchError;
use crate::loss::labels::Labels;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::optim::perturb::Perturbation;
use crate::train::report::TrainingReport;
use crate::train::state::{evaluate, StepOutcome, TrainingState};
use crate::train::train_config::SearchConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains a fresh network by random-perturbation hill climbing.
///
/// # Arguments
/// - `features` — one sample per row, `config.network.n_inputs()` columns
/// - `labels`   — ground truth for the same samples
/// - `config`   — architecture, iteration budget, scales, seed, progress channel
///
/// Each iteration adds Gaussian noise to every parameter, evaluates the
/// whole dataset in one batch and keeps the noise only if the loss drops
/// strictly below the best seen so far. After the last iteration the network
/// is reset to that best point and evaluated once more.
///
/// # Errors
/// Fails before any iteration runs if the config is invalid or the dataset
/// does not fit the network.
#[tracing::instrument(skip_all, fields(iterations = config.iterations, seed = ?config.seed))]
pub fn train_loop(
    features: &Matrix,
    labels: &Labels,
    config: &SearchConfig,
) -> Result<TrainingReport, SearchError> {
    config.validate()?;
    check_dataset(features, labels, config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::new(&config.network, config.init_scale, &mut rng);
    let initial = evaluate(&mut network, features, labels);
    debug!(
        parameters = network.snapshot().count(),
        loss = initial.loss,
        accuracy = initial.accuracy,
        "initial evaluation"
    );

    let perturbation = Perturbation::new(config.noise_scale);
    let mut state = TrainingState::new(network);
    let mut improvements = Vec::new();
    let mut loss_history = Vec::new();

    for _ in 0..config.iterations {
        let (next, outcome) = state.step(features, labels, &perturbation, &mut rng);
        state = next;
        loss_history.push(outcome.loss());

        if let StepOutcome::Accepted(improvement) = outcome {
            debug!(
                iteration = improvement.iteration,
                loss = improvement.loss,
                accuracy = improvement.accuracy,
                "new set of weights found"
            );
            if let Some(ref tx) = config.progress_tx {
                // A dropped receiver only loses the event; the run goes on.
                let _ = tx.send(improvement.clone());
            }
            improvements.push(improvement);
        }
    }

    let lowest_loss = state.lowest_loss.is_finite().then_some(state.lowest_loss);
    let mut best = state.into_best();
    let final_eval = evaluate(&mut best, features, labels);

    let report = TrainingReport {
        initial,
        final_eval,
        lowest_loss,
        improvements,
        loss_history,
        parameters: best.snapshot(),
    };
    info!("{}", report.summary());

    Ok(report)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Fails fast when the dataset cannot be fed through the configured network.
fn check_dataset(features: &Matrix, labels: &Labels, config: &SearchConfig) -> Result<(), SearchError> {
    if features.rows == 0 {
        return Err(SearchError::EmptyDataset);
    }
    let n_inputs = config.network.n_inputs();
    if features.cols != n_inputs {
        return Err(SearchError::ShapeMismatch {
            expected: (features.rows, n_inputs),
            got: features.shape(),
        });
    }
    labels.validate(features.rows, config.network.n_outputs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vertical::vertical_data;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::mpsc;

    fn small_config(seed: u64) -> SearchConfig {
        SearchConfig { iterations: 200, ..SearchConfig::seeded(seed) }
    }

    #[test]
    fn rejects_wrong_feature_width() {
        let features = Matrix::zeros(4, 3);
        let labels = Labels::Sparse(vec![0, 1, 2, 0]);

        let err = train_loop(&features, &labels, &small_config(0)).unwrap_err();

        assert!(matches!(err, SearchError::ShapeMismatch { expected: (4, 2), got: (4, 3) }));
    }

    #[test]
    fn rejects_empty_and_mislabelled_data() {
        let config = small_config(0);
        assert!(matches!(
            train_loop(&Matrix::zeros(0, 2), &Labels::Sparse(vec![]), &config),
            Err(SearchError::EmptyDataset)
        ));
        assert!(matches!(
            train_loop(&Matrix::zeros(2, 2), &Labels::Sparse(vec![0, 5]), &config),
            Err(SearchError::LabelOutOfRange { index: 1, label: 5, classes: 3 })
        ));
        assert!(matches!(
            train_loop(&Matrix::zeros(2, 2), &Labels::Sparse(vec![0]), &config),
            Err(SearchError::SampleCountMismatch { features: 2, labels: 1 })
        ));
    }

    #[test]
    fn rejects_unbounded_budget_before_running() {
        let data = vertical_data(5, 3, &mut StdRng::seed_from_u64(3));
        let config = SearchConfig { iterations: usize::MAX, ..SearchConfig::seeded(3) };

        assert!(matches!(
            train_loop(&data.features, &data.labels, &config),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_one_hot_rows_without_a_class() {
        let data = vertical_data(10, 3, &mut StdRng::seed_from_u64(2));
        let mut targets = data.labels.to_one_hot(3);
        targets.data[7] = vec![0.0, 0.0, 0.0];

        let err = train_loop(&data.features, &Labels::OneHot(targets), &small_config(2)).unwrap_err();

        assert!(matches!(err, SearchError::NotOneHot { index: 7 }));
    }

    #[test]
    fn zero_iterations_reports_initial_network() {
        let data = vertical_data(10, 3, &mut StdRng::seed_from_u64(4));
        let config = SearchConfig { iterations: 0, ..SearchConfig::seeded(4) };

        let report = train_loop(&data.features, &data.labels, &config).unwrap();

        assert_eq!(report.lowest_loss, None);
        assert!(report.improvements.is_empty());
        assert_eq!(report.final_eval, report.initial);
    }

    #[test]
    fn progress_channel_receives_every_improvement() {
        let data = vertical_data(20, 3, &mut StdRng::seed_from_u64(5));
        let (tx, rx) = mpsc::channel();
        let config = SearchConfig { progress_tx: Some(tx), ..small_config(5) };

        let report = train_loop(&data.features, &data.labels, &config).unwrap();
        drop(config);
        let received: Vec<_> = rx.iter().collect();

        assert!(!received.is_empty());
        assert_eq!(received, report.improvements);
        assert_eq!(received[0].iteration, 0);
    }

    #[test]
    fn dropped_receiver_does_not_stop_the_run() {
        let data = vertical_data(20, 3, &mut StdRng::seed_from_u64(6));
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = SearchConfig { progress_tx: Some(tx), ..small_config(6) };

        let report = train_loop(&data.features, &data.labels, &config).unwrap();

        assert_eq!(report.iterations(), 200);
    }
}
