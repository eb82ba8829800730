use std::sync::mpsc;
use serde::{Serialize, Deserialize};

use crate::error::SearchError;
use crate::network::spec::NetworkSpec;
use crate::train::improvement::Improvement;

/// Largest iteration budget whose per-iteration loss history can be allocated.
pub const MAX_ITERATIONS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `network`     — architecture to build and search over
/// - `iterations`  — number of perturb/evaluate/decide rounds
/// - `noise_scale` — standard deviation of the Gaussian noise added to every
///                   parameter each round
/// - `init_scale`  — standard deviation of the initial weights
/// - `seed`        — RNG seed; `None` seeds from OS entropy
/// - `progress_tx` — optional channel sender; one `Improvement` is sent per
///                   accepted iteration.  A dropped receiver is ignored and
///                   the run continues to the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub network: NetworkSpec,
    pub iterations: usize,
    pub noise_scale: f64,
    pub init_scale: f64,
    pub seed: Option<u64>,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<Improvement>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            network: NetworkSpec::default(),
            iterations: 10_000,
            noise_scale: 0.05,
            init_scale: 0.01,
            seed: None,
            progress_tx: None,
        }
    }
}

impl SearchConfig {
    /// Reference configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        SearchConfig { seed: Some(seed), ..SearchConfig::default() }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        self.network.validate()?;
        if self.iterations > MAX_ITERATIONS {
            return Err(SearchError::InvalidConfig(format!(
                "iterations must be at most {MAX_ITERATIONS}, got {}",
                self.iterations
            )));
        }
        for (name, value) in [("noise_scale", self.noise_scale), ("init_scale", self.init_scale)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Serializes the config (minus the progress channel) to pretty JSON.
    pub fn save_json(&self, path: &str) -> Result<(), SearchError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads a config written by `save_json`. Missing fields take their
    /// default values.
    pub fn load_json(path: &str) -> Result<SearchConfig, SearchError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: SearchConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_configuration() {
        let config = SearchConfig::default();
        assert_eq!(config.iterations, 10_000);
        assert_eq!(config.noise_scale, 0.05);
        assert_eq!(config.init_scale, 0.01);
        assert_eq!(config.network, NetworkSpec::two_layer(2, 3, 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_scales() {
        let config = SearchConfig { noise_scale: f64::NAN, ..SearchConfig::default() };
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));

        let config = SearchConfig { init_scale: -0.1, ..SearchConfig::default() };
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_unbounded_budget() {
        let config = SearchConfig { iterations: usize::MAX, ..SearchConfig::seeded(0) };
        assert!(matches!(config.validate(), Err(SearchError::InvalidConfig(_))));

        let config = SearchConfig { iterations: MAX_ITERATIONS, ..SearchConfig::seeded(0) };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"iterations": 25, "seed": 9}"#).unwrap();
        assert_eq!(config.iterations, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.noise_scale, 0.05);
        assert!(config.progress_tx.is_none());
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("perturb-nn-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let config = SearchConfig { iterations: 42, ..SearchConfig::seeded(5) };
        config.save_json(path).unwrap();
        let loaded = SearchConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded.iterations, 42);
        assert_eq!(loaded.seed, Some(5));
        assert_eq!(loaded.network, config.network);
    }
}
