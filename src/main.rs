use std::error::Error;
use std::sync::mpsc;
use std::thread;

use rand::{rngs::StdRng, SeedableRng};

use perturb_nn::{data::vertical_data_for, logging, train_loop, SearchConfig};

/// Seed used for both the dataset and the search when no config file is given.
const SEED: u64 = 0;

/// Points generated per class.
const SAMPLES_PER_CLASS: usize = 100;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;

    let mut config = match std::env::var("PERTURB_NN_CONFIG") {
        Ok(path) => SearchConfig::load_json(&path)?,
        Err(_) => SearchConfig::seeded(SEED),
    };

    let n_classes = config.network.n_outputs();
    let mut data_rng = StdRng::seed_from_u64(config.seed.unwrap_or(SEED));
    let data = vertical_data_for(&config.network, SAMPLES_PER_CLASS, &mut data_rng)?;

    let (tx, rx) = mpsc::channel();
    config.progress_tx = Some(tx);

    // The search runs on its own thread; this one only prints progress.
    let trainer = thread::spawn(move || train_loop(&data.features, &data.labels, &config));

    for improvement in rx {
        println!(
            "New set of weights found, iteration: {} loss: {:.6} acc: {:.3}",
            improvement.iteration, improvement.loss, improvement.accuracy
        );
    }

    let report = trainer.join().map_err(|_| "training thread panicked")??;
    println!("predicted class counts before: {:?}", report.initial.class_counts(n_classes));
    println!("predicted class counts after:  {:?}", report.final_eval.class_counts(n_classes));
    Ok(())
}
