pub mod perturb;

pub use perturb::Perturbation;
