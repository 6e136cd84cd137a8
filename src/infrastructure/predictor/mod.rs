//! Predictor loading and model implementations

pub mod artifact;
pub mod factory;
pub mod linear;

pub use artifact::{LinearArtifact, PredictorArtifact};
pub use factory::PredictorFactory;
pub use linear::LinearModel;
