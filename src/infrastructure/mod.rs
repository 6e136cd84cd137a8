//! Infrastructure layer - predictor loading, snapshot reading, services

pub mod logging;
pub mod predictor;
pub mod services;
pub mod snapshot;
