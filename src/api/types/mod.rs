//! Request/response types shared by the handlers

pub mod beds;
pub mod error;
pub mod json;
pub mod stay;

pub use beds::BedsAvailableResponse;
pub use error::{ApiResponse, ErrorResponse};
pub use json::Json;
pub use stay::{PredictStayResponse, PredictedStay};
