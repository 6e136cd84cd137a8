//! Bed-availability response types.

use serde::{Deserialize, Serialize};

/// `{"Available_Beds": <count>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedsAvailableResponse {
    #[serde(rename = "Available_Beds")]
    pub available_beds: i64,
}
