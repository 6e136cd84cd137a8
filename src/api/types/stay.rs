//! Stay-prediction response types.

use serde::{Deserialize, Serialize};

/// One rounded prediction, in the column-style spelling callers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedStay {
    #[serde(rename = "Predicted_Stay")]
    pub predicted_stay: i64,
}

/// `{"predictions": [{"Predicted_Stay": <days>}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictStayResponse {
    pub predictions: Vec<PredictedStay>,
}

impl PredictStayResponse {
    pub fn new(stays: Vec<i64>) -> Self {
        Self {
            predictions: stays
                .into_iter()
                .map(|predicted_stay| PredictedStay { predicted_stay })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_spelling() {
        let response = PredictStayResponse::new(vec![5]);

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"predictions":[{"Predicted_Stay":5}]}"#);
    }
}
