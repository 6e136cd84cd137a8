//! Recognized feature columns for the stay predictor.

use crate::domain::DomainError;

/// Columns the predictor was trained on, in the order the model expects them.
///
/// Every record fed to the predictor must contain all of these; the set and
/// order are fixed by the training pipeline and must not be reordered.
pub const MODEL_FEATURE_COLUMNS: [&str; 31] = [
    "AGE",
    "GENDER",
    "TYPE OF ADMISSION-EMERGENCY/OPD",
    "DURATION OF STAY",
    "OUTCOME",
    "DM",
    "HTN",
    "CAD",
    "PRIOR CMP",
    "CKD",
    "HB",
    "TLC",
    "PLATELETS",
    "GLUCOSE",
    "UREA",
    "CREATININE",
    "RAISED CARDIAC ENZYMES",
    "EF",
    "SEVERE ANAEMIA",
    "ANAEMIA",
    "ACS",
    "STEMI",
    "HEART FAILURE",
    "AKI",
    "DAY_OF_WEEK",
    "IS_WEEKEND",
    "MONTH",
    "LAB_RISK_SCORE",
    "SEASON_Spring",
    "SEASON_Summer",
    "SEASON_Winter",
];

/// Check every recognized column against a membership predicate, in order.
///
/// The first absent column is reported and nothing further is checked. Value
/// types are not inspected, only presence.
pub fn ensure_feature_columns(
    mut has_column: impl FnMut(&str) -> bool,
) -> Result<(), DomainError> {
    for column in MODEL_FEATURE_COLUMNS {
        if !has_column(column) {
            return Err(DomainError::missing_column(column));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_is_fixed() {
        assert_eq!(MODEL_FEATURE_COLUMNS[0], "AGE");
        assert_eq!(MODEL_FEATURE_COLUMNS[2], "TYPE OF ADMISSION-EMERGENCY/OPD");
        assert_eq!(MODEL_FEATURE_COLUMNS[30], "SEASON_Winter");
    }

    #[test]
    fn test_all_columns_present() {
        assert!(ensure_feature_columns(|_| true).is_ok());
    }

    #[test]
    fn test_first_missing_column_wins() {
        // Both GENDER and OUTCOME are absent; GENDER comes first in order.
        let result = ensure_feature_columns(|c| c != "GENDER" && c != "OUTCOME");

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Missing column: GENDER");
    }

    #[test]
    fn test_last_column_missing() {
        let result = ensure_feature_columns(|c| c != "SEASON_Winter");
        assert_eq!(
            result.unwrap_err().to_string(),
            "Missing column: SEASON_Winter"
        );
    }
}
