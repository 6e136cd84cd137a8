//! Bed availability arithmetic.

use chrono::{Duration, NaiveDate};

/// Total beds in the facility.
pub const TOTAL_BEDS: i64 = 100;

/// Estimated discharge date: admission date plus the predicted stay in days.
///
/// Saturates at the calendar bounds instead of overflowing on absurd stays.
pub fn estimated_discharge(admitted_on: NaiveDate, stay_days: i64) -> NaiveDate {
    Duration::try_days(stay_days)
        .and_then(|delta| admitted_on.checked_add_signed(delta))
        .unwrap_or(if stay_days >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
}

/// Patients whose estimated discharge is strictly after `today` still occupy
/// a bed; a discharge dated today frees the bed.
pub fn count_still_admitted(discharges: &[NaiveDate], today: NaiveDate) -> usize {
    discharges.iter().filter(|discharge| **discharge > today).count()
}

/// Beds left over after the still-admitted count, never negative.
pub fn available_beds(still_admitted: usize) -> i64 {
    (TOTAL_BEDS - still_admitted as i64).max(0)
}
