//! Bed availability from the admitted-patient snapshot.

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::domain::occupancy::{available_beds, count_still_admitted, estimated_discharge};
use crate::domain::predictor::{round_stay, Predictor};
use crate::domain::DomainError;
use crate::infrastructure::snapshot::CsvSnapshotReader;

/// Derives today's free-bed count from the snapshot of admitted patients.
#[derive(Debug, Clone)]
pub struct OccupancyService {
    predictor: Arc<dyn Predictor>,
    snapshot: CsvSnapshotReader,
}

impl OccupancyService {
    pub fn new(predictor: Arc<dyn Predictor>, snapshot: CsvSnapshotReader) -> Self {
        Self { predictor, snapshot }
    }

    pub fn snapshot_path(&self) -> &Path {
        self.snapshot.path()
    }

    /// Count the beds free today.
    pub async fn beds_available(&self) -> Result<i64, DomainError> {
        self.beds_available_on(Local::now().date_naive()).await
    }

    /// Same computation against an explicit "today".
    ///
    /// Each admitted patient's remaining stay is predicted and added to the
    /// admission date; rows whose estimated discharge falls strictly after
    /// `today` still hold a bed. Rows without a usable admission date are
    /// treated as admitted today.
    pub async fn beds_available_on(&self, today: NaiveDate) -> Result<i64, DomainError> {
        let snapshot = self.snapshot.read().await?;
        snapshot.table.validate_columns()?;

        let outputs = self.predictor.predict(&snapshot.table)?;

        let discharges: Vec<NaiveDate> = outputs
            .into_iter()
            .zip(&snapshot.admission_dates)
            .map(|(output, admitted_on)| {
                estimated_discharge(admitted_on.unwrap_or(today), round_stay(output))
            })
            .collect();

        let still_admitted = count_still_admitted(&discharges, today);
        debug!(
            patients = discharges.len(),
            still_admitted, "Computed bed occupancy"
        );

        Ok(available_beds(still_admitted))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::features::MODEL_FEATURE_COLUMNS;
    use crate::domain::predictor::mock::MockPredictor;
    use crate::infrastructure::snapshot::ADMISSION_DATE_COLUMN;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_snapshot(rows: &[&str], date_column: bool) -> tempfile::NamedTempFile {
        let mut header: Vec<String> =
            MODEL_FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect();
        if date_column {
            header.push(ADMISSION_DATE_COLUMN.to_string());
        }

        let mut contents = header.join(",") + "\n";
        for date in rows {
            let mut cells = vec!["0".to_string(); MODEL_FEATURE_COLUMNS.len()];
            if date_column {
                cells.push(date.to_string());
            }
            contents += &(cells.join(",") + "\n");
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn service(predictor: MockPredictor, path: &Path) -> OccupancyService {
        OccupancyService::new(Arc::new(predictor), CsvSnapshotReader::new(path))
    }

    #[tokio::test]
    async fn test_missing_snapshot_names_the_file() {
        let service = service(MockPredictor::constant(1.0), Path::new("current_patients.csv"));

        let err = service.beds_available().await.unwrap_err();
        assert_eq!(err.to_string(), "current_patients.csv not found!");
    }

    #[tokio::test]
    async fn test_all_discharged_yesterday_frees_every_bed() {
        // Five patients admitted three days ago with two-day stays.
        let file = write_snapshot(&["2026-08-01"; 5], true);
        let service = service(MockPredictor::constant(2.0), file.path());

        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 100);
    }

    #[tokio::test]
    async fn test_all_discharging_tomorrow_occupies_five_beds() {
        let file = write_snapshot(&["2026-08-01"; 5], true);
        let service = service(MockPredictor::constant(4.0), file.path());

        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 95);
    }

    #[tokio::test]
    async fn test_discharge_today_is_not_admitted() {
        let file = write_snapshot(&["2026-08-01", "2026-08-01"], true);
        // First patient discharges today (stay 3), second tomorrow (stay 4).
        let service = service(
            MockPredictor::new().with_outputs(vec![3.0, 4.0]),
            file.path(),
        );

        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 99);
    }

    #[tokio::test]
    async fn test_rows_without_dates_are_admitted_today() {
        let file = write_snapshot(&["", "garbage"], true);
        let service = service(MockPredictor::constant(1.0), file.path());

        // Admitted today with a one-day stay: discharge tomorrow, still in.
        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 98);
    }

    #[tokio::test]
    async fn test_snapshot_without_date_column() {
        let file = write_snapshot(&[""; 3], false);
        let service = service(MockPredictor::constant(0.0), file.path());

        // Zero-day stays discharge today; nobody holds a bed.
        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 100);
    }

    #[tokio::test]
    async fn test_count_never_exceeds_capacity() {
        let dates = vec!["2026-08-01"; 130];
        let date_refs: Vec<&str> = dates.iter().copied().collect();
        let file = write_snapshot(&date_refs, true);
        let service = service(MockPredictor::constant(30.0), file.path());

        let available = service.beds_available_on(day(2026, 8, 4)).await.unwrap();
        assert_eq!(available, 0);
    }

    #[tokio::test]
    async fn test_missing_feature_column_reported() {
        // Header drops GLUCOSE entirely.
        let header: Vec<&str> = MODEL_FEATURE_COLUMNS
            .iter()
            .copied()
            .filter(|c| *c != "GLUCOSE")
            .collect();
        let mut contents = header.join(",") + "\n";
        contents += &(vec!["0"; header.len()].join(",") + "\n");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        let service = service(MockPredictor::constant(1.0), file.path());
        let err = service.beds_available().await.unwrap_err();
        assert_eq!(err.to_string(), "Missing column: GLUCOSE");
    }
}
