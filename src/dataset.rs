//! The one linear pipeline: fetch, normalize, aggregate, label, write.
//!
//! Every run parameter is a literal constant; there is no configuration
//! surface. Kolkata sits at 22°33' N, 88°30' E.

use crate::archive::client::ArchiveClient;
use crate::error::DatasetError;
use crate::output::{select_output, write_csv};
use crate::transform::daily::aggregate_daily;
use crate::transform::hourly::hourly_frame;
use crate::transform::label::storm_labels;
use polars::prelude::Column;
use std::path::{Path, PathBuf};

pub const LATITUDE: f64 = 22.55;
pub const LONGITUDE: f64 = 88.50;
pub const START_DATE: &str = "2000-01-01";
pub const END_DATE: &str = "2026-01-01";
pub const TIMEZONE: &str = "Asia/Kolkata";
pub const OUTPUT_PATH: &str = "data/kolkata_thunderstorm_data.csv";

/// What the run produced, for the console report.
pub struct DatasetSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub storm_days: usize,
}

/// Runs the full pipeline once. Any failure is terminal; nothing is
/// written unless every stage before the write succeeded.
pub async fn build_dataset() -> Result<DatasetSummary, DatasetError> {
    let client = ArchiveClient::new();
    let response = client
        .fetch_hourly(LATITUDE, LONGITUDE, START_DATE, END_DATE, TIMEZONE)
        .await?;

    let hourly = hourly_frame(&response.hourly)?;
    let mut daily = aggregate_daily(hourly)?;
    let labels = storm_labels(&daily)?;
    let storm_days = labels.iter().filter(|&&l| l == 1).count();
    daily.with_column(Column::new("Label".into(), labels))?;

    let mut out = select_output(daily)?;
    let path = Path::new(OUTPUT_PATH);
    write_csv(&mut out, path)?;

    Ok(DatasetSummary {
        path: path.to_path_buf(),
        rows: out.height(),
        storm_days,
    })
}
