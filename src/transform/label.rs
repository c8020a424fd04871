//! Binary thunderstorm label per daily record.

use crate::error::DatasetError;
use polars::prelude::*;

/// WMO weather codes that denote a thunderstorm outright.
pub const STORM_CODES: [i64; 3] = [95, 96, 99];

/// Heuristic fallback thresholds for days the coding scheme missed
/// (regional Nor'wester squalls in particular). All comparisons are
/// strictly greater-than.
pub const CAPE_THRESHOLD: f64 = 1000.0;
pub const WIND_THRESHOLD: f64 = 25.0;
pub const PRECIP_THRESHOLD: f64 = 5.0;

/// The label rule for one day. An explicit storm code wins regardless of
/// the heuristic; otherwise all three thresholds must be exceeded.
pub fn storm_label(codes: &[i64], cape: f64, wind: f64, precip: f64) -> i64 {
    if codes.iter().any(|c| STORM_CODES.contains(c)) {
        return 1;
    }
    if cape > CAPE_THRESHOLD && wind > WIND_THRESHOLD && precip > PRECIP_THRESHOLD {
        1
    } else {
        0
    }
}

/// Applies [`storm_label`] across the aggregated daily frame.
pub fn storm_labels(daily: &DataFrame) -> Result<Vec<i64>, DatasetError> {
    let codes = daily.column("weathercode")?.as_materialized_series().list()?;
    let cape = daily.column("cape")?.f64()?;
    let wind = daily.column("windspeed_10m")?.f64()?;
    let precip = daily.column("precipitation")?.f64()?;

    let mut labels = Vec::with_capacity(daily.height());
    for i in 0..daily.height() {
        let day_codes: Vec<i64> = match codes.get_as_series(i) {
            Some(s) => s.i64()?.into_iter().flatten().collect(),
            None => Vec::new(),
        };
        labels.push(storm_label(
            &day_codes,
            cape.get(i).unwrap_or(0.0),
            wind.get(i).unwrap_or(0.0),
            precip.get(i).unwrap_or(0.0),
        ));
    }
    Ok(labels)
}
