//! Turns the archive's parallel hourly arrays into a row-per-hour frame.
//!
//! CAPE is the one feed that arrives with holes. Missing entries are
//! repaired in three explicit passes: nearest-value for interior gaps,
//! then forward fill, then backward fill. Nearest fill runs first; edge
//! gaps it cannot resolve fall to the directional passes.

use crate::archive::models::HourlySeries;
use crate::error::DatasetError;
use chrono::NaiveDateTime;
use log::warn;
use polars::prelude::*;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Fills interior gaps from the positionally nearest known value.
///
/// Only positions between the first and last known value are touched;
/// on a tie the earlier value wins. Neighbors are taken from the values
/// known before the pass started.
pub fn fill_nearest(values: &mut [Option<f64>]) {
    let known: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|x| (i, x)))
        .collect();
    let (Some(&(first, _)), Some(&(last, _))) = (known.first(), known.last()) else {
        return;
    };
    for i in first..=last {
        if values[i].is_some() {
            continue;
        }
        let prev = known.iter().rev().find(|(k, _)| *k < i);
        let next = known.iter().find(|(k, _)| *k > i);
        if let (Some(&(pi, pv)), Some(&(ni, nv))) = (prev, next) {
            values[i] = Some(if i - pi <= ni - i { pv } else { nv });
        }
    }
}

/// Propagates the last known value into trailing gaps.
pub fn fill_forward(values: &mut [Option<f64>]) {
    let mut last = None;
    for v in values.iter_mut() {
        match *v {
            Some(x) => last = Some(x),
            None => *v = last,
        }
    }
}

/// Propagates the next known value into leading gaps.
pub fn fill_backward(values: &mut [Option<f64>]) {
    let mut next = None;
    for v in values.iter_mut().rev() {
        match *v {
            Some(x) => next = Some(x),
            None => *v = next,
        }
    }
}

/// Builds the hourly DataFrame from the decoded archive series.
///
/// Adds a `date` column as the grouping key and delivers CAPE fully
/// repaired; if the feed carried no CAPE at all the column becomes
/// constant zero and a warning is logged.
pub fn hourly_frame(series: &HourlySeries) -> Result<DataFrame, DatasetError> {
    let n = series.time.len();
    let mut dates = Vec::with_capacity(n);
    for raw in &series.time {
        let ts = NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map_err(|e| {
            DatasetError::TimestampParse {
                value: raw.clone(),
                source: e,
            }
        })?;
        dates.push(ts.date().format("%Y-%m-%d").to_string());
    }

    let mut cape = series.cape_numeric();
    if cape.is_empty() {
        cape = vec![None; n];
    }
    fill_nearest(&mut cape);
    fill_forward(&mut cape);
    fill_backward(&mut cape);
    let cape: Vec<f64> = if cape.iter().all(Option::is_none) {
        warn!("CAPE data is entirely missing from the archive response; substituting zeros");
        vec![0.0; n]
    } else {
        // After the three passes only an all-missing column can still hold gaps.
        cape.into_iter().map(|v| v.unwrap_or(0.0)).collect()
    };

    let df = df!(
        "date" => dates,
        "temperature_2m" => &series.temperature_2m,
        "dewpoint_2m" => &series.dewpoint_2m,
        "surface_pressure" => &series.surface_pressure,
        "windspeed_10m" => &series.windspeed_10m,
        "precipitation" => &series.precipitation,
        "cape" => cape,
        "weathercode" => &series.weathercode,
    )?;
    Ok(df)
}
