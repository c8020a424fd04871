//! Serde models for the Open-Meteo archive response.
//!
//! The `hourly` section is a set of parallel arrays, one per requested
//! variable, aligned by index to the `time` array.

use crate::archive::error::ArchiveError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub hourly: HourlySeries,
}

/// One value per hour for every requested variable.
///
/// CAPE is kept as raw JSON values because the feed occasionally delivers
/// it with holes or not at all; coercion to numeric happens in
/// [`HourlySeries::cape_numeric`] rather than failing the decode.
#[derive(Debug, Default, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub dewpoint_2m: Vec<Option<f64>>,
    pub surface_pressure: Vec<Option<f64>>,
    pub windspeed_10m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    #[serde(default)]
    pub cape: Vec<Value>,
    pub weathercode: Vec<Option<i64>>,
}

impl HourlySeries {
    /// Checks that every variable series lines up with the timestamp series.
    ///
    /// CAPE is exempt when absent entirely; the normalizer substitutes a
    /// column of the right length in that case.
    pub fn validate_lengths(&self) -> Result<(), ArchiveError> {
        let expected = self.time.len();
        let series: [(&'static str, usize); 6] = [
            ("temperature_2m", self.temperature_2m.len()),
            ("dewpoint_2m", self.dewpoint_2m.len()),
            ("surface_pressure", self.surface_pressure.len()),
            ("windspeed_10m", self.windspeed_10m.len()),
            ("precipitation", self.precipitation.len()),
            ("weathercode", self.weathercode.len()),
        ];
        for (variable, found) in series {
            if found != expected {
                return Err(ArchiveError::SeriesLengthMismatch {
                    variable,
                    expected,
                    found,
                });
            }
        }
        if !self.cape.is_empty() && self.cape.len() != expected {
            return Err(ArchiveError::SeriesLengthMismatch {
                variable: "cape",
                expected,
                found: self.cape.len(),
            });
        }
        Ok(())
    }

    /// Coerces the raw CAPE values to numeric.
    ///
    /// Numbers pass through, numeric strings are parsed, everything else
    /// (null included) becomes a missing entry for the fill passes to
    /// resolve. An absent field yields an empty vector.
    pub fn cape_numeric(&self) -> Vec<Option<f64>> {
        self.cape
            .iter()
            .map(|v| {
                v.as_f64()
                    .or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
            })
            .collect()
    }
}
