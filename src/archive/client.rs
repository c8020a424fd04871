//! HTTP client for the Open-Meteo historical weather archive.

use crate::archive::error::ArchiveError;
use crate::archive::models::ArchiveResponse;
use log::info;
use reqwest::Client;
use serde_json::Value;

/// Archive endpoint serving historical hourly observations.
pub const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// The seven hourly variables the pipeline consumes, comma-joined as the
/// endpoint expects them.
pub const HOURLY_VARIABLES: &str =
    "temperature_2m,dewpoint_2m,surface_pressure,windspeed_10m,precipitation,cape,weathercode";

pub struct ArchiveClient {
    client: Client,
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetches the full hourly series for one coordinate and date range.
    ///
    /// One request, no retry: a transport failure, an undecodable body, or
    /// an error reported by the remote service all abort the run. The body
    /// is decoded to a generic JSON value first so a remote-reported error
    /// can be surfaced verbatim before the typed decode.
    pub async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
        timezone: &str,
    ) -> Result<ArchiveResponse, ArchiveError> {
        info!(
            "Requesting hourly archive for ({latitude}, {longitude}) from {start_date} to {end_date}"
        );
        let response = self
            .client
            .get(ARCHIVE_URL)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start_date", start_date.to_string()),
                ("end_date", end_date.to_string()),
                ("hourly", HOURLY_VARIABLES.to_string()),
                ("timezone", timezone.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ArchiveError::NetworkRequest(ARCHIVE_URL.to_string(), e))?;

        let body = response
            .text()
            .await
            .map_err(|e| ArchiveError::BodyRead(ARCHIVE_URL.to_string(), e))?;

        let value: Value = serde_json::from_str(&body).map_err(ArchiveError::JsonDecode)?;
        if let Some(indicator) = value.get("error") {
            if indicator.as_bool().unwrap_or(true) {
                let message = value
                    .get("reason")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                return Err(ArchiveError::Api(message));
            }
        }

        let parsed: ArchiveResponse =
            serde_json::from_value(value).map_err(ArchiveError::ResponseShape)?;
        parsed.hourly.validate_lengths()?;
        info!(
            "Received {} hourly records from the archive",
            parsed.hourly.time.len()
        );
        Ok(parsed)
    }
}
