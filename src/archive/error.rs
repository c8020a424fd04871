use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body for {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to decode archive response as JSON")]
    JsonDecode(#[source] serde_json::Error),

    // The remote reason is reported verbatim.
    #[error("Archive API reported an error: {0}")]
    Api(String),

    #[error("Archive response is missing the expected hourly structure")]
    ResponseShape(#[source] serde_json::Error),

    #[error("Hourly series '{variable}' has {found} values but {expected} timestamps")]
    SeriesLengthMismatch {
        variable: &'static str,
        expected: usize,
        found: usize,
    },
}
