use crate::archive::error::ArchiveError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("Failed to parse hourly timestamp '{value}'")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to parse aggregated date key '{value}'")]
    DateKeyParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Unexpected data state: {0}")]
    UnexpectedData(String),

    #[error("Failed to write output '{0}'")]
    OutputIo(PathBuf, #[source] std::io::Error),
}
