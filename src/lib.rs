mod archive;
mod dataset;
mod error;
mod output;
mod transform;

pub use error::DatasetError;

pub use archive::client::{ArchiveClient, ARCHIVE_URL, HOURLY_VARIABLES};
pub use archive::error::ArchiveError;
pub use archive::models::{ArchiveResponse, HourlySeries};

pub use dataset::*;

pub use output::{select_output, write_csv, OUTPUT_COLUMNS};

pub use transform::daily::{aggregate_daily, Reducer, DAILY_REDUCERS};
pub use transform::hourly::{fill_backward, fill_forward, fill_nearest, hourly_frame};
pub use transform::label::{
    storm_label, storm_labels, CAPE_THRESHOLD, PRECIP_THRESHOLD, STORM_CODES, WIND_THRESHOLD,
};
