//! Final column selection, rounding, and CSV serialization.

use crate::error::DatasetError;
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// The output header, in order.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "dd-mm-yyyy",
    "2m_temperature",
    "2m_dewpoint_temperature",
    "surface_pressure",
    "10m_wind_speed",
    "total_precipitation",
    "convective_available_potential_energy",
    "month",
    "day_of_year",
    "Label",
];

/// Projects the labelled daily frame onto the output columns, renaming
/// the weather variables and rounding them to two decimals.
pub fn select_output(daily: DataFrame) -> Result<DataFrame, DatasetError> {
    let out = daily
        .lazy()
        .select([
            col("dd-mm-yyyy"),
            col("temperature_2m").round(2).alias("2m_temperature"),
            col("dewpoint_2m").round(2).alias("2m_dewpoint_temperature"),
            col("surface_pressure").round(2),
            col("windspeed_10m").round(2).alias("10m_wind_speed"),
            col("precipitation").round(2).alias("total_precipitation"),
            col("cape")
                .round(2)
                .alias("convective_available_potential_energy"),
            col("month"),
            col("day_of_year"),
            col("Label"),
        ])
        .collect()?;
    Ok(out)
}

/// Writes the frame as a comma-separated, header-led UTF-8 file.
///
/// The destination is overwritten if it already exists; the parent
/// directory is created on demand.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatasetError::OutputIo(parent.to_path_buf(), e))?;
        }
    }
    let file =
        File::create(path).map_err(|e| DatasetError::OutputIo(path.to_path_buf(), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled_daily() -> DataFrame {
        // Columns deliberately out of output order; the projection fixes it.
        df!(
            "month" => [4i64],
            "cape" => [1234.5678],
            "temperature_2m" => [21.666666666],
            "dewpoint_2m" => [24.125],
            "surface_pressure" => [1004.555],
            "windspeed_10m" => [28.0],
            "precipitation" => [6.5],
            "dd-mm-yyyy" => ["02-04-2023"],
            "day_of_year" => [92i64],
            "Label" => [1i64],
        )
        .unwrap()
    }

    #[test]
    fn header_is_exactly_the_renamed_columns_in_order() {
        let out = select_output(labelled_daily()).unwrap();
        let names: Vec<&str> = out.get_column_names().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, OUTPUT_COLUMNS.to_vec());
    }

    #[test]
    fn weather_columns_round_to_two_decimals() {
        let out = select_output(labelled_daily()).unwrap();
        let temp = out
            .column("2m_temperature")
            .unwrap()
            .f64()
            .unwrap()
            .get(0)
            .unwrap();
        assert!((temp - 21.67).abs() < 1e-9);
        let cape = out
            .column("convective_available_potential_energy")
            .unwrap()
            .f64()
            .unwrap()
            .get(0)
            .unwrap();
        assert!((cape - 1234.57).abs() < 1e-9);
    }

    #[test]
    fn csv_has_header_and_one_row_per_date() {
        let mut out = select_output(labelled_daily()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&mut out, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), OUTPUT_COLUMNS.join(","));
        let row = lines.next().unwrap();
        assert!(row.starts_with("02-04-2023,21.67,"));
        assert_eq!(lines.next(), None);
    }
}
