//! Collapses the hourly frame to one row per calendar date.

use crate::error::DatasetError;
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const DAY_STRING_FORMAT: &str = "%d-%m-%Y";

/// How one hourly variable collapses into its daily value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Mean,
    Max,
    Sum,
    /// Keep the full ordered list of hourly values for the day.
    CollectList,
}

/// The fixed per-variable reduction table.
pub const DAILY_REDUCERS: [(&str, Reducer); 7] = [
    ("temperature_2m", Reducer::Mean),
    ("dewpoint_2m", Reducer::Mean),
    ("surface_pressure", Reducer::Mean),
    ("windspeed_10m", Reducer::Max),
    ("precipitation", Reducer::Sum),
    ("cape", Reducer::Max),
    ("weathercode", Reducer::CollectList),
];

fn reducer_expr(name: &str, reducer: Reducer) -> Expr {
    match reducer {
        Reducer::Mean => col(name).mean(),
        Reducer::Max => col(name).max(),
        Reducer::Sum => col(name).sum(),
        // A bare column in a group-by aggregation implodes into a list.
        Reducer::CollectList => col(name),
    }
}

/// Groups the hourly frame by its `date` key and applies the reduction
/// table, then appends the derived date columns (`dd-mm-yyyy`, `month`,
/// `day_of_year`). Rows come out in ascending date order.
pub fn aggregate_daily(hourly: DataFrame) -> Result<DataFrame, DatasetError> {
    let aggs: Vec<Expr> = DAILY_REDUCERS
        .iter()
        .map(|&(name, reducer)| reducer_expr(name, reducer))
        .collect();
    let daily = hourly
        .lazy()
        .group_by_stable([col("date")])
        .agg(aggs)
        .sort(["date"], Default::default())
        .collect()?;
    with_derived_dates(daily)
}

fn with_derived_dates(mut daily: DataFrame) -> Result<DataFrame, DatasetError> {
    let n = daily.height();
    let mut day_strings = Vec::with_capacity(n);
    let mut months = Vec::with_capacity(n);
    let mut days_of_year = Vec::with_capacity(n);
    {
        let date_col = daily.column("date")?.str()?;
        for raw in date_col.into_iter() {
            let raw = raw.ok_or_else(|| {
                DatasetError::UnexpectedData("null date key after aggregation".to_string())
            })?;
            let date = NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT).map_err(|e| {
                DatasetError::DateKeyParse {
                    value: raw.to_string(),
                    source: e,
                }
            })?;
            day_strings.push(date.format(DAY_STRING_FORMAT).to_string());
            months.push(date.month() as i64);
            days_of_year.push(date.ordinal() as i64);
        }
    }
    daily.with_column(Column::new("dd-mm-yyyy".into(), day_strings))?;
    daily.with_column(Column::new("month".into(), months))?;
    daily.with_column(Column::new("day_of_year".into(), days_of_year))?;
    Ok(daily)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hourly() -> DataFrame {
        df!(
            "date" => ["2023-04-02", "2023-04-02", "2023-04-02", "2023-04-01"],
            "temperature_2m" => [30.0, 32.0, 34.0, 28.0],
            "dewpoint_2m" => [24.0, 25.0, 26.0, 22.0],
            "surface_pressure" => [1005.0, 1003.0, 1001.0, 1006.0],
            "windspeed_10m" => [10.0, 28.0, 14.0, 8.0],
            "precipitation" => [0.0, 4.0, 2.5, 0.1],
            "cape" => [200.0, 1800.0, 900.0, 50.0],
            "weathercode" => [2i64, 95, 3, 1],
        )
        .unwrap()
    }

    #[test]
    fn one_row_per_distinct_date_in_ascending_order() {
        let daily = aggregate_daily(sample_hourly()).unwrap();
        assert_eq!(daily.height(), 2);
        let dates: Vec<&str> = daily
            .column("date")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(dates, vec!["2023-04-01", "2023-04-02"]);
    }

    #[test]
    fn code_list_cardinality_matches_hourly_rows() {
        let daily = aggregate_daily(sample_hourly()).unwrap();
        let codes = daily
            .column("weathercode")
            .unwrap()
            .as_materialized_series()
            .list()
            .unwrap();
        let lengths: Vec<usize> = (0..daily.height())
            .map(|i| codes.get_as_series(i).map(|s| s.len()).unwrap_or(0))
            .collect();
        // 2023-04-01 had one hourly row, 2023-04-02 had three
        assert_eq!(lengths, vec![1, 3]);
    }

    #[test]
    fn reducers_apply_per_the_table() {
        let daily = aggregate_daily(sample_hourly()).unwrap();
        let row = 1; // 2023-04-02
        let temp = daily.column("temperature_2m").unwrap().f64().unwrap();
        let wind = daily.column("windspeed_10m").unwrap().f64().unwrap();
        let precip = daily.column("precipitation").unwrap().f64().unwrap();
        let cape = daily.column("cape").unwrap().f64().unwrap();
        assert_eq!(temp.get(row), Some(32.0)); // mean of 30/32/34
        assert_eq!(wind.get(row), Some(28.0)); // max
        assert_eq!(precip.get(row), Some(6.5)); // sum
        assert_eq!(cape.get(row), Some(1800.0)); // max
    }

    #[test]
    fn derived_date_columns_are_zero_padded_and_ordinal() {
        let daily = aggregate_daily(sample_hourly()).unwrap();
        let day_strings: Vec<&str> = daily
            .column("dd-mm-yyyy")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(day_strings, vec!["01-04-2023", "02-04-2023"]);

        let months = daily.column("month").unwrap().i64().unwrap();
        let doy = daily.column("day_of_year").unwrap().i64().unwrap();
        assert_eq!(months.get(0), Some(4));
        assert_eq!(doy.get(0), Some(91)); // 2023-04-01 is day 91 of a non-leap year
    }

    #[test]
    fn aggregation_is_idempotent_on_frozen_input() {
        let first = aggregate_daily(sample_hourly()).unwrap();
        let second = aggregate_daily(sample_hourly()).unwrap();
        assert!(first.equals(&second));
    }
}
