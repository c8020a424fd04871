use stormset::{build_dataset, DatasetError, END_DATE, START_DATE};

#[tokio::main]
async fn main() -> Result<(), DatasetError> {
    // Set RUST_LOG=info (or debug) to see diagnostics.
    env_logger::init();

    println!("Fetching data for Kolkata ({START_DATE} to {END_DATE})...");
    let summary = build_dataset().await?;

    println!("Dataset created at {}", summary.path.display());
    println!("Total daily records: {}", summary.rows);
    println!("Thunderstorm events (Label=1): {}", summary.storm_days);
    println!("Source: Open-Meteo Historical Weather API");
    Ok(())
}
