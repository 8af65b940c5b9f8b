#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the crime zones importer.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "crime_zones_import", about = "CSV importer for the crime zones store")]
struct Cli {
    /// Path to the locality crime CSV
    #[arg(long, default_value = "raipur_localities_crime.csv")]
    csv: PathBuf,

    /// Path to the SQLite store to rewrite
    #[arg(long, default_value = "crime_data.db")]
    db: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    crime_zones_import::run(&cli.csv, &cli.db)?;

    Ok(())
}
