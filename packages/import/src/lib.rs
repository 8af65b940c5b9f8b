#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV importer for the locality crime store.
//!
//! Reads a delimited file of locality crime statistics and rewrites the
//! `crime_data` table wholesale. All-or-nothing: a missing input file or a
//! row that fails numeric coercion aborts the run, and the store write
//! happens in one transaction so the previous contents survive a failed
//! import.

use std::path::Path;

use crime_zones_database::{DbError, queries};
use crime_zones_models::NewLocality;

/// Errors that can occur during an import run.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The input CSV does not exist.
    #[error("{path} not found. Put your CSV in the project folder.")]
    MissingCsv {
        /// Path that was looked for.
        path: String,
    },

    /// A row failed to decode (missing column, non-numeric value, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The store write failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Decodes every row of the CSV at `path`.
///
/// Expects the header `locality, district, latitude, longitude,
/// crime_rate_per_100k, total_crimes, safety_level`. There is no
/// row-skipping policy; the first undecodable row fails the whole read.
///
/// # Errors
///
/// Returns [`ImportError`] if the file is missing or any row fails to
/// decode.
pub fn read_csv(path: &Path) -> Result<Vec<NewLocality>, ImportError> {
    if !path.exists() {
        return Err(ImportError::MissingCsv {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<NewLocality>() {
        rows.push(result?);
    }

    Ok(rows)
}

/// Runs a full import: decode the CSV, then replace the store contents.
///
/// Returns the number of localities written.
///
/// # Errors
///
/// Returns [`ImportError`] if the read or the store write fails.
pub fn run(csv_path: &Path, db_path: &Path) -> Result<usize, ImportError> {
    let rows = read_csv(csv_path)?;

    let mut conn = crime_zones_database::open(db_path)?;
    let count = queries::replace_localities(&mut conn, &rows)?;

    log::info!(
        "{} created/updated from {} ({count} localities)",
        db_path.display(),
        csv_path.display()
    );

    Ok(count)
}
