//! Query functions for the `crime_data` table.
//!
//! Reads are tolerant of non-numeric coordinate cells (`SQLite` columns are
//! dynamically typed); those surface as `None` on the record rather than
//! failing the query. Writes go through [`replace_localities`], which
//! rewrites the whole table in one transaction.

use crime_zones_models::{LocalityRecord, NewLocality};
use rusqlite::Connection;
use rusqlite::types::ValueRef;

use crate::DbError;

/// Returns every locality record in the table, in rowid order.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn all_localities(conn: &Connection) -> Result<Vec<LocalityRecord>, DbError> {
    let mut stmt = conn.prepare(
        "SELECT locality, district, latitude, longitude,
                crime_rate_per_100k, total_crimes, safety_level
         FROM crime_data",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LocalityRecord {
            locality: row.get("locality")?,
            district: row.get("district")?,
            latitude: lenient_f64(row.get_ref("latitude")?),
            longitude: lenient_f64(row.get_ref("longitude")?),
            crime_rate_per_100k: row.get("crime_rate_per_100k")?,
            total_crimes: row.get("total_crimes")?,
            safety_level: row.get("safety_level")?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }

    Ok(records)
}

/// Returns the table-wide maximum `crime_rate_per_100k`, or `None` when the
/// table is empty.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn max_crime_rate(conn: &Connection) -> Result<Option<f64>, DbError> {
    let mut stmt = conn.prepare("SELECT MAX(crime_rate_per_100k) FROM crime_data")?;
    let max: Option<f64> = stmt.query_row([], |row| row.get(0))?;
    Ok(max)
}

/// Returns the number of locality records stored.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails.
pub fn record_count(conn: &Connection) -> Result<u64, DbError> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM crime_data")?;
    let count: i64 = stmt.query_row([], |row| row.get(0))?;
    #[allow(clippy::cast_sign_loss)]
    Ok(count as u64)
}

/// Replaces the entire table contents with the given rows.
///
/// Deletes and inserts happen in a single transaction, so a failed import
/// leaves the previous contents intact. Returns the number of rows
/// inserted.
///
/// # Errors
///
/// Returns [`DbError`] if any database operation fails.
pub fn replace_localities(conn: &mut Connection, rows: &[NewLocality]) -> Result<usize, DbError> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM crime_data", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO crime_data (locality, district, latitude, longitude,
                                     crime_rate_per_100k, total_crimes, safety_level)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )?;

        for row in rows {
            stmt.execute(rusqlite::params![
                row.locality,
                row.district,
                row.latitude,
                row.longitude,
                row.crime_rate_per_100k,
                row.total_crimes,
                row.safety_level,
            ])?;
        }
    }

    tx.commit()?;

    log::debug!("Replaced crime_data contents with {} rows", rows.len());

    Ok(rows.len())
}

/// Reads a cell as `f64` where possible: REAL and INTEGER convert directly,
/// TEXT is parsed. NULL, blobs, and unparsable text yield `None`.
#[allow(clippy::cast_precision_loss)]
fn lenient_f64(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Real(v) => Some(v),
        ValueRef::Integer(v) => Some(v as f64),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        ValueRef::Null | ValueRef::Blob(_) => None,
    }
}
