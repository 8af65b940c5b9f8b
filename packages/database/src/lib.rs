#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! `SQLite` store for locality crime records.
//!
//! A single `crime_data` table holds one row per locality. The importer
//! rewrites the table wholesale; the server only ever reads. Every consumer
//! opens its own connection via [`open`], which also ensures the schema
//! exists.

pub mod queries;

use std::path::Path;

use rusqlite::Connection;

/// Errors that can occur during database operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Underlying `SQLite` error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Opens (or creates) the crime data database and ensures the schema
/// exists.
///
/// # Errors
///
/// Returns [`DbError`] if the connection or schema creation fails.
pub fn open(path: &Path) -> Result<Connection, DbError> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Opens an in-memory database with the schema applied. Used by tests and
/// tooling that never needs persistence.
///
/// # Errors
///
/// Returns [`DbError`] if the connection or schema creation fails.
pub fn open_in_memory() -> Result<Connection, DbError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

fn create_schema(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS crime_data (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            locality TEXT,
            district TEXT,
            latitude REAL,
            longitude REAL,
            crime_rate_per_100k REAL,
            total_crimes INTEGER,
            safety_level TEXT
        );",
    )?;

    Ok(())
}
