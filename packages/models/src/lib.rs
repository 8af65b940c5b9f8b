#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core locality record types shared by the store, the importer, and the
//! API server.

use serde::{Deserialize, Serialize};

/// A locality crime record as read back from the `crime_data` table.
///
/// `SQLite` columns are dynamically typed, so a coordinate cell that cannot
/// be read as a number surfaces as `None` rather than failing the whole
/// query. Such records are still listed by the API but are never candidates
/// for the nearest-locality scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalityRecord {
    /// Locality display name.
    pub locality: String,
    /// District display name.
    pub district: String,
    /// Latitude in decimal degrees, when numeric.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, when numeric.
    pub longitude: Option<f64>,
    /// Normalized incident count per 100,000 population.
    pub crime_rate_per_100k: f64,
    /// Raw incident count.
    pub total_crimes: i64,
    /// Categorical safety label (e.g. "Safe", "Moderate").
    pub safety_level: String,
}

impl LocalityRecord {
    /// Returns `(latitude, longitude)` when both coordinates are numeric,
    /// i.e. when this record is a usable scan candidate.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// A decoded import row, ready for insertion.
///
/// Unlike [`LocalityRecord`], the numeric fields are already coerced; the
/// importer fails the whole run on any row that does not decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocality {
    /// Locality display name.
    pub locality: String,
    /// District display name.
    pub district: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Normalized incident count per 100,000 population.
    pub crime_rate_per_100k: f64,
    /// Raw incident count.
    pub total_crimes: i64,
    /// Categorical safety label.
    pub safety_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_present_when_both_numeric() {
        let record = LocalityRecord {
            locality: "Civil Lines".to_string(),
            district: "Raipur".to_string(),
            latitude: Some(21.2514),
            longitude: Some(81.6296),
            crime_rate_per_100k: 150.0,
            total_crimes: 120,
            safety_level: "Safe".to_string(),
        };
        let (lat, lon) = record.coordinates().unwrap();
        assert!((lat - 21.2514).abs() < f64::EPSILON);
        assert!((lon - 81.6296).abs() < f64::EPSILON);
    }

    #[test]
    fn coordinates_absent_when_either_missing() {
        let record = LocalityRecord {
            locality: "Unknown".to_string(),
            district: "Raipur".to_string(),
            latitude: None,
            longitude: Some(81.6296),
            crime_rate_per_100k: 0.0,
            total_crimes: 0,
            safety_level: String::new(),
        };
        assert!(record.coordinates().is_none());
    }
}
