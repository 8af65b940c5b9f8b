#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the crime zones server.
//!
//! These types are serialized to JSON for the REST API. Field names are
//! part of the wire contract consumed by the map frontend, so they stay
//! `snake_case` rather than following the usual `camelCase` rename.

use serde::{Deserialize, Serialize};

/// Raw query parameters for the crime-info endpoint.
///
/// Both parameters are decoded as strings so that a missing value and an
/// unparsable value produce the same client error, rather than an
/// Actix-generated deserialization failure with a different body.
#[derive(Debug, Clone, Deserialize)]
pub struct CrimeInfoParams {
    /// Query latitude in decimal degrees.
    pub lat: Option<String>,
    /// Query longitude in decimal degrees.
    pub lon: Option<String>,
}

impl CrimeInfoParams {
    /// Parses both parameters, returning `None` when either is absent or
    /// non-numeric.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat: f64 = self.lat.as_deref()?.trim().parse().ok()?;
        let lon: f64 = self.lon.as_deref()?.trim().parse().ok()?;
        Some((lat, lon))
    }
}

/// Response body for a successful crime-info lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeInfo {
    /// Matched locality name.
    pub locality: String,
    /// District the locality belongs to.
    pub district: String,
    /// Normalized incident count per 100,000 population.
    pub crime_rate_per_100k: f64,
    /// Raw incident count.
    pub total_crimes: i64,
    /// Categorical safety label.
    pub safety_level: String,
    /// Distance from the query point in kilometers, rounded to 3 decimals.
    pub distance_km: f64,
    /// Ten-glyph gauge of the rate relative to the dataset maximum.
    pub bar: String,
    /// Display color for the gauge: "green", "orange", or "red".
    pub bar_color: String,
    /// The table-wide maximum rate the gauge was scaled against.
    pub max_crime_rate: f64,
}
