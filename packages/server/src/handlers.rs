//! HTTP handler functions for the crime zones API.
//!
//! Each handler opens its own connection to the store and releases it when
//! the request completes. Failures surface as the JSON error taxonomy the
//! frontend expects: 400 for missing coordinates, 404 for no locality in
//! range, 500 with the underlying message for everything else.

use std::path::Path;

use actix_web::{HttpResponse, web};
use crime_zones_database::{DbError, queries};
use crime_zones_models::LocalityRecord;
use crime_zones_server_models::{CrimeInfo, CrimeInfoParams};
use crime_zones_spatial::find_nearest;

use crate::{AppState, rating};

/// `GET /zones`
///
/// Lists every locality record in the store.
pub async fn zones(state: web::Data<AppState>) -> HttpResponse {
    match load_zones(&state.config.db_path) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            log::error!("Failed to list zones: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

/// `GET /crime-info?lat=<float>&lon=<float>`
///
/// Looks up the locality nearest to the query point and returns its crime
/// statistics with the rating gauge.
pub async fn crime_info(
    state: web::Data<AppState>,
    params: web::Query<CrimeInfoParams>,
) -> HttpResponse {
    let Some((lat, lon)) = params.coordinates() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "lat and lon required"
        }));
    };

    match lookup(&state.config.db_path, lat, lon) {
        Ok(Some(info)) => HttpResponse::Ok().json(info),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No data available"
        })),
        Err(e) => {
            log::error!("Crime info lookup failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

fn load_zones(db_path: &Path) -> Result<Vec<LocalityRecord>, DbError> {
    let conn = crime_zones_database::open(db_path)?;
    queries::all_localities(&conn)
}

/// Scans for the nearest locality and assembles the response body.
/// `Ok(None)` means no locality within range, distinct from a store
/// failure.
fn lookup(db_path: &Path, lat: f64, lon: f64) -> Result<Option<CrimeInfo>, DbError> {
    let conn = crime_zones_database::open(db_path)?;
    let records = queries::all_localities(&conn)?;

    let Some(nearest) = find_nearest(&records, lat, lon) else {
        return Ok(None);
    };

    let max_rating = queries::max_crime_rate(&conn)?
        .filter(|max| *max > 0.0)
        .unwrap_or(rating::DEFAULT_MAX_RATING);

    let record = nearest.record;
    let rate = record.crime_rate_per_100k;

    Ok(Some(CrimeInfo {
        locality: record.locality.clone(),
        district: record.district.clone(),
        crime_rate_per_100k: rate,
        total_crimes: record.total_crimes,
        safety_level: record.safety_level.clone(),
        distance_km: round_km(nearest.distance_km),
        bar: rating::bar(rate, max_rating),
        bar_color: rating::bar_color(rate).to_string(),
        max_crime_rate: max_rating,
    }))
}

/// Rounds a distance to 3 decimal places for display.
fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_distance_to_three_decimals() {
        assert!((round_km(0.123_456_7) - 0.123).abs() < 1e-12);
        assert!((round_km(0.999_5) - 1.0).abs() < 1e-12);
        assert!((round_km(0.0) - 0.0).abs() < 1e-12);
    }
}
