#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Nearest-locality scan.
//!
//! A linear pass over all locality records: candidates are partitioned from
//! records with unusable coordinates up front, then the geodesic distance to
//! each candidate is computed and the minimum kept. Distances use Karney's
//! algorithm on the WGS84 ellipsoid via the `geo` crate.

use crime_zones_models::LocalityRecord;
use geo::{Distance, Geodesic, Point};

/// Maximum distance at which a locality counts as a match.
pub const MAX_DISTANCE_KM: f64 = 1.0;

/// A candidate locality with its resolved coordinates.
struct Candidate<'a> {
    record: &'a LocalityRecord,
    latitude: f64,
    longitude: f64,
}

/// The closest locality to a query point, within [`MAX_DISTANCE_KM`].
#[derive(Debug)]
pub struct NearestMatch<'a> {
    /// The matched record.
    pub record: &'a LocalityRecord,
    /// Geodesic surface distance from the query point, in kilometers.
    pub distance_km: f64,
}

/// Geodesic surface distance between two coordinates, in kilometers.
#[must_use]
pub fn geodesic_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Geodesic.distance(Point::new(lon1, lat1), Point::new(lon2, lat2)) / 1000.0
}

/// Finds the locality closest to `(lat, lon)`, if one lies within
/// [`MAX_DISTANCE_KM`].
///
/// Records whose coordinate cells are not numeric are filtered out before
/// the distance pass; they are never candidates and never errors. Ties keep
/// the earlier record.
#[must_use]
pub fn find_nearest(records: &[LocalityRecord], lat: f64, lon: f64) -> Option<NearestMatch<'_>> {
    let (candidates, skipped) = partition_candidates(records);

    if skipped > 0 {
        log::debug!("Skipped {skipped} record(s) with non-numeric coordinates");
    }

    let mut best: Option<NearestMatch<'_>> = None;

    for candidate in candidates {
        let distance_km = geodesic_km(lat, lon, candidate.latitude, candidate.longitude);
        match best {
            Some(ref current) if distance_km >= current.distance_km => {}
            _ => {
                best = Some(NearestMatch {
                    record: candidate.record,
                    distance_km,
                });
            }
        }
    }

    best.filter(|nearest| nearest.distance_km <= MAX_DISTANCE_KM)
}

/// Splits records into usable candidates and a count of skipped records.
fn partition_candidates(records: &[LocalityRecord]) -> (Vec<Candidate<'_>>, usize) {
    let candidates: Vec<Candidate<'_>> = records
        .iter()
        .filter_map(|record| {
            record.coordinates().map(|(latitude, longitude)| Candidate {
                record,
                latitude,
                longitude,
            })
        })
        .collect();

    let skipped = records.len() - candidates.len();
    (candidates, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(locality: &str, lat: Option<f64>, lon: Option<f64>) -> LocalityRecord {
        LocalityRecord {
            locality: locality.to_string(),
            district: "Raipur".to_string(),
            latitude: lat,
            longitude: lon,
            crime_rate_per_100k: 150.0,
            total_crimes: 120,
            safety_level: "Safe".to_string(),
        }
    }

    #[test]
    fn geodesic_distance_matches_known_pair() {
        // New York to London, roughly 5585 km on the WGS84 ellipsoid.
        let dist = geodesic_km(40.7128, -74.0060, 51.5074, -0.1278);
        assert!((5550.0..5620.0).contains(&dist), "got {dist}");
    }

    #[test]
    fn geodesic_distance_is_zero_for_same_point() {
        let dist = geodesic_km(21.2514, 81.6296, 21.2514, 81.6296);
        assert!(dist.abs() < 1e-9);
    }

    #[test]
    fn exact_coordinate_matches_with_zero_distance() {
        let records = vec![
            record("Civil Lines", Some(21.2514), Some(81.6296)),
            record("Shankar Nagar", Some(21.2444), Some(81.6521)),
        ];
        let nearest = find_nearest(&records, 21.2514, 81.6296).unwrap();
        assert_eq!(nearest.record.locality, "Civil Lines");
        assert!(nearest.distance_km.abs() < 1e-9);
    }

    #[test]
    fn nearby_point_matches_closest_record() {
        let records = vec![
            record("Civil Lines", Some(21.2514), Some(81.6296)),
            record("Shankar Nagar", Some(21.2444), Some(81.6521)),
        ];
        // ~0.55 km north of Civil Lines.
        let nearest = find_nearest(&records, 21.2564, 81.6296).unwrap();
        assert_eq!(nearest.record.locality, "Civil Lines");
        assert!(nearest.distance_km > 0.0 && nearest.distance_km < MAX_DISTANCE_KM);
    }

    #[test]
    fn no_match_outside_radius() {
        let records = vec![record("Civil Lines", Some(21.2514), Some(81.6296))];
        // ~2.2 km away; closest record exists but is beyond the threshold.
        assert!(find_nearest(&records, 21.2714, 81.6296).is_none());
    }

    #[test]
    fn no_match_for_far_away_origin() {
        let records = vec![record("Civil Lines", Some(21.2514), Some(81.6296))];
        assert!(find_nearest(&records, 0.0, 0.0).is_none());
    }

    #[test]
    fn records_without_coordinates_are_skipped() {
        let records = vec![
            record("Broken", None, Some(81.6296)),
            record("Civil Lines", Some(21.2514), Some(81.6296)),
        ];
        let nearest = find_nearest(&records, 21.2514, 81.6296).unwrap();
        assert_eq!(nearest.record.locality, "Civil Lines");
    }

    #[test]
    fn empty_table_yields_no_match() {
        assert!(find_nearest(&[], 21.2514, 81.6296).is_none());
    }

    #[test]
    fn only_invalid_records_yields_no_match() {
        let records = vec![record("Broken", None, None)];
        assert!(find_nearest(&records, 21.2514, 81.6296).is_none());
    }
}
