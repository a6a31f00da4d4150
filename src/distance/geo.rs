//! Great-circle distance and the road-distance model.

use crate::models::Location;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Matrix units per kilometre (matrix entries are metres).
pub const UNITS_PER_KM: f64 = 1000.0;

/// Haversine distance in kilometres between two (lat, lon) pairs in degrees.
///
/// # Examples
///
/// ```
/// use tour_route::distance::haversine_km;
///
/// // One degree of latitude is about 111.19 km.
/// let d = haversine_km(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111.195).abs() < 1e-3);
/// assert_eq!(haversine_km(40.0, 29.0, 40.0, 29.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = phi2 - phi1;
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}

/// Converts coordinates into integer edge weights.
///
/// `cost = trunc(haversine_km × road_factor × 1000)`, i.e. estimated road
/// metres. All floating-point work of the engine happens here.
///
/// # Examples
///
/// ```
/// use tour_route::distance::DistanceModel;
/// use tour_route::models::Location;
///
/// let model = DistanceModel::new(1.35);
/// let a = Location::new("A", 0.0, 0.0);
/// let b = Location::new("B", 1.0, 0.0);
/// assert_eq!(model.cost(&a, &b), 150_113);
/// assert!((model.to_km(150_113) - 150.113).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceModel {
    road_factor: f64,
}

impl DistanceModel {
    /// Creates a model with the given road correction factor.
    pub fn new(road_factor: f64) -> Self {
        Self { road_factor }
    }

    /// Estimated road distance in kilometres.
    pub fn road_km(&self, a: &Location, b: &Location) -> f64 {
        haversine_km(a.lat(), a.lon(), b.lat(), b.lon()) * self.road_factor
    }

    /// Integer edge weight between two locations.
    pub fn cost(&self, a: &Location, b: &Location) -> i64 {
        (self.road_km(a, b) * UNITS_PER_KM) as i64
    }

    /// Matrix units back to kilometres.
    pub fn to_km(&self, units: i64) -> f64 {
        units as f64 / UNITS_PER_KM
    }
}

impl Default for DistanceModel {
    fn default() -> Self {
        Self::new(1.35)
    }
}
