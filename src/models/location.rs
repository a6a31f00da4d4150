//! Location and registry types.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Role of a location in the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    /// Start and end of the tour.
    Depot,
    /// A stop that must be visited once.
    Delivery,
}

/// A geographic point to visit (or the depot).
///
/// Coordinates are in degrees. The `id` is assigned by
/// [`LocationRegistry::new`] from the location's position in the input.
///
/// # Examples
///
/// ```
/// use tour_route::models::{Location, LocationKind};
///
/// let depot = Location::depot("Central", 40.8190, 29.3005);
/// assert_eq!(depot.kind(), LocationKind::Depot);
///
/// let stop = Location::new("Branch", 38.4362, 27.1428).with_city("İzmir");
/// assert_eq!(stop.city(), Some("İzmir"));
/// assert_eq!(stop.kind(), LocationKind::Delivery);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    name: String,
    lat: f64,
    lon: f64,
    kind: LocationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Location {
    /// Creates a delivery location.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            lat,
            lon,
            kind: LocationKind::Delivery,
            city: None,
            address: None,
        }
    }

    /// Creates a depot location.
    pub fn depot(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            kind: LocationKind::Depot,
            ..Self::new(name, lat, lon)
        }
    }

    /// Sets the city label.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Stable index within the registry.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Depot or delivery.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// City label, if any.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Street address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// The fixed set of points for one run: depot plus destinations.
///
/// Built once and read-only afterwards. Ids are reassigned to `0..N-1` by
/// input position and the depot's kind is forced to [`LocationKind::Depot`];
/// every other location becomes a delivery.
///
/// # Examples
///
/// ```
/// use tour_route::models::{Location, LocationRegistry};
///
/// let registry = LocationRegistry::new(
///     vec![
///         Location::depot("Depot", 41.0, 29.0),
///         Location::new("A", 40.0, 32.0),
///     ],
///     0,
/// )
/// .unwrap();
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.depot().name(), "Depot");
/// assert_eq!(registry.get(1).id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: Vec<Location>,
    depot: usize,
}

impl LocationRegistry {
    /// Validates and indexes the locations.
    ///
    /// Fails on fewer than two locations, an out-of-range depot, or
    /// coordinates that are non-finite or outside the lat/lon ranges.
    pub fn new(mut locations: Vec<Location>, depot: usize) -> Result<Self, ConfigError> {
        if locations.len() < 2 {
            return Err(ConfigError::TooFewLocations {
                count: locations.len(),
            });
        }
        if depot >= locations.len() {
            return Err(ConfigError::DepotOutOfRange {
                depot,
                len: locations.len(),
            });
        }

        for (index, loc) in locations.iter_mut().enumerate() {
            if !loc.lat.is_finite() || !loc.lon.is_finite() {
                return Err(ConfigError::NonFiniteCoordinate { index });
            }
            if loc.lat.abs() > 90.0 || loc.lon.abs() > 180.0 {
                return Err(ConfigError::CoordinateOutOfRange {
                    index,
                    lat: loc.lat,
                    lon: loc.lon,
                });
            }
            loc.id = index;
            loc.kind = if index == depot {
                LocationKind::Depot
            } else {
                LocationKind::Delivery
            };
        }

        Ok(Self { locations, depot })
    }

    /// All locations in id order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn get(&self, id: usize) -> &Location {
        &self.locations[id]
    }

    /// Depot index.
    pub fn depot_id(&self) -> usize {
        self.depot
    }

    /// The depot location.
    pub fn depot(&self) -> &Location {
        &self.locations[self.depot]
    }

    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false` for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Vec<Location> {
        vec![
            Location::depot("D", 41.0, 29.0),
            Location::new("A", 40.0, 32.0),
            Location::new("B", 38.0, 27.0),
        ]
    }

    #[test]
    fn test_location_builders() {
        let l = Location::new("A", 1.0, 2.0)
            .with_city("X")
            .with_address("Main St. 1");
        assert_eq!(l.name(), "A");
        assert_eq!(l.lat(), 1.0);
        assert_eq!(l.lon(), 2.0);
        assert_eq!(l.city(), Some("X"));
        assert_eq!(l.address(), Some("Main St. 1"));
        assert_eq!(l.kind(), LocationKind::Delivery);
    }

    #[test]
    fn test_registry_assigns_ids() {
        let reg = LocationRegistry::new(three(), 0).expect("valid");
        for (i, l) in reg.locations().iter().enumerate() {
            assert_eq!(l.id(), i);
        }
        assert_eq!(reg.depot_id(), 0);
        assert!(!reg.is_empty());
    }

    #[test]
    fn test_registry_non_zero_depot() {
        let reg = LocationRegistry::new(three(), 2).expect("valid");
        assert_eq!(reg.depot().name(), "B");
        assert_eq!(reg.get(2).kind(), LocationKind::Depot);
        assert_eq!(reg.get(0).kind(), LocationKind::Delivery);
    }

    #[test]
    fn test_registry_too_few() {
        let err = LocationRegistry::new(vec![Location::depot("D", 0.0, 0.0)], 0).unwrap_err();
        assert_eq!(err, ConfigError::TooFewLocations { count: 1 });
        assert!(LocationRegistry::new(vec![], 0).is_err());
    }

    #[test]
    fn test_registry_depot_out_of_range() {
        let err = LocationRegistry::new(three(), 3).unwrap_err();
        assert_eq!(err, ConfigError::DepotOutOfRange { depot: 3, len: 3 });
    }

    #[test]
    fn test_registry_rejects_bad_coordinates() {
        let mut locs = three();
        locs[1] = Location::new("NaN", f64::NAN, 0.0);
        assert_eq!(
            LocationRegistry::new(locs, 0).unwrap_err(),
            ConfigError::NonFiniteCoordinate { index: 1 }
        );

        let mut locs = three();
        locs[2] = Location::new("Far", 10.0, 181.0);
        assert!(matches!(
            LocationRegistry::new(locs, 0),
            Err(ConfigError::CoordinateOutOfRange { index: 2, .. })
        ));
    }
}
