//! Error types for tour solving.
//!
//! Every check runs once, before any construction work starts. Past that
//! point the algorithms are total over valid input and never fail.

use thiserror::Error;

/// Invalid input handed to the solver or the fuel model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A tour needs a depot and at least one destination.
    #[error("at least 2 locations are required, got {count}")]
    TooFewLocations {
        /// Number of locations supplied.
        count: usize,
    },

    /// The nominated depot is not one of the supplied locations.
    #[error("depot index {depot} is out of range for {len} locations")]
    DepotOutOfRange {
        /// Requested depot index.
        depot: usize,
        /// Number of locations.
        len: usize,
    },

    /// Latitude or longitude is NaN or infinite.
    #[error("location {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending location.
        index: usize,
    },

    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("location {index} has coordinate ({lat}, {lon}) outside the valid range")]
    CoordinateOutOfRange {
        /// Index of the offending location.
        index: usize,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },

    /// A solver parameter is non-finite or outside its allowed range.
    #[error("invalid value {value} for parameter `{name}`")]
    InvalidParameter {
        /// Parameter name as it appears in [`SolverConfig`](crate::models::SolverConfig).
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A negative distance reached the fuel model.
    #[error("distance must be non-negative, got {0} km")]
    NegativeDistance(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ConfigError::TooFewLocations { count: 1 };
        assert_eq!(e.to_string(), "at least 2 locations are required, got 1");

        let e = ConfigError::InvalidParameter {
            name: "road_factor",
            value: 0.5,
        };
        assert_eq!(e.to_string(), "invalid value 0.5 for parameter `road_factor`");
    }
}
