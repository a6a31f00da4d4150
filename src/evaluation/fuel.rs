//! Fuel consumption and cost from tour length.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{non_negative, SolverConfig};

/// Fixed-coefficient fuel model.
///
/// ```text
/// litres = km × consumption_per_100km / 100
/// cost   = litres × unit_price
/// ```
///
/// # Examples
///
/// ```
/// use tour_route::evaluation::FuelModel;
///
/// let model = FuelModel::new(12.0, 43.50).unwrap();
/// let est = model.estimate(1000.0).unwrap();
/// assert_eq!(est.liters, 120.0);
/// assert_eq!(est.cost, 5220.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    consumption_per_100km: f64,
    unit_price: f64,
}

/// Fuel use and cost for one tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelEstimate {
    /// Distance the estimate is based on.
    pub km: f64,
    /// Litres consumed.
    pub liters: f64,
    /// Currency spent.
    pub cost: f64,
}

impl FuelModel {
    /// Creates a model; both coefficients must be finite and non-negative.
    pub fn new(consumption_per_100km: f64, unit_price: f64) -> Result<Self, ConfigError> {
        non_negative("fuel_consumption_per_100km", consumption_per_100km)?;
        non_negative("fuel_unit_price", unit_price)?;
        Ok(Self {
            consumption_per_100km,
            unit_price,
        })
    }

    /// Takes the fuel coefficients from a solver configuration.
    pub fn from_config(config: &SolverConfig) -> Result<Self, ConfigError> {
        Self::new(config.fuel_consumption_per_100km, config.fuel_unit_price)
    }

    /// Litres per 100 km.
    pub fn consumption_per_100km(&self) -> f64 {
        self.consumption_per_100km
    }

    /// Currency per litre.
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Estimates fuel for a distance in kilometres.
    pub fn estimate(&self, km: f64) -> Result<FuelEstimate, ConfigError> {
        if km < 0.0 || km.is_nan() {
            return Err(ConfigError::NegativeDistance(km));
        }
        let liters = km * self.consumption_per_100km / 100.0;
        Ok(FuelEstimate {
            km,
            liters,
            cost: liters * self.unit_price,
        })
    }
}

impl Default for FuelModel {
    fn default() -> Self {
        Self {
            consumption_per_100km: 12.0,
            unit_price: 43.50,
        }
    }
}
