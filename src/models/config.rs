//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Greedy heuristic that builds the initial tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstructionStrategy {
    /// Insert the location with the cheapest marginal cost, one at a time.
    #[default]
    CheapestInsertion,
    /// Extend a path from the depot along the cheapest outgoing arc.
    PathCheapestArc,
}

/// Improvement strategy run after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Metaheuristic {
    /// Penalty-guided local search until deadline or convergence.
    #[default]
    GuidedLocalSearch,
    /// Plain 2-opt/Or-opt descent to the first local optimum.
    GreedyDescent,
    /// Keep the constructed tour.
    None,
}

/// Configuration for [`TourSolver`](crate::solver::TourSolver).
///
/// Defaults reproduce a light commercial vehicle on intercity roads:
/// road factor 1.35, 12 L/100 km, 43.50 per litre and a 10 s search budget.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tour_route::models::{Metaheuristic, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_millis(500))
///     .with_metaheuristic(Metaheuristic::GreedyDescent);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.road_factor, 1.35);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Initial tour heuristic.
    pub construction: ConstructionStrategy,
    /// Improvement strategy.
    pub metaheuristic: Metaheuristic,
    /// Wall-clock budget for the improvement phase. Zero skips it.
    pub time_limit: Duration,
    /// Multiplier from great-circle to estimated road distance.
    pub road_factor: f64,
    /// Litres per 100 km.
    pub fuel_consumption_per_100km: f64,
    /// Currency per litre.
    pub fuel_unit_price: f64,
    /// Guided-search rounds without a new best tour before stopping.
    pub max_stall_rounds: usize,
    /// Scales the penalty weight against the mean edge cost of the first
    /// local optimum.
    pub penalty_coefficient: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            construction: ConstructionStrategy::default(),
            metaheuristic: Metaheuristic::default(),
            time_limit: Duration::from_secs(10),
            road_factor: 1.35,
            fuel_consumption_per_100km: 12.0,
            fuel_unit_price: 43.50,
            max_stall_rounds: 200,
            penalty_coefficient: 0.1,
        }
    }
}

impl SolverConfig {
    /// Sets the construction strategy.
    pub fn with_construction(mut self, strategy: ConstructionStrategy) -> Self {
        self.construction = strategy;
        self
    }

    /// Sets the improvement strategy.
    pub fn with_metaheuristic(mut self, metaheuristic: Metaheuristic) -> Self {
        self.metaheuristic = metaheuristic;
        self
    }

    /// Sets the improvement time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the road correction factor.
    pub fn with_road_factor(mut self, factor: f64) -> Self {
        self.road_factor = factor;
        self
    }

    /// Sets fuel consumption (L/100 km) and unit price.
    pub fn with_fuel(mut self, consumption_per_100km: f64, unit_price: f64) -> Self {
        self.fuel_consumption_per_100km = consumption_per_100km;
        self.fuel_unit_price = unit_price;
        self
    }

    /// Sets the convergence threshold of the guided search.
    pub fn with_max_stall_rounds(mut self, rounds: usize) -> Self {
        self.max_stall_rounds = rounds;
        self
    }

    /// Checks every numeric parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.road_factor.is_finite() || self.road_factor < 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "road_factor",
                value: self.road_factor,
            });
        }
        non_negative("fuel_consumption_per_100km", self.fuel_consumption_per_100km)?;
        non_negative("fuel_unit_price", self.fuel_unit_price)?;
        if !self.penalty_coefficient.is_finite() || self.penalty_coefficient <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "penalty_coefficient",
                value: self.penalty_coefficient,
            });
        }
        Ok(())
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidParameter { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.construction, ConstructionStrategy::CheapestInsertion);
        assert_eq!(c.metaheuristic, Metaheuristic::GuidedLocalSearch);
        assert_eq!(c.time_limit, Duration::from_secs(10));
        assert_eq!(c.fuel_consumption_per_100km, 12.0);
        assert_eq!(c.fuel_unit_price, 43.50);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let c = SolverConfig::default().with_road_factor(0.9);
        assert!(matches!(
            c.validate(),
            Err(ConfigError::InvalidParameter {
                name: "road_factor",
                ..
            })
        ));

        let c = SolverConfig::default().with_fuel(-1.0, 43.5);
        assert!(c.validate().is_err());

        let c = SolverConfig::default().with_fuel(12.0, f64::NAN);
        assert!(c.validate().is_err());

        let c = SolverConfig {
            penalty_coefficient: 0.0,
            ..SolverConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_zero_budget_is_valid() {
        let c = SolverConfig::default().with_time_limit(Duration::ZERO);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let c: SolverConfig =
            serde_json::from_str(r#"{"metaheuristic":"GreedyDescent","road_factor":1.2}"#)
                .expect("valid json");
        assert_eq!(c.metaheuristic, Metaheuristic::GreedyDescent);
        assert_eq!(c.road_factor, 1.2);
        assert_eq!(c.fuel_unit_price, 43.50);
        assert_eq!(c.max_stall_rounds, 200);
    }
}
