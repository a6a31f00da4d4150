//! End-to-end tour solving.
//!
//! Validation → distance matrix → construction → improvement → fuel model.
//! All checks run before any work starts; after that every step is total.

use tracing::{debug, info, info_span, warn};

use crate::constructive::construct;
use crate::distance::{DistanceMatrix, DistanceModel};
use crate::error::ConfigError;
use crate::evaluation::{FuelModel, TourEvaluator};
use crate::guided::{GlsState, GuidedLocalSearch};
use crate::local_search::{descend, Deadline};
use crate::models::{
    DegenerateInput, Location, LocationRegistry, Metaheuristic, SearchStats, SolveResult,
    SolverConfig, Termination, Tour,
};

/// Single-depot tour solver.
///
/// Stateless between calls; one solver can serve many instances.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tour_route::models::{Location, SolverConfig};
/// use tour_route::solver::TourSolver;
///
/// let solver = TourSolver::new(
///     SolverConfig::default().with_time_limit(Duration::from_millis(200)),
/// )
/// .unwrap();
/// let result = solver
///     .solve(vec![
///         Location::depot("Depot", 40.8190, 29.3005),
///         Location::new("Ankara", 39.9708, 32.6227),
///         Location::new("Bursa", 40.2225, 28.8640),
///         Location::new("Eskişehir", 39.7668, 30.5256),
///     ])
///     .unwrap();
/// assert_eq!(result.tour.order()[0], 0);
/// assert_eq!(result.legs.len(), 4);
/// assert_eq!(result.route().last(), Some(&0));
/// ```
#[derive(Debug, Clone)]
pub struct TourSolver {
    config: SolverConfig,
}

/// Improved tour plus search bookkeeping.
#[derive(Debug, Clone)]
pub struct Improvement {
    /// Best tour found.
    pub tour: Tour,
    /// Completed rounds (descent passes for greedy descent).
    pub rounds: usize,
    /// Penalty increments applied.
    pub penalties_applied: usize,
    /// Stop reason.
    pub termination: Termination,
}

impl TourSolver {
    /// Creates a solver after validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for locations listed depot first.
    pub fn solve(&self, locations: Vec<Location>) -> Result<SolveResult, ConfigError> {
        self.solve_with_depot(locations, 0)
    }

    /// Solves with an explicit depot index.
    pub fn solve_with_depot(
        &self,
        locations: Vec<Location>,
        depot: usize,
    ) -> Result<SolveResult, ConfigError> {
        let registry = LocationRegistry::new(locations, depot)?;
        self.solve_registry(&registry)
    }

    /// Solves over an already validated registry.
    pub fn solve_registry(&self, registry: &LocationRegistry) -> Result<SolveResult, ConfigError> {
        let fuel = FuelModel::from_config(&self.config)?;
        let span = info_span!("solve", locations = registry.len());
        let _guard = span.enter();

        let model = DistanceModel::new(self.config.road_factor);
        let distances = DistanceMatrix::from_registry(registry, &model);

        let warnings: Vec<DegenerateInput> = distances
            .zero_cost_pairs()
            .into_iter()
            .map(|(first, second)| DegenerateInput { first, second })
            .collect();
        for w in &warnings {
            warn!(
                first = w.first,
                second = w.second,
                "locations at zero distance, tour may contain a zero-cost leg"
            );
        }
        let depot = registry.depot_id();

        let initial = construct(self.config.construction, &distances, depot);
        let construction_cost = initial.cost_under(&distances);
        info!(
            strategy = ?self.config.construction,
            cost = construction_cost,
            "initial tour constructed"
        );

        let deadline = Deadline::after(self.config.time_limit);
        let improvement = improve(initial, &distances, &self.config, &deadline);

        let mut tour = improvement.tour.rotated_to(depot);
        let evaluator = TourEvaluator::new(&distances, &model);
        let legs = evaluator.legs(&tour);
        let total_distance = tour.total_cost(&distances);
        let total_km = model.to_km(total_distance);
        let estimate = fuel.estimate(total_km)?;

        info!(
            cost = total_distance,
            km = total_km,
            improvement = construction_cost - total_distance,
            rounds = improvement.rounds,
            termination = ?improvement.termination,
            "tour solved"
        );

        Ok(SolveResult {
            tour,
            total_distance,
            total_km,
            fuel_liters: estimate.liters,
            fuel_cost: estimate.cost,
            legs,
            warnings,
            stats: SearchStats {
                construction_cost,
                rounds: improvement.rounds,
                penalties_applied: improvement.penalties_applied,
                termination: improvement.termination,
            },
        })
    }
}

/// Runs the configured improvement strategy on a constructed tour.
///
/// Never returns a tour costlier than `initial`. With an expired deadline
/// or [`Metaheuristic::None`] the input comes back unchanged.
pub fn improve(
    initial: Tour,
    distances: &DistanceMatrix,
    config: &SolverConfig,
    deadline: &Deadline,
) -> Improvement {
    match config.metaheuristic {
        Metaheuristic::None => Improvement {
            tour: initial,
            rounds: 0,
            penalties_applied: 0,
            termination: Termination::Disabled,
        },
        Metaheuristic::GreedyDescent => {
            let mut tour = initial;
            let descent = descend(&mut tour, distances, distances.is_symmetric(), deadline);
            let termination = if descent.converged {
                Termination::Convergence
            } else {
                Termination::Deadline
            };
            debug!(passes = descent.passes, ?termination, "greedy descent finished");
            Improvement {
                tour,
                rounds: descent.passes,
                penalties_applied: 0,
                termination,
            }
        }
        Metaheuristic::GuidedLocalSearch => {
            let outcome = GuidedLocalSearch::new(distances)
                .with_max_stall_rounds(config.max_stall_rounds)
                .with_penalty_coefficient(config.penalty_coefficient)
                .run(initial, deadline);
            let termination = match outcome.state {
                GlsState::TerminatedByDeadline => Termination::Deadline,
                _ => Termination::Convergence,
            };
            Improvement {
                tour: outcome.tour,
                rounds: outcome.rounds,
                penalties_applied: outcome.penalties_applied,
                termination,
            }
        }
    }
}
