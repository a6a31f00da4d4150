//! Guided local search driver.
//!
//! # Algorithm
//!
//! 1. Descend with 2-opt and Or-opt under the augmented cost
//!    `d(a, b) + lambda × penalty(a, b)` (penalties start at zero).
//! 2. Keep the tour if its raw cost beats the best so far.
//! 3. At the resulting local optimum, raise the penalty of every tour edge
//!    with maximal utility `d(a, b) / (1 + penalty(a, b))`.
//! 4. Repeat until the deadline passes or `max_stall_rounds` rounds bring no
//!    new best tour.
//!
//! `lambda` is fixed after the first descent as
//! `max(1, round(coefficient × cost / n))`.
//!
//! # Reference
//!
//! Voudouris, C., Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

use tracing::{debug, trace};

use super::{PenalizedCost, PenaltyMatrix};
use crate::distance::DistanceMatrix;
use crate::local_search::{descend, Deadline};
use crate::models::Tour;

/// Lifecycle of a guided search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlsState {
    /// Created, not yet run.
    Initialized,
    /// Inside the descent/penalise loop.
    Improving,
    /// Stopped because the deadline passed.
    TerminatedByDeadline,
    /// Stopped because no new best tour appeared within the stall limit,
    /// or no move or penalty is possible.
    TerminatedByConvergence,
}

/// Best tour and bookkeeping from a guided search run.
#[derive(Debug, Clone)]
pub struct GlsOutcome {
    /// Best tour by raw cost.
    pub tour: Tour,
    /// Raw cost of `tour`.
    pub cost: i64,
    /// Completed descent rounds.
    pub rounds: usize,
    /// Penalty increments applied.
    pub penalties_applied: usize,
    /// Terminal state.
    pub state: GlsState,
}

/// Penalty-guided local search over a fixed distance matrix.
///
/// The returned tour never costs more than the input tour.
///
/// # Examples
///
/// ```
/// use tour_route::distance::DistanceMatrix;
/// use tour_route::guided::{GlsState, GuidedLocalSearch};
/// use tour_route::local_search::Deadline;
/// use tour_route::models::Tour;
///
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 10, 14, 10, 10, 0, 10, 14, 14, 10, 0, 10, 10, 14, 10, 0],
/// )
/// .unwrap();
/// let mut gls = GuidedLocalSearch::new(&dm).with_max_stall_rounds(5);
/// let out = gls.run(Tour::new(vec![0, 2, 1, 3]), &Deadline::unbounded());
/// assert_eq!(out.cost, 40);
/// assert_eq!(out.state, GlsState::TerminatedByConvergence);
/// ```
#[derive(Debug)]
pub struct GuidedLocalSearch<'a> {
    distances: &'a DistanceMatrix,
    penalties: PenaltyMatrix,
    max_stall_rounds: usize,
    penalty_coefficient: f64,
    state: GlsState,
}

impl<'a> GuidedLocalSearch<'a> {
    /// Creates a search with 200 stall rounds and coefficient 0.1.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            penalties: PenaltyMatrix::new(distances.size()),
            max_stall_rounds: 200,
            penalty_coefficient: 0.1,
            state: GlsState::Initialized,
        }
    }

    /// Sets the number of rounds without a new best tour before stopping.
    pub fn with_max_stall_rounds(mut self, rounds: usize) -> Self {
        self.max_stall_rounds = rounds;
        self
    }

    /// Sets the lambda coefficient. Must be positive and finite.
    pub fn with_penalty_coefficient(mut self, coefficient: f64) -> Self {
        self.penalty_coefficient = coefficient;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GlsState {
        self.state
    }

    /// Accumulated penalties.
    pub fn penalties(&self) -> &PenaltyMatrix {
        &self.penalties
    }

    /// Improves `initial` until the deadline or convergence.
    pub fn run(&mut self, initial: Tour, deadline: &Deadline) -> GlsOutcome {
        let n = initial.len();
        let mut best = initial.clone();
        let mut best_cost = best.cost_under(self.distances);
        let mut rounds = 0;
        let mut penalties_applied = 0;

        if n < 3 {
            self.state = GlsState::TerminatedByConvergence;
            return GlsOutcome {
                tour: best,
                cost: best_cost,
                rounds,
                penalties_applied,
                state: self.state,
            };
        }

        let symmetric = self.distances.is_symmetric();
        let mut current = initial;
        let mut lambda = 0;
        let mut stall = 0;

        loop {
            if deadline.expired() {
                self.state = GlsState::TerminatedByDeadline;
                break;
            }
            self.state = GlsState::Improving;

            let costs = PenalizedCost::new(self.distances, &self.penalties, lambda, symmetric);
            descend(&mut current, &costs, symmetric, deadline);
            rounds += 1;

            let cost = current.cost_under(self.distances);
            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
                stall = 0;
            } else {
                stall += 1;
            }

            if stall >= self.max_stall_rounds {
                self.state = GlsState::TerminatedByConvergence;
                break;
            }

            if lambda == 0 {
                lambda = self.lambda_for(cost, n);
            }

            let penalized = self.penalize(&current);
            penalties_applied += penalized;
            trace!(round = rounds, cost, best_cost, lambda, penalized, "guided round");

            if penalized == 0 {
                self.state = GlsState::TerminatedByConvergence;
                break;
            }
        }

        debug!(
            rounds,
            penalties_applied,
            best_cost,
            state = ?self.state,
            elapsed_ms = deadline.elapsed().as_millis() as u64,
            "guided local search finished"
        );

        GlsOutcome {
            tour: best,
            cost: best_cost,
            rounds,
            penalties_applied,
            state: self.state,
        }
    }

    fn lambda_for(&self, cost: i64, n: usize) -> i64 {
        let lambda = (self.penalty_coefficient * cost as f64 / n as f64).round() as i64;
        lambda.max(1)
    }

    /// Penalises every tour edge of maximal utility. Returns how many.
    fn penalize(&mut self, tour: &Tour) -> usize {
        // Utility d / (1 + p), compared by cross-multiplication
        let utility = |a: usize, b: usize| {
            (
                i128::from(self.distances.get(a, b)),
                1 + i128::from(self.penalties.get(a, b)),
            )
        };

        let mut max = (0i128, 1i128);
        let mut chosen: Vec<(usize, usize)> = Vec::new();
        for (a, b) in tour.edges() {
            let (num, den) = utility(a, b);
            let lhs = num * max.1;
            let rhs = max.0 * den;
            if lhs > rhs {
                max = (num, den);
                chosen.clear();
                chosen.push((a, b));
            } else if lhs == rhs && num > 0 {
                chosen.push((a, b));
            }
        }

        for &(a, b) in &chosen {
            self.penalties.increment(a, b);
        }
        chosen.len()
    }
}
