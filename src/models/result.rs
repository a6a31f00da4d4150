//! Solve result, per-leg breakdown, and search statistics.

use serde::Serialize;

use super::Tour;

/// One edge of the final tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    /// Origin location id.
    pub from: usize,
    /// Destination location id.
    pub to: usize,
    /// Edge cost in matrix units (metres).
    pub distance: i64,
    /// Edge length in kilometres.
    pub km: f64,
}

/// Two locations with identical coordinates.
///
/// Not an error: the tour may contain a zero-cost leg between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DegenerateInput {
    /// Lower location id.
    pub first: usize,
    /// Higher location id.
    pub second: usize,
}

/// Why the improvement phase stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// Wall-clock budget exhausted (includes a zero budget).
    Deadline,
    /// No new best tour within the stall limit, or no move exists.
    Convergence,
    /// Improvement was switched off.
    Disabled,
}

/// Bookkeeping from the improvement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Raw cost of the constructed tour.
    pub construction_cost: i64,
    /// Completed descent rounds.
    pub rounds: usize,
    /// Total penalty increments applied.
    pub penalties_applied: usize,
    /// Stop reason.
    pub termination: Termination,
}

/// Output of a solve: the best tour and everything reporting needs.
///
/// Read-only for consumers; nothing here refers back to solver state.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    /// Best tour found, starting at the depot.
    pub tour: Tour,
    /// Total cost in matrix units.
    pub total_distance: i64,
    /// Total length in kilometres.
    pub total_km: f64,
    /// Estimated fuel use in litres.
    pub fuel_liters: f64,
    /// Estimated fuel cost.
    pub fuel_cost: f64,
    /// Edges in tour order, closing edge last.
    pub legs: Vec<Leg>,
    /// Coincident location pairs.
    pub warnings: Vec<DegenerateInput>,
    /// Improvement statistics.
    pub stats: SearchStats,
}

impl SolveResult {
    /// Tour order with the starting location repeated at the end.
    pub fn route(&self) -> Vec<usize> {
        let mut route = self.tour.order().to_vec();
        if let Some(&first) = route.first() {
            route.push(first);
        }
        route
    }

    /// 1-based visit position of a location, or `None` if absent.
    pub fn position_of(&self, location: usize) -> Option<usize> {
        self.tour
            .order()
            .iter()
            .position(|&id| id == location)
            .map(|p| p + 1)
    }
}
