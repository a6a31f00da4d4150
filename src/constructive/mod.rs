//! Constructive heuristics for building the initial tour.
//!
//! - [`cheapest_insertion`] — Cheapest-insertion from a depot-only tour, O(n³)
//! - [`path_cheapest_arc`] — Greedy path extension along the cheapest arc, O(n²)

mod cheapest_insertion;
mod path_cheapest_arc;

pub use cheapest_insertion::cheapest_insertion;
pub use path_cheapest_arc::path_cheapest_arc;

use crate::distance::DistanceMatrix;
use crate::models::{ConstructionStrategy, Tour};

/// Builds the initial tour with the selected strategy.
pub fn construct(strategy: ConstructionStrategy, distances: &DistanceMatrix, depot: usize) -> Tour {
    match strategy {
        ConstructionStrategy::CheapestInsertion => cheapest_insertion(distances, depot),
        ConstructionStrategy::PathCheapestArc => path_cheapest_arc(distances, depot),
    }
}
