//! Guided local search metaheuristic.
//!
//! Escapes local optima by penalising costly edges that keep appearing in
//! local optima, instead of restarting. The search is a plain loop with an
//! explicit [`GlsState`] and a wall-clock [`Deadline`](crate::local_search::Deadline).

mod penalty;
mod search;

pub use penalty::{PenalizedCost, PenaltyMatrix};
pub use search::{GlsOutcome, GlsState, GuidedLocalSearch};
