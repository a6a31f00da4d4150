//! Domain model types for single-depot tours.
//!
//! Provides the location registry, the closed tour, solver configuration,
//! and the result handed to reporting layers.

mod config;
mod location;
mod result;
mod tour;

pub(crate) use config::non_negative;
pub use config::{ConstructionStrategy, Metaheuristic, SolverConfig};
pub use location::{Location, LocationKind, LocationRegistry};
pub use result::{DegenerateInput, Leg, SearchStats, SolveResult, Termination};
pub use tour::Tour;
