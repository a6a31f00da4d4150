//! # tour-route
//!
//! Single-depot tour optimization: a great-circle road-distance model,
//! greedy tour construction, 2-opt/Or-opt guided local search under a
//! wall-clock deadline, and a fuel cost model.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Tour, SolverConfig, SolveResult)
//! - [`distance`] — Haversine road-distance model and integer cost matrix
//! - [`constructive`] — Initial tour heuristics (Cheapest Insertion, Path Cheapest Arc)
//! - [`local_search`] — Local search operators (2-opt, Or-opt) and deadline
//! - [`guided`] — Guided local search with edge penalties
//! - [`evaluation`] — Per-leg breakdown and fuel cost model
//! - [`solver`] — End-to-end pipeline
//! - [`demo`] — Reference and generated instances

pub mod constructive;
pub mod demo;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod guided;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::ConfigError;
pub use solver::TourSolver;
