//! Distance model and integer cost matrix.
//!
//! Floating-point geometry stays in this module; everything downstream
//! works on the integer weights of [`DistanceMatrix`].

mod geo;
mod matrix;

pub use geo::{haversine_km, DistanceModel, EARTH_RADIUS_KM, UNITS_PER_KM};
pub use matrix::DistanceMatrix;

/// Integer arc weights over locations `0..size()`.
///
/// Local search runs against this trait so the same moves evaluate either
/// raw distances or penalty-augmented costs.
pub trait ArcCost {
    /// Cost of travelling from `from` to `to`.
    fn arc(&self, from: usize, to: usize) -> i64;

    /// Number of locations.
    fn size(&self) -> usize;

    /// Returns `true` if `arc(i, j) == arc(j, i)` everywhere.
    fn is_symmetric(&self) -> bool;
}
