//! Tour evaluation and the fuel cost model.

mod evaluator;
mod fuel;

pub use evaluator::TourEvaluator;
pub use fuel::{FuelEstimate, FuelModel};
