//! Tour evaluator that produces the per-leg breakdown.

use crate::distance::{DistanceMatrix, DistanceModel};
use crate::models::{Leg, Tour};

/// Walks a tour and reports every edge with its cost in matrix units and
/// kilometres.
///
/// # Examples
///
/// ```
/// use tour_route::distance::{DistanceMatrix, DistanceModel};
/// use tour_route::evaluation::TourEvaluator;
/// use tour_route::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 1500, 2000, 1500, 0, 2500, 2000, 2500, 0]).unwrap();
/// let model = DistanceModel::default();
/// let evaluator = TourEvaluator::new(&dm, &model);
///
/// let legs = evaluator.legs(&Tour::new(vec![0, 1, 2]));
/// assert_eq!(legs.len(), 3);
/// assert_eq!((legs[2].from, legs[2].to), (2, 0));
/// assert_eq!(legs[1].km, 2.5);
/// assert_eq!(evaluator.total_km(&Tour::new(vec![0, 1, 2])), 6.0);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
    model: &'a DistanceModel,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given matrix and scale.
    pub fn new(distances: &'a DistanceMatrix, model: &'a DistanceModel) -> Self {
        Self { distances, model }
    }

    /// Edges in tour order, closing edge last.
    ///
    /// A single-location tour has no legs.
    pub fn legs(&self, tour: &Tour) -> Vec<Leg> {
        if tour.len() < 2 {
            return Vec::new();
        }
        tour.edges()
            .map(|(from, to)| {
                let distance = self.distances.get(from, to);
                Leg {
                    from,
                    to,
                    distance,
                    km: self.model.to_km(distance),
                }
            })
            .collect()
    }

    /// Tour cost in matrix units.
    pub fn total_distance(&self, tour: &Tour) -> i64 {
        tour.cost_under(self.distances)
    }

    /// Tour length in kilometres.
    pub fn total_km(&self, tour: &Tour) -> f64 {
        self.model.to_km(self.total_distance(tour))
    }
}
