//! Path-cheapest-arc constructive heuristic.
//!
//! Starting from the depot, always extend the path along the cheapest arc
//! to an unvisited location, then close the tour back to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Builds a tour by repeatedly following the cheapest outgoing arc.
///
/// Ties go to the lowest location id.
///
/// # Examples
///
/// ```
/// use tour_route::distance::DistanceMatrix;
/// use tour_route::constructive::path_cheapest_arc;
///
/// // Points on a line at 0, 10, 1
/// let dm = DistanceMatrix::from_data(3, vec![0, 10, 1, 10, 0, 9, 1, 9, 0]).unwrap();
/// assert_eq!(path_cheapest_arc(&dm, 0).order(), &[0, 2, 1]);
/// ```
pub fn path_cheapest_arc(distances: &DistanceMatrix, depot: usize) -> Tour {
    let n = distances.size();
    let mut order = Vec::with_capacity(n);
    order.push(depot);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != depot).collect();
    let mut current = depot;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    Tour::new(order)
}
