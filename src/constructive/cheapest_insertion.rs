//! Cheapest-insertion constructive heuristic.
//!
//! Starts from a tour holding only the depot and repeatedly inserts the
//! unvisited location whose best insertion raises the tour cost the least.
//!
//! ```text
//! delta(k, a→b) = d(a, k) + d(k, b) - d(a, b)
//! ```
//!
//! Ties go to the lowest location id; among equal positions for the same
//! location, the latest position wins, so a new stop extends the path just
//! before the return to the depot.
//!
//! # Complexity
//!
//! O(n³): n insertions, each scanning n candidates over n positions.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Builds a tour over every location of `distances` by cheapest insertion.
///
/// The returned tour starts at `depot`.
///
/// # Examples
///
/// ```
/// use tour_route::distance::DistanceMatrix;
/// use tour_route::constructive::cheapest_insertion;
///
/// // Points on a line at 0, 1, 3
/// let dm = DistanceMatrix::from_data(3, vec![0, 1, 3, 1, 0, 2, 3, 2, 0]).unwrap();
/// let tour = cheapest_insertion(&dm, 0);
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// ```
pub fn cheapest_insertion(distances: &DistanceMatrix, depot: usize) -> Tour {
    let n = distances.size();
    let mut order = Vec::with_capacity(n);
    order.push(depot);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != depot).collect();

    while !unvisited.is_empty() {
        // (delta, index into unvisited, insertion position)
        let mut best: Option<(i64, usize, usize)> = None;

        for (u, &k) in unvisited.iter().enumerate() {
            let len = order.len();
            for pos in (1..=len).rev() {
                let a = order[pos - 1];
                let b = order[pos % len];
                let delta = distances.get(a, k) + distances.get(k, b) - distances.get(a, b);
                if best.map_or(true, |(d, _, _)| delta < d) {
                    best = Some((delta, u, pos));
                }
            }
        }

        match best {
            Some((_, u, pos)) => {
                let k = unvisited.remove(u);
                order.insert(pos, k);
            }
            None => break,
        }
    }

    Tour::new(order)
}
