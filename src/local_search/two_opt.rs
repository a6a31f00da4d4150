//! 2-opt improvement on a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions i < j (position 0, the depot, stays fixed),
//! compute the change in cost from reversing the segment `[i..=j]`:
//!
//! ```text
//! delta = c(t[i-1], t[j]) + c(t[i], t[j+1]) - c(t[i-1], t[i]) - c(t[j], t[j+1])
//! ```
//!
//! On asymmetric costs the reversed inner arcs are added to the delta.
//! If delta < 0, reverse the segment and keep scanning (first-improvement).
//!
//! # Complexity
//!
//! O(n²) per pass on symmetric costs, O(n³) on asymmetric ones.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::{Deadline, PassOutcome};
use crate::distance::ArcCost;
use crate::models::Tour;

/// Runs one first-improvement 2-opt pass.
///
/// `symmetric` must match `costs.is_symmetric()`; it is passed in so callers
/// compute it once.
pub fn two_opt_pass<C: ArcCost + ?Sized>(
    tour: &mut Tour,
    costs: &C,
    symmetric: bool,
    deadline: &Deadline,
) -> PassOutcome {
    let mut outcome = PassOutcome::default();
    let n = tour.len();
    if n < 3 {
        return outcome;
    }

    for i in 1..n - 1 {
        if deadline.expired() {
            outcome.interrupted = true;
            break;
        }
        for j in i + 1..n {
            if two_opt_delta(tour, costs, symmetric, i, j) < 0 {
                tour.reverse(i, j);
                outcome.improved = true;
            }
        }
    }
    outcome
}

/// Cost change from reversing positions `i..=j` of the tour.
pub fn two_opt_delta<C: ArcCost + ?Sized>(
    tour: &Tour,
    costs: &C,
    symmetric: bool,
    i: usize,
    j: usize,
) -> i64 {
    let t = tour.order();
    let n = t.len();
    let prev = t[i - 1];
    let next = t[(j + 1) % n];

    let mut delta = costs.arc(prev, t[j]) + costs.arc(t[i], next)
        - costs.arc(prev, t[i])
        - costs.arc(t[j], next);

    if !symmetric {
        for k in i..j {
            delta += costs.arc(t[k + 1], t[k]) - costs.arc(t[k], t[k + 1]);
        }
    }
    delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_data(
            4,
            vec![
                0, 10, 14, 10, //
                10, 0, 10, 14, //
                14, 10, 0, 10, //
                10, 14, 10, 0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_uncrosses() {
        let dm = square();
        let mut tour = Tour::new(vec![0, 2, 1, 3]);
        assert!(two_opt_pass(&mut tour, &dm, true, &Deadline::unbounded()).improved);
        assert_eq!(tour.cost_under(&dm), 40);
        assert_eq!(tour.order()[0], 0);
        assert!(tour.is_permutation(4));
    }

    #[test]
    fn test_already_optimal() {
        let dm = square();
        let mut tour = Tour::new(vec![0, 1, 2, 3]);
        assert!(!two_opt_pass(&mut tour, &dm, true, &Deadline::unbounded()).improved);
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_delta_matches_recomputed_cost() {
        let dm = square();
        let tour = Tour::new(vec![0, 2, 1, 3]);
        let before = tour.cost_under(&dm);
        for i in 1..3 {
            for j in i + 1..4 {
                let mut moved = tour.clone();
                moved.reverse(i, j);
                let delta = two_opt_delta(&tour, &dm, true, i, j);
                assert_eq!(moved.cost_under(&dm) - before, delta, "i={i} j={j}");
            }
        }
    }

    #[test]
    fn test_asymmetric_delta() {
        let dm = DistanceMatrix::from_data(
            4,
            vec![
                0, 1, 9, 9, //
                9, 0, 1, 9, //
                9, 9, 0, 1, //
                1, 9, 9, 0,
            ],
        )
        .expect("valid");
        let tour = Tour::new(vec![0, 3, 2, 1]);
        let before = tour.cost_under(&dm);
        let mut moved = tour.clone();
        moved.reverse(1, 3);
        assert_eq!(
            two_opt_delta(&tour, &dm, false, 1, 3),
            moved.cost_under(&dm) - before
        );
        let mut t = tour.clone();
        assert!(two_opt_pass(&mut t, &dm, false, &Deadline::unbounded()).improved);
        assert!(t.cost_under(&dm) < before);
    }

    #[test]
    fn test_expired_deadline_makes_no_move() {
        let dm = square();
        let mut tour = Tour::new(vec![0, 2, 1, 3]);
        let deadline = Deadline::after(std::time::Duration::ZERO);
        let pass = two_opt_pass(&mut tour, &dm, true, &deadline);
        assert!(!pass.improved);
        assert!(pass.interrupted);
        assert_eq!(tour.order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_two_locations() {
        let dm = DistanceMatrix::from_data(2, vec![0, 3, 3, 0]).expect("valid");
        let mut tour = Tour::new(vec![0, 1]);
        assert!(!two_opt_pass(&mut tour, &dm, true, &Deadline::unbounded()).improved);
    }
}
