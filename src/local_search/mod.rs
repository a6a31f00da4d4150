//! Local search operators for improving a closed tour.
//!
//! - [`two_opt`] — Segment reversal
//! - [`or_opt`] — Segment relocation (1 to 3 locations)
//!
//! Operators evaluate moves through [`ArcCost`], so the same code serves
//! plain descent on raw distances and the penalised costs of guided search.
//! Position 0 (the depot) is never moved.

mod deadline;
mod or_opt;
mod two_opt;

pub use deadline::Deadline;
pub use or_opt::{or_opt_pass, MAX_SEGMENT_LEN};
pub use two_opt::{two_opt_delta, two_opt_pass};

use crate::distance::ArcCost;
use crate::models::Tour;

/// What one operator pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOutcome {
    /// At least one move was applied.
    pub improved: bool,
    /// The pass stopped early because the deadline passed.
    pub interrupted: bool,
}

/// Result of [`descend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descent {
    /// Improving pass pairs.
    pub passes: usize,
    /// `true` if a complete pass pair found nothing to apply; `false` if the
    /// deadline cut the descent short.
    pub converged: bool,
}

/// Alternates 2-opt and Or-opt passes until neither improves or the
/// deadline passes.
///
/// Only strictly improving moves are applied, so the descent terminates.
///
/// # Examples
///
/// ```
/// use tour_route::distance::{ArcCost, DistanceMatrix};
/// use tour_route::local_search::{descend, Deadline};
/// use tour_route::models::Tour;
///
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 10, 14, 10, 10, 0, 10, 14, 14, 10, 0, 10, 10, 14, 10, 0],
/// )
/// .unwrap();
/// let mut tour = Tour::new(vec![0, 2, 1, 3]);
/// let descent = descend(&mut tour, &dm, dm.is_symmetric(), &Deadline::unbounded());
/// assert!(descent.converged);
/// assert_eq!(tour.cost_under(&dm), 40);
/// ```
pub fn descend<C: ArcCost + ?Sized>(
    tour: &mut Tour,
    costs: &C,
    symmetric: bool,
    deadline: &Deadline,
) -> Descent {
    let mut passes = 0;
    while !deadline.expired() {
        let reversed = two_opt_pass(tour, costs, symmetric, deadline);
        let relocated = or_opt_pass(tour, costs, deadline);
        let improved = reversed.improved || relocated.improved;
        if improved {
            passes += 1;
        }
        if reversed.interrupted || relocated.interrupted {
            break;
        }
        if !improved {
            return Descent {
                passes,
                converged: true,
            };
        }
    }
    Descent {
        passes,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, DistanceModel};
    use crate::models::Location;
    use std::time::Duration;

    fn grid() -> DistanceMatrix {
        let mut locations = vec![Location::depot("D", 40.0, 30.0)];
        for r in 0..3 {
            for c in 0..3 {
                if r == 0 && c == 0 {
                    continue;
                }
                let name = format!("{r}-{c}");
                locations.push(Location::new(name, 40.0 + 0.1 * r as f64, 30.0 + 0.1 * c as f64));
            }
        }
        DistanceMatrix::from_locations(&locations, &DistanceModel::default())
    }

    #[test]
    fn test_descend_never_worsens() {
        let dm = grid();
        let mut tour = Tour::new(vec![0, 8, 1, 7, 2, 6, 3, 5, 4]);
        let before = tour.cost_under(&dm);
        descend(&mut tour, &dm, true, &Deadline::unbounded());
        assert!(tour.cost_under(&dm) < before);
        assert!(tour.is_permutation(9));
        assert_eq!(tour.order()[0], 0);
    }

    #[test]
    fn test_descend_reaches_local_optimum() {
        let dm = grid();
        let mut tour = Tour::new(vec![0, 8, 1, 7, 2, 6, 3, 5, 4]);
        let first = descend(&mut tour, &dm, true, &Deadline::unbounded());
        assert!(first.converged);
        assert!(first.passes > 0);
        let settled = tour.clone();
        let again = descend(&mut tour, &dm, true, &Deadline::unbounded());
        assert_eq!(
            again,
            Descent {
                passes: 0,
                converged: true
            }
        );
        assert_eq!(tour, settled);
    }

    #[test]
    fn test_descend_zero_budget() {
        let dm = grid();
        let mut tour = Tour::new(vec![0, 8, 1, 7, 2, 6, 3, 5, 4]);
        let descent = descend(&mut tour, &dm, true, &Deadline::after(Duration::ZERO));
        assert_eq!(descent.passes, 0);
        assert!(!descent.converged);
        assert_eq!(tour.order(), &[0, 8, 1, 7, 2, 6, 3, 5, 4]);
    }

    #[test]
    fn test_descend_interrupted_mid_search() {
        // 400 scattered stops cannot be settled within a millisecond
        let locations = crate::demo::random_locations(400, crate::demo::BoundingBox::TURKEY, 11);
        let dm = DistanceMatrix::from_locations(&locations, &DistanceModel::default());
        let mut tour = Tour::new((0..400).collect());
        let before = tour.cost_under(&dm);
        let descent = descend(&mut tour, &dm, true, &Deadline::after(Duration::from_millis(1)));
        assert!(!descent.converged);
        assert!(tour.is_permutation(400));
        assert!(tour.cost_under(&dm) <= before);
    }
}
