//! Closed tour over all locations.

use serde::Serialize;

use crate::distance::{ArcCost, DistanceMatrix};

/// An ordered, implicitly closed visiting sequence.
///
/// The last location connects back to the first. Solver-produced tours
/// start at the depot; rotating a tour does not change its cost.
///
/// The raw tour cost is cached after [`Tour::total_cost`] and dropped by
/// every mutation of the sequence.
///
/// # Examples
///
/// ```
/// use tour_route::distance::DistanceMatrix;
/// use tour_route::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 1, 2, 1, 0, 3, 2, 3, 0]).unwrap();
/// let mut tour = Tour::new(vec![0, 1, 2]);
/// assert_eq!(tour.total_cost(&dm), 6);
/// assert_eq!(tour.cached_cost(), Some(6));
///
/// tour.reverse(1, 2);
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// assert_eq!(tour.cached_cost(), None);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    order: Vec<usize>,
    #[serde(skip)]
    cost: Option<i64>,
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for Tour {}

impl Tour {
    /// Wraps a visiting sequence.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order, cost: None }
    }

    /// Location ids in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of locations in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the tour is a permutation of `0..n`.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &id in &self.order {
            if id >= n || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }

    /// Same cyclic order, starting at `start`.
    ///
    /// Returns an unchanged copy if `start` is not in the tour.
    pub fn rotated_to(&self, start: usize) -> Tour {
        let mut order = self.order.clone();
        if let Some(pos) = order.iter().position(|&id| id == start) {
            order.rotate_left(pos);
        }
        Tour {
            order,
            cost: self.cost,
        }
    }

    /// Directed edges in visit order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.order.len();
        (0..n).map(move |i| (self.order[i], self.order[(i + 1) % n]))
    }

    /// Sum of arc costs around the tour under any cost function.
    pub fn cost_under<C: ArcCost + ?Sized>(&self, costs: &C) -> i64 {
        if self.order.len() < 2 {
            return 0;
        }
        self.edges().map(|(a, b)| costs.arc(a, b)).sum()
    }

    /// Raw tour cost, cached until the sequence changes.
    pub fn total_cost(&mut self, distances: &DistanceMatrix) -> i64 {
        if let Some(c) = self.cost {
            return c;
        }
        let c = self.cost_under(distances);
        self.cost = Some(c);
        c
    }

    /// Cached raw cost, if still valid.
    pub fn cached_cost(&self) -> Option<i64> {
        self.cost
    }

    /// Reverses the positions `i..=j`.
    pub fn reverse(&mut self, i: usize, j: usize) {
        self.order[i..=j].reverse();
        self.cost = None;
    }

    /// Moves the segment `from..from + len` so that it starts before the
    /// element currently at position `to`.
    ///
    /// `to` must lie outside `from..=from + len`.
    pub fn relocate(&mut self, from: usize, len: usize, to: usize) {
        let segment: Vec<usize> = self.order.drain(from..from + len).collect();
        let insert_at = if to > from { to - len } else { to };
        for (k, id) in segment.into_iter().enumerate() {
            self.order.insert(insert_at + k, id);
        }
        self.cost = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        // 0-1-2-3 on a unit square scaled by 10; diagonals 14
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
    fn test_tour_cost() {
        let dm = square();
        let mut t = Tour::new(vec![0, 1, 2, 3]);
        assert_eq!(t.total_cost(&dm), 40);
        let mut crossed = Tour::new(vec![0, 2, 1, 3]);
        assert_eq!(crossed.total_cost(&dm), 14 + 10 + 14 + 10);
    }

    #[test]
    fn test_rotation_keeps_cost() {
        let dm = square();
        let t = Tour::new(vec![0, 2, 1, 3]);
        let r = t.rotated_to(1);
        assert_eq!(r.order(), &[1, 3, 0, 2]);
        assert_eq!(t.cost_under(&dm), r.cost_under(&dm));
    }

    #[test]
    fn test_permutation() {
        assert!(Tour::new(vec![2, 0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 1]).is_permutation(3));
        assert!(!Tour::new(vec![0, 1, 3]).is_permutation(3));
    }

    #[test]
    fn test_edges_wrap() {
        let t = Tour::new(vec![0, 1, 2]);
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_relocate_forward_and_backward() {
        let mut t = Tour::new(vec![0, 1, 2, 3, 4, 5]);
        t.relocate(1, 2, 5);
        assert_eq!(t.order(), &[0, 3, 4, 1, 2, 5]);

        let mut t = Tour::new(vec![0, 1, 2, 3, 4, 5]);
        t.relocate(4, 2, 1);
        assert_eq!(t.order(), &[0, 4, 5, 1, 2, 3]);

        let mut t = Tour::new(vec![0, 1, 2, 3]);
        t.relocate(1, 1, 4);
        assert_eq!(t.order(), &[0, 2, 3, 1]);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let dm = square();
        let mut t = Tour::new(vec![0, 1, 2, 3]);
        t.total_cost(&dm);
        assert!(t.cached_cost().is_some());
        t.relocate(1, 1, 3);
        assert!(t.cached_cost().is_none());
    }

    #[test]
    fn test_single_location() {
        let dm = square();
        assert_eq!(Tour::new(vec![0]).cost_under(&dm), 0);
    }
}
