//! Edge penalties and the penalty-augmented cost.

use crate::distance::{ArcCost, DistanceMatrix};

/// Dense per-edge penalty counters, row-major.
///
/// Features are undirected edges: [`PenaltyMatrix::increment`] bumps both
/// directions. Increments saturate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyMatrix {
    data: Vec<u32>,
    size: usize,
}

impl PenaltyMatrix {
    /// Creates an all-zero penalty matrix for `size` locations.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Penalty of the edge between `a` and `b`.
    pub fn get(&self, a: usize, b: usize) -> u32 {
        self.data[a * self.size + b]
    }

    /// Adds one to the penalty of the edge between `a` and `b`.
    pub fn increment(&mut self, a: usize, b: usize) {
        let ab = a * self.size + b;
        let ba = b * self.size + a;
        self.data[ab] = self.data[ab].saturating_add(1);
        if ab != ba {
            self.data[ba] = self.data[ba].saturating_add(1);
        }
    }

    /// Sum of all counters, each undirected edge counted in both directions.
    pub fn total(&self) -> u64 {
        self.data.iter().map(|&p| u64::from(p)).sum()
    }
}

/// Arc cost `d(a, b) + lambda × penalty(a, b)`.
///
/// With `lambda == 0` this is the raw distance.
#[derive(Debug, Clone, Copy)]
pub struct PenalizedCost<'a> {
    distances: &'a DistanceMatrix,
    penalties: &'a PenaltyMatrix,
    lambda: i64,
    symmetric: bool,
}

impl<'a> PenalizedCost<'a> {
    /// Wraps a distance matrix with penalties weighted by `lambda`.
    ///
    /// `symmetric` is the symmetry of `distances`; penalties are always
    /// symmetric.
    pub fn new(
        distances: &'a DistanceMatrix,
        penalties: &'a PenaltyMatrix,
        lambda: i64,
        symmetric: bool,
    ) -> Self {
        Self {
            distances,
            penalties,
            lambda,
            symmetric,
        }
    }

    /// Penalty weight.
    pub fn lambda(&self) -> i64 {
        self.lambda
    }
}

impl ArcCost for PenalizedCost<'_> {
    fn arc(&self, from: usize, to: usize) -> i64 {
        self.distances.get(from, to) + self.lambda * i64::from(self.penalties.get(from, to))
    }

    fn size(&self) -> usize {
        self.distances.size()
    }

    fn is_symmetric(&self) -> bool {
        self.symmetric
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_both_directions() {
        let mut p = PenaltyMatrix::new(3);
        p.increment(0, 2);
        p.increment(2, 0);
        assert_eq!(p.get(0, 2), 2);
        assert_eq!(p.get(2, 0), 2);
        assert_eq!(p.get(0, 1), 0);
        assert_eq!(p.total(), 4);
    }

    #[test]
    fn test_penalized_cost() {
        let dm = DistanceMatrix::from_data(2, vec![0, 10, 10, 0]).expect("valid");
        let mut p = PenaltyMatrix::new(2);
        assert_eq!(PenalizedCost::new(&dm, &p, 5, true).arc(0, 1), 10);
        p.increment(0, 1);
        let costs = PenalizedCost::new(&dm, &p, 5, true);
        assert_eq!(costs.arc(0, 1), 15);
        assert_eq!(costs.arc(1, 0), 15);
        assert_eq!(costs.size(), 2);
        assert_eq!(costs.lambda(), 5);
    }

    #[test]
    fn test_zero_lambda_is_raw() {
        let dm = DistanceMatrix::from_data(2, vec![0, 7, 9, 0]).expect("valid");
        let mut p = PenaltyMatrix::new(2);
        p.increment(0, 1);
        let costs = PenalizedCost::new(&dm, &p, 0, false);
        assert_eq!(costs.arc(0, 1), 7);
        assert_eq!(costs.arc(1, 0), 9);
        assert!(!costs.is_symmetric());
    }
}
