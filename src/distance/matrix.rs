//! Dense integer distance matrix.

use super::{ArcCost, DistanceModel};
use crate::models::{Location, LocationRegistry};

/// A dense n×n integer cost matrix stored in row-major order.
///
/// Both directions are stored, so asymmetric costs are representable even
/// though the great-circle model always produces a symmetric matrix.
///
/// # Examples
///
/// ```
/// use tour_route::distance::{DistanceMatrix, DistanceModel};
/// use tour_route::models::Location;
///
/// let locations = vec![
///     Location::depot("D", 0.0, 0.0),
///     Location::new("A", 1.0, 0.0),
///     Location::new("B", 2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, &DistanceModel::new(1.0));
/// assert_eq!(dm.get(0, 0), 0);
/// assert_eq!(dm.get(0, 1), 111_194);
/// assert!(dm.is_symmetric());
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes the matrix from coordinates under the given model.
    pub fn from_locations(locations: &[Location], model: &DistanceModel) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = model.cost(&locations[i], &locations[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix for every location in a registry.
    pub fn from_registry(registry: &LocationRegistry, model: &DistanceModel) -> Self {
        Self::from_locations(registry.locations(), model)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or any
    /// entry is negative.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size || data.iter().any(|&d| d < 0) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Pairs `(i, j)` with `i < j` joined by a zero-cost arc in either
    /// direction.
    ///
    /// Catches identical coordinates as well as distinct points that
    /// truncate to zero units.
    pub fn zero_cost_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) == 0 || self.get(j, i) == 0 {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Returns the cheapest target from `from` among the candidates.
    ///
    /// Ties go to the lowest id. Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| (self.get(from, c), c))
    }
}

impl ArcCost for DistanceMatrix {
    fn arc(&self, from: usize, to: usize) -> i64 {
        self.get(from, to)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn is_symmetric(&self) -> bool {
        DistanceMatrix::is_symmetric(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::depot("D", 40.8190, 29.3005),
            Location::new("A", 39.9708, 32.6227),
            Location::new("B", 38.4362, 27.1428),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), &DistanceModel::default());
        assert_eq!(dm.size(), 3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0);
            for j in 0..3 {
                if i != j {
                    assert!(dm.get(i, j) > 0);
                }
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations(), &DistanceModel::default());
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
        assert!(DistanceMatrix::from_data(2, vec![0, -1, 1, 0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42);
        assert_eq!(dm.get(0, 1), 42);
        assert_eq!(dm.get(1, 0), 0);
    }

    #[test]
    fn test_nearest_neighbor_tie_goes_low() {
        let dm = DistanceMatrix::from_data(3, vec![0, 7, 7, 7, 0, 1, 7, 1, 0]).expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(1, &[0, 2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_zero_cost_pairs() {
        let mut locations = sample_locations();
        locations.push(Location::new("A again", 39.9708, 32.6227));
        // A millionth of a degree is about 11 cm, under one metre of road
        locations.push(Location::new("Near B", 38.436201, 27.1428));
        let dm = DistanceMatrix::from_locations(&locations, &DistanceModel::default());
        assert_eq!(dm.zero_cost_pairs(), vec![(1, 3), (2, 4)]);

        let one_way = DistanceMatrix::from_data(2, vec![0, 0, 4, 0]).expect("valid");
        assert_eq!(one_way.zero_cost_pairs(), vec![(0, 1)]);
        assert!(DistanceMatrix::from_locations(&sample_locations(), &DistanceModel::default())
            .zero_cost_pairs()
            .is_empty());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10);
        dm.set(1, 0, 15);
        assert!(!dm.is_symmetric());
    }

    #[test]
    fn test_scale_is_metres() {
        let model = DistanceModel::new(1.0);
        let locs = vec![Location::depot("D", 0.0, 0.0), Location::new("A", 1.0, 0.0)];
        let dm = DistanceMatrix::from_locations(&locs, &model);
        assert!((model.to_km(dm.get(0, 1)) - 111.194).abs() < 1e-9);
    }
}
