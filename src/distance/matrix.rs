//! Dense distance matrix.

use crate::models::{City, Tour};

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports Euclidean distance computation from city coordinates as well as
/// explicit distance specification. Built once per solve and read-only for
/// its duration.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = City::from_coords(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Total cyclic distance of a tour: consecutive edges plus the closing
    /// edge from the last city back to the first.
    ///
    /// Tours with fewer than two cities have distance 0.
    ///
    /// # Panics
    ///
    /// Panics if the tour contains an index out of bounds.
    pub fn tour_distance(&self, tour: &Tour) -> f64 {
        let order = tour.order();
        if order.len() < 2 {
            return 0.0;
        }
        let mut dist = 0.0;
        for w in order.windows(2) {
            dist += self.get(w[0], w[1]);
        }
        dist += self.get(order[order.len() - 1], order[0]);
        dist
    }

    /// Returns the nearest city to `from` among the given candidates.
    ///
    /// Returns `None` if `candidates` is empty. Ties go to the candidate
    /// listed first.
    pub fn nearest_of(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| {
                self.get(from, a)
                    .partial_cmp(&self.get(from, b))
                    .expect("distance should not be NaN")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_cities() -> Vec<City> {
        City::from_coords(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)])
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert!(dm.is_symmetric(1e-10));
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_cities(&[]);
        assert_eq!(dm.size(), 0);
        assert_eq!(dm.tour_distance(&Tour::empty()), 0.0);
    }

    #[test]
    fn test_tour_distance_includes_closing_edge() {
        // Unit square perimeter.
        let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let dm = DistanceMatrix::from_cities(&cities);
        let d = dm.tour_distance(&Tour::new(vec![0, 1, 2, 3]));
        assert!((d - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_distance_trivial() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.tour_distance(&Tour::new(vec![1])), 0.0);
    }

    #[test]
    fn test_tour_distance_two_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        // 0 -> 1 -> 0, both edges counted.
        let d = dm.tour_distance(&Tour::new(vec![0, 1]));
        assert!((d - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearest_of() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.nearest_of(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_of(0, &[2]), Some(2));
        assert_eq!(dm.nearest_of(0, &[]), None);
    }

    proptest! {
        #[test]
        fn prop_symmetric_with_zero_diagonal(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..20)
        ) {
            let dm = DistanceMatrix::from_cities(&City::from_coords(&coords));
            prop_assert!(dm.is_symmetric(1e-12));
            for i in 0..dm.size() {
                prop_assert_eq!(dm.get(i, i), 0.0);
            }
        }
    }
}
