//! Solution type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// A solved instance: the tour found and its total cyclic distance.
///
/// The distance always includes the closing edge from the last city back to
/// the first, and is recomputed from the final tour rather than carried
/// over from an intermediate stage.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Solution, Tour};
///
/// let s = Solution::new(Tour::new(vec![0, 1, 2]), 4.0);
/// assert_eq!(s.tour().len(), 3);
/// assert_eq!(s.total_distance(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    tour: Tour,
    total_distance: f64,
}

impl Solution {
    /// Creates a solution from a tour and its total distance.
    pub fn new(tour: Tour, total_distance: f64) -> Self {
        Self {
            tour,
            total_distance,
        }
    }

    /// The tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total cyclic distance of the tour.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Consumes the solution, returning the tour and distance.
    pub fn into_parts(self) -> (Tour, f64) {
        (self.tour, self.total_distance)
    }
}
