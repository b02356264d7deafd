//! Tour type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of city indices interpreted as a cycle.
///
/// A valid tour over n cities is a permutation of `[0, n)`: every index
/// appears exactly once, and the successor of the last entry is the first.
/// Tours are replaced rather than mutated across algorithm stages, so each
/// intermediate result stays independently inspectable.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3]);
/// assert_eq!(tour.len(), 4);
/// assert!(tour.is_permutation_of(4));
/// assert!(!tour.is_permutation_of(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Creates an empty tour.
    pub fn empty() -> Self {
        Self { order: Vec::new() }
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of cities in this tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if this tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if this tour is a permutation of `[0, n)`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Returns a new tour with the segment `[i..=j]` reversed.
    ///
    /// The input tour is left untouched. This is the reconnection step of a
    /// 2-opt move: the edges entering position `i` and leaving position `j`
    /// are replaced by their crossing counterparts.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j` is out of bounds.
    pub fn with_segment_reversed(&self, i: usize, j: usize) -> Self {
        let mut order = self.order.clone();
        order[i..=j].reverse();
        Self { order }
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}
