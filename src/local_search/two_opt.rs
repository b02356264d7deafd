//! 2-opt tour improvement.
//!
//! # Algorithm
//!
//! A 2-opt move removes two non-adjacent edges of the cycle and reconnects
//! it by reversing the tour segment between them: for positions i < j, the
//! edges entering position i and entering position j are replaced by their
//! crossing counterparts, which is the same as reversing positions
//! `[i..j)`. Candidates are scanned in increasing (i, j) order with
//! position 0 pinned; the first strictly improving move found is applied
//! and the scan continues from the updated tour. A full pass with no
//! improving move terminates: the result is a 2-opt local optimum, not
//! necessarily a global one.
//!
//! Each candidate is evaluated as a pure transform — the reversed tour is a
//! new value and the incumbent is left untouched — so intermediate states
//! stay independently inspectable.
//!
//! # Complexity
//!
//! O(n²) candidate pairs per pass, O(n) to evaluate each, multiple passes:
//! O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Applies 2-opt improvement to a tour until no improving move remains.
///
/// Returns the improved tour and its total cyclic distance. The output
/// distance is never greater than the input tour's distance.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// // Diagonal-crossing tour; 2-opt uncrosses it to the perimeter.
/// let (improved, dist) = two_opt_improve(&Tour::new(vec![0, 2, 1, 3]), &dm);
/// assert!((dist - 4.0).abs() < 1e-10);
/// assert!(improved.is_permutation_of(4));
/// ```
pub fn two_opt_improve(tour: &Tour, distances: &DistanceMatrix) -> (Tour, f64) {
    let n = tour.len();
    if n < 4 {
        // No pair of non-adjacent edges exists to exchange.
        let dist = distances.tour_distance(tour);
        return (tour.clone(), dist);
    }

    let mut current = tour.clone();
    let mut current_dist = distances.tour_distance(&current);
    let mut improved = true;

    while improved {
        improved = false;

        // j == i + 1 would reverse a single position, a no-op.
        for i in 1..n - 2 {
            for j in i + 2..n {
                let candidate = current.with_segment_reversed(i, j - 1);
                let candidate_dist = distances.tour_distance(&candidate);
                if candidate_dist < current_dist - 1e-10 {
                    current = candidate;
                    current_dist = candidate_dist;
                    improved = true;
                }
            }
        }
    }

    (current, current_dist)
}
