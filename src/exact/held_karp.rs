//! Held-Karp exact dynamic program.
//!
//! # Algorithm
//!
//! States are pairs (visited-set bitmask, last-visited city), with city 0
//! fixed as the start — optimal tours are rotation-invariant, so this loses
//! no generality. From `cost[{0}][0] = 0`, every state with finite cost is
//! relaxed toward every unvisited city. The optimal tour cost is the
//! minimum over all full-mask states of the state cost plus the closing
//! edge back to city 0, and the tour itself is rebuilt by walking
//! predecessor pointers backward.
//!
//! Both tables are flat arrays indexed by `mask * n + last`: dense,
//! cache-friendly, and allocated once up front.
//!
//! # Complexity
//!
//! O(n² · 2ⁿ) time, O(n · 2ⁿ) memory. Tractable only for small n; the
//! solver refuses instances above its ceiling rather than exhaust memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use std::fmt;

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// The exact solver was asked to run on an instance above its ceiling.
///
/// Recoverable: callers fall back to the heuristic pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    /// Number of cities in the rejected instance.
    pub cities: usize,
    /// Largest instance the solver accepts.
    pub ceiling: usize,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instance too large for exact solver: {} cities exceeds ceiling of {}",
            self.cities, self.ceiling
        )
    }
}

impl std::error::Error for CapacityError {}

/// Solves an instance to optimality with the Held-Karp dynamic program.
///
/// Returns the globally optimal tour starting at city 0, or a
/// [`CapacityError`] — checked before any table is allocated — when the
/// instance has more than `ceiling` cities. Ceilings much beyond 20 are
/// not practical: the cost table alone grows as n · 2ⁿ entries.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::exact::held_karp;
///
/// let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = held_karp(&dm, 15).expect("within ceiling");
/// assert!((dm.tour_distance(&tour) - 4.0).abs() < 1e-10);
/// ```
pub fn held_karp(distances: &DistanceMatrix, ceiling: usize) -> Result<Tour, CapacityError> {
    let n = distances.size();
    if n > ceiling {
        return Err(CapacityError { cities: n, ceiling });
    }
    if n == 0 {
        return Ok(Tour::empty());
    }
    if n == 1 {
        return Ok(Tour::new(vec![0]));
    }

    let full = (1usize << n) - 1;
    let mut cost = vec![f64::INFINITY; (full + 1) * n];
    let mut parent = vec![usize::MAX; (full + 1) * n];
    cost[n] = 0.0; // state (mask {0} = 1, last = 0)

    for mask in 1..=full {
        if mask & 1 == 0 {
            // Every partial tour starts at city 0.
            continue;
        }
        for last in 0..n {
            if mask & (1 << last) == 0 {
                continue;
            }
            let c = cost[mask * n + last];
            if !c.is_finite() {
                continue;
            }
            for next in 0..n {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let next_mask = mask | (1 << next);
                let relaxed = c + distances.get(last, next);
                if relaxed < cost[next_mask * n + next] {
                    cost[next_mask * n + next] = relaxed;
                    parent[next_mask * n + next] = last;
                }
            }
        }
    }

    // Close the cycle: best full-mask state plus the edge back to city 0.
    let mut best_last = 1;
    let mut best_total = f64::INFINITY;
    for last in 1..n {
        let total = cost[full * n + last] + distances.get(last, 0);
        if total < best_total {
            best_total = total;
            best_last = last;
        }
    }

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut last = best_last;
    while last != usize::MAX {
        order.push(last);
        let prev = parent[mask * n + last];
        mask &= !(1 << last);
        last = prev;
    }
    order.reverse();

    Ok(Tour::new(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    /// Minimum cyclic distance over every permutation fixing city 0 first.
    fn brute_force_optimum(dm: &DistanceMatrix) -> f64 {
        fn permute(rest: &mut Vec<usize>, prefix: &mut Vec<usize>, dm: &DistanceMatrix, best: &mut f64) {
            if rest.is_empty() {
                let d = dm.tour_distance(&Tour::new(prefix.clone()));
                if d < *best {
                    *best = d;
                }
                return;
            }
            for k in 0..rest.len() {
                let city = rest.remove(k);
                prefix.push(city);
                permute(rest, prefix, dm, best);
                prefix.pop();
                rest.insert(k, city);
            }
        }

        let mut best = f64::INFINITY;
        let mut rest: Vec<usize> = (1..dm.size()).collect();
        permute(&mut rest, &mut vec![0], dm, &mut best);
        best
    }

    #[test]
    fn test_unit_square_perimeter() {
        let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let dm = DistanceMatrix::from_cities(&cities);
        let tour = held_karp(&dm, 15).expect("within ceiling");
        assert!(tour.is_permutation_of(4));
        assert!((dm.tour_distance(&tour) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_collinear_cities() {
        let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let dm = DistanceMatrix::from_cities(&cities);
        let tour = held_karp(&dm, 15).expect("within ceiling");
        assert!((dm.tour_distance(&tour) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_matches_brute_force_up_to_eight() {
        // Fixed scatter, no two points symmetric.
        let coords = [
            (0.0, 0.0),
            (8.1, 1.3),
            (2.7, 6.9),
            (5.5, 3.2),
            (1.9, 9.4),
            (7.3, 7.7),
            (4.1, 0.6),
            (9.6, 5.0),
        ];
        for n in 2..=8 {
            let cities = City::from_coords(&coords[..n]);
            let dm = DistanceMatrix::from_cities(&cities);
            let tour = held_karp(&dm, 15).expect("within ceiling");
            assert!(tour.is_permutation_of(n));
            let expected = brute_force_optimum(&dm);
            assert!(
                (dm.tour_distance(&tour) - expected).abs() < 1e-9,
                "n={}: got {}, brute force {}",
                n,
                dm.tour_distance(&tour),
                expected
            );
        }
    }

    #[test]
    fn test_starts_at_city_zero() {
        let cities = City::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (2.0, 5.0)]);
        let dm = DistanceMatrix::from_cities(&cities);
        let tour = held_karp(&dm, 15).expect("within ceiling");
        assert_eq!(tour.order()[0], 0);
    }

    #[test]
    fn test_rejects_above_ceiling() {
        let coords: Vec<(f64, f64)> = (0..12).map(|i| (i as f64, (i * i) as f64)).collect();
        let dm = DistanceMatrix::from_cities(&City::from_coords(&coords));
        let err = held_karp(&dm, 10).expect_err("over capacity");
        assert_eq!(err, CapacityError { cities: 12, ceiling: 10 });
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn test_trivial_instances() {
        let dm0 = DistanceMatrix::from_cities(&[]);
        assert!(held_karp(&dm0, 15).expect("empty").is_empty());

        let dm1 = DistanceMatrix::from_cities(&City::from_coords(&[(1.0, 1.0)]));
        assert_eq!(held_karp(&dm1, 15).expect("single").order(), &[0]);

        let dm2 = DistanceMatrix::from_cities(&City::from_coords(&[(0.0, 0.0), (3.0, 4.0)]));
        let tour = held_karp(&dm2, 15).expect("pair");
        assert_eq!(tour.order(), &[0, 1]);
        assert!((dm2.tour_distance(&tour) - 10.0).abs() < 1e-10);
    }
}
