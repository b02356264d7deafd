//! Regime selection and the top-level solve entry points.
//!
//! # Strategy
//!
//! The orchestrator builds one distance matrix per invocation, then picks
//! a regime by instance size:
//!
//! - fewer than 2 cities: the trivial tour, distance 0
//! - up to `exact_threshold` cities: the Held-Karp exact solver, falling
//!   back to the heuristic pipeline if it declines
//! - larger: multi-start nearest-neighbor + 2-opt, keeping the best tour
//!   by total distance (ties keep the earlier start)
//!
//! Everything is synchronous, single-threaded, and deterministic for a
//! given input: no randomization anywhere in the pipeline.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::exact::held_karp;
use crate::local_search::two_opt_improve;
use crate::models::{City, Solution, Tour};

use super::SolverConfig;

/// Solves an instance with the default [`SolverConfig`].
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::solver::solve;
///
/// let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let solution = solve(&cities);
/// assert!((solution.total_distance() - 4.0).abs() < 1e-10);
/// ```
pub fn solve(cities: &[City]) -> Solution {
    solve_with_config(cities, &SolverConfig::default())
}

/// Solves an instance, selecting the exact or heuristic regime by size.
///
/// The returned [`Solution`] always holds a valid permutation tour and its
/// exact total distance, recomputed from the final tour rather than
/// carried over from an intermediate stage.
pub fn solve_with_config(cities: &[City], config: &SolverConfig) -> Solution {
    let n = cities.len();
    if n < 2 {
        let tour = if n == 0 {
            Tour::empty()
        } else {
            Tour::new(vec![0])
        };
        return Solution::new(tour, 0.0);
    }

    let distances = DistanceMatrix::from_cities(cities);

    let tour = if n <= config.exact_threshold {
        match held_karp(&distances, config.exact_ceiling) {
            Ok(tour) => tour,
            // Over capacity: recover locally with the heuristic pipeline.
            Err(_) => heuristic_tour(&distances, 0),
        }
    } else {
        best_multi_start(&distances, config.heuristic_starts.min(n))
    };

    let total = distances.tour_distance(&tour);
    Solution::new(tour, total)
}

/// Nearest-neighbor construction from `start` followed by 2-opt.
fn heuristic_tour(distances: &DistanceMatrix, start: usize) -> Tour {
    let initial = nearest_neighbor(distances, start);
    let (improved, _) = two_opt_improve(&initial, distances);
    improved
}

/// Runs the heuristic pipeline from the first `starts` city indices and
/// keeps the best tour by total distance. Strict comparison: ties keep
/// the earliest start.
fn best_multi_start(distances: &DistanceMatrix, starts: usize) -> Tour {
    let mut best: Option<(Tour, f64)> = None;
    for start in 0..starts {
        let initial = nearest_neighbor(distances, start);
        let (tour, dist) = two_opt_improve(&initial, distances);
        let better = match &best {
            Some((_, best_dist)) => dist < *best_dist,
            None => true,
        };
        if better {
            best = Some((tour, dist));
        }
    }
    // starts >= 1 whenever n >= 2
    best.expect("at least one start").0
}

/// Total cyclic distance of an arbitrary visiting order over `cities`.
///
/// The order need not come from a solver; any index sequence is accepted,
/// and orders shorter than 2 have distance 0. Index validity is the
/// caller's responsibility.
///
/// # Panics
///
/// Panics if `order` contains an index out of bounds for `cities`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::solver::tour_distance;
///
/// let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// assert!((tour_distance(&cities, &[0, 1, 2]) - 4.0).abs() < 1e-10);
/// assert!((tour_distance(&cities, &[0, 2, 1]) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_distance(cities: &[City], order: &[usize]) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut dist = 0.0;
    for w in order.windows(2) {
        dist += cities[w[0]].distance_to(&cities[w[1]]);
    }
    dist += cities[order[order.len() - 1]].distance_to(&cities[order[0]]);
    dist
}
