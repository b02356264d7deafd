//! # u-tsp
//!
//! Traveling salesman optimization library providing an exact solver for
//! small instances and a deterministic multi-start heuristic pipeline for
//! larger ones.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, Solution)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`exact`] — Held-Karp exact dynamic-programming solver
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`local_search`] — Local search operators (2-opt)
//! - [`solver`] — Regime selection and the top-level `solve` entry point
//!
//! ## Quick start
//!
//! ```
//! use u_tsp::models::City;
//! use u_tsp::solver::solve;
//!
//! let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
//! let solution = solve(&cities);
//! assert!(solution.tour().is_permutation_of(4));
//! assert!((solution.total_distance() - 4.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
pub mod exact;
pub mod local_search;
pub mod models;
pub mod solver;
