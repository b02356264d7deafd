//! Regime selection and the public solve surface.
//!
//! - [`solve`] / [`solve_with_config`] — Best tour for a city collection
//! - [`tour_distance`] — Cyclic distance of an arbitrary visiting order
//! - [`SolverConfig`] — Exact/heuristic regime thresholds

mod config;
mod orchestrator;

pub use config::SolverConfig;
pub use orchestrator::{solve, solve_with_config, tour_distance};
