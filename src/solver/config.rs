//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for regime selection in [`solve_with_config`].
///
/// The two size constants are deliberately independent: `exact_threshold`
/// bounds the routine cost of attempting the exact path, while
/// `exact_ceiling` bounds the worst-case memory of the Held-Karp tables.
/// Callers who trust their instance sizes may raise the threshold up to
/// the ceiling.
///
/// [`solve_with_config`]: crate::solver::solve_with_config
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.exact_threshold, 10);
/// assert_eq!(config.exact_ceiling, 15);
/// assert_eq!(config.heuristic_starts, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Largest instance routed to the exact solver by the orchestrator.
    pub exact_threshold: usize,
    /// Largest instance the exact solver accepts before declining.
    pub exact_ceiling: usize,
    /// Number of nearest-neighbor starting cities tried above the
    /// threshold (capped at the instance size).
    pub heuristic_starts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_threshold: 10,
            exact_ceiling: 15,
            heuristic_starts: 5,
        }
    }
}
