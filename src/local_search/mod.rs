//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — 2-opt edge exchange to a local optimum

mod two_opt;

pub use two_opt::two_opt_improve;
