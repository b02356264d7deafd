//! Exact solvers for small instances.
//!
//! - [`held_karp`] — Held-Karp bitmask dynamic program, O(n²·2ⁿ)

mod held_karp;

pub use held_karp::{held_karp, CapacityError};
