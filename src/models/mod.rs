//! Domain model types for traveling salesman instances.
//!
//! Provides the core abstractions: cities with positional ids and
//! coordinates, tours as cyclic permutations of city indices, and solutions
//! pairing a tour with its total distance.

mod city;
mod solution;
mod tour;

pub use city::City;
pub use solution::Solution;
pub use tour::Tour;
