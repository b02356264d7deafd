//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix and cyclic tour distance
//! evaluation used by every solver component.

mod matrix;

pub use matrix::DistanceMatrix;
