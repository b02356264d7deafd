//! City type.

use serde::{Deserialize, Serialize};

/// A city in a traveling salesman instance.
///
/// Each city carries a stable identifier equal to its position in the input
/// sequence, plus 2-D coordinates. Cities are immutable once constructed.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let c = City::new(1, 3.0, 4.0);
/// assert_eq!(c.id(), 1);
/// assert!((c.distance_to(&City::new(0, 0.0, 0.0)) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Creates cities from coordinate pairs, assigning ids by position.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::City;
    ///
    /// let cities = City::from_coords(&[(0.0, 0.0), (1.0, 0.0)]);
    /// assert_eq!(cities.len(), 2);
    /// assert_eq!(cities[1].id(), 1);
    /// ```
    pub fn from_coords(coords: &[(f64, f64)]) -> Vec<Self> {
        coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Self::new(id, x, y))
            .collect()
    }

    /// City ID (position in the input sequence).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
