//! Node element - a point in the structural plane

use serde::{Deserialize, Serialize};

use super::Support;

/// A node in the 2D frame model.
///
/// Carries its planar coordinates and the boundary restraints applied at the
/// joint. Degree-of-freedom numbering follows the order nodes are added to the
/// model: node `i` owns global DOFs `3i` (X translation), `3i + 1`
/// (Y translation) and `3i + 2` (rotation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Boundary restraints at this node
    #[serde(flatten)]
    pub support: Support,
}

impl Node {
    /// Create a new unrestrained node at the given coordinates
    pub fn new(id: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            support: Support::free(),
        }
    }

    /// Set the support condition
    pub fn with_support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
