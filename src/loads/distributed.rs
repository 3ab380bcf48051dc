//! Distributed loads on members

use serde::{Deserialize, Serialize};

/// A uniform line load over a member's full span.
///
/// Components are in the member's local axes: `magnitude_x` acts along the
/// member (axial per unit length), `magnitude_y` transverse to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformLoad {
    /// Identifier of the loaded member
    pub member_id: String,
    /// Local axial intensity per unit length
    #[serde(default)]
    pub magnitude_x: f64,
    /// Local transverse intensity per unit length
    #[serde(default)]
    pub magnitude_y: f64,
}

impl UniformLoad {
    /// Create a uniform load with both local components
    pub fn new(member_id: &str, magnitude_x: f64, magnitude_y: f64) -> Self {
        Self {
            member_id: member_id.to_string(),
            magnitude_x,
            magnitude_y,
        }
    }

    /// Create a transverse uniform load
    pub fn transverse(member_id: &str, magnitude: f64) -> Self {
        Self::new(member_id, 0.0, magnitude)
    }

    /// Create an axial uniform load
    pub fn axial(member_id: &str, magnitude: f64) -> Self {
        Self::new(member_id, magnitude, 0.0)
    }

    /// Total transverse force over a span of the given length
    pub fn total_transverse(&self, length: f64) -> f64 {
        self.magnitude_y * length
    }
}
