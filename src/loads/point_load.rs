//! Concentrated loads on members

use serde::{Deserialize, Serialize};

/// A concentrated load applied along a member's span.
///
/// Components are in the member's local axes: `magnitude_x` acts along the
/// member (axial), `magnitude_y` transverse to it. `position` is the distance
/// from the start node; when absent the load is placed at midspan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPointLoad {
    /// Identifier of the loaded member
    pub target_id: String,
    /// Local axial component
    #[serde(default)]
    pub magnitude_x: f64,
    /// Local transverse component
    #[serde(default)]
    pub magnitude_y: f64,
    /// Distance from the start node; defaults to midspan
    #[serde(default)]
    pub position: Option<f64>,
}

impl MemberPointLoad {
    /// Create a point load with both local components
    pub fn new(target_id: &str, magnitude_x: f64, magnitude_y: f64) -> Self {
        Self {
            target_id: target_id.to_string(),
            magnitude_x,
            magnitude_y,
            position: None,
        }
    }

    /// Create a transverse point load at midspan
    pub fn transverse(target_id: &str, magnitude: f64) -> Self {
        Self::new(target_id, 0.0, magnitude)
    }

    /// Create an axial point load at midspan
    pub fn axial(target_id: &str, magnitude: f64) -> Self {
        Self::new(target_id, magnitude, 0.0)
    }

    /// Place the load at a distance from the start node
    pub fn at(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }

    /// Position resolved against the member length
    pub fn position_on(&self, length: f64) -> f64 {
        self.position.unwrap_or(length / 2.0)
    }
}
