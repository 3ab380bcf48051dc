//! Node loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A load applied directly to a node, in global coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLoad {
    /// Identifier of the loaded node
    pub target_id: String,
    /// Force in global X
    #[serde(default)]
    pub magnitude_x: f64,
    /// Force in global Y
    #[serde(default)]
    pub magnitude_y: f64,
    /// Concentrated moment, counter-clockwise positive
    #[serde(default)]
    pub moment: f64,
}

impl NodeLoad {
    /// Create a node load with all components
    pub fn new(target_id: &str, magnitude_x: f64, magnitude_y: f64, moment: f64) -> Self {
        Self {
            target_id: target_id.to_string(),
            magnitude_x,
            magnitude_y,
            moment,
        }
    }

    /// Create a horizontal force
    pub fn fx(target_id: &str, value: f64) -> Self {
        Self::new(target_id, value, 0.0, 0.0)
    }

    /// Create a vertical force
    pub fn fy(target_id: &str, value: f64) -> Self {
        Self::new(target_id, 0.0, value, 0.0)
    }

    /// Create a concentrated moment
    pub fn moment(target_id: &str, value: f64) -> Self {
        Self::new(target_id, 0.0, 0.0, value)
    }

    /// Components in DOF order [FX, FY, M]
    pub fn as_array(&self) -> [f64; 3] {
        [self.magnitude_x, self.magnitude_y, self.moment]
    }
}
