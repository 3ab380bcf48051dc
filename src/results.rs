//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::error::FrameResult;

/// Displacement components at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in global X
    pub dx: f64,
    /// Displacement in global Y
    pub dy: f64,
    /// Rotation, counter-clockwise positive
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from the node's DOF slice [DX, DY, RZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0],
            dy: arr[1],
            rz: arr[2],
        }
    }

    /// Translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction components at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction force in global X
    pub fx: f64,
    /// Reaction force in global Y
    pub fy: f64,
    /// Reaction moment, counter-clockwise positive
    pub mz: f64,
}

impl Reaction {
    /// Create from the node's DOF slice [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }

    /// Force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2)).sqrt()
    }
}

/// Per-member end actions and sampled internal force diagrams.
///
/// End actions are the raw local end forces `[Fx, Fy, M]` at each end. The
/// diagram arrays are sampled at the same stations; at every station the
/// free-moment and end-moment values sum to the total moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResult {
    /// Identifier of the member
    pub member_id: String,
    /// Local axial end force at the start node
    pub axial_start: f64,
    /// Local shear end force at the start node
    pub shear_start: f64,
    /// End moment at the start node
    pub moment_start: f64,
    /// Local axial end force at the end node
    pub axial_end: f64,
    /// Local shear end force at the end node
    pub shear_end: f64,
    /// End moment at the end node
    pub moment_end: f64,
    /// Station positions measured from the start node
    pub stations: Vec<f64>,
    /// Axial force at each station
    pub n_diagram: Vec<f64>,
    /// Shear force at each station
    pub v_diagram: Vec<f64>,
    /// Total bending moment at each station
    pub m_diagram: Vec<f64>,
    /// Free-moment (simple-beam) component at each station
    pub fmd_diagram: Vec<f64>,
    /// End-moment component at each station
    pub emd_diagram: Vec<f64>,
}

/// Full-system results owned by one solve invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Global displacement vector, three entries per node in node order
    pub displacements: Vec<f64>,
    /// Global reaction vector, three entries per node in node order
    pub reactions: Vec<f64>,
    /// Per-member results in member order
    pub member_results: Vec<MemberResult>,
}

impl Solution {
    /// Displacements of the node at the given position in the node list
    pub fn node_displacement(&self, node_index: usize) -> Option<NodeDisplacement> {
        let base = 3 * node_index;
        let slice = self.displacements.get(base..base + 3)?;
        Some(NodeDisplacement::from_array([slice[0], slice[1], slice[2]]))
    }

    /// Reactions at the node at the given position in the node list
    pub fn node_reaction(&self, node_index: usize) -> Option<Reaction> {
        let base = 3 * node_index;
        let slice = self.reactions.get(base..base + 3)?;
        Some(Reaction::from_array([slice[0], slice[1], slice[2]]))
    }

    /// Result record for a member by id
    pub fn member_result(&self, member_id: &str) -> Option<&MemberResult> {
        self.member_results.iter().find(|r| r.member_id == member_id)
    }
}

/// Boundary response envelope.
///
/// Successful solves carry the full result arrays; failures carry a
/// descriptive message and empty arrays, never partial data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResponse {
    /// Whether the analysis completed
    pub success: bool,
    /// Global displacement vector, empty on failure
    pub displacements: Vec<f64>,
    /// Global reaction vector, empty on failure
    pub reactions: Vec<f64>,
    /// Per-member results, empty on failure
    pub member_results: Vec<MemberResult>,
    /// Failure description, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl FrameResponse {
    /// Convert a solve outcome into the boundary envelope
    pub fn from_result(result: FrameResult<Solution>) -> Self {
        match result {
            Ok(solution) => Self {
                success: true,
                displacements: solution.displacements,
                reactions: solution.reactions,
                member_results: solution.member_results,
                error_message: None,
            },
            Err(err) => Self {
                success: false,
                displacements: Vec::new(),
                reactions: Vec::new(),
                member_results: Vec::new(),
                error_message: Some(err.to_string()),
            },
        }
    }
}
