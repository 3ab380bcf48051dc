//! Member element - 2D frame element (beam/column)

use serde::{Deserialize, Serialize};

/// Rotational end-release configuration of a member.
///
/// A pinned end transmits no bending moment; the local stiffness matrix and
/// the fixed-end actions are built from a separate closed form for each state
/// rather than by masking the rigid-rigid matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseState {
    /// Both ends moment-connected
    RigidRigid,
    /// Start end pinned, end rigid
    PinnedRigid,
    /// Start rigid, end pinned
    RigidPinned,
    /// Both ends pinned (axial-only member)
    PinnedPinned,
}

impl ReleaseState {
    /// Derive the state from the two release flags
    pub fn from_flags(release_start: bool, release_end: bool) -> Self {
        match (release_start, release_end) {
            (false, false) => Self::RigidRigid,
            (true, false) => Self::PinnedRigid,
            (false, true) => Self::RigidPinned,
            (true, true) => Self::PinnedPinned,
        }
    }
}

/// A 2D frame member connecting two nodes.
///
/// Section and material properties live on the member itself. The
/// `magnitude_x`/`magnitude_y` components of loads applied to a member are
/// interpreted in the member's local axes: local x runs from the start node to
/// the end node, local y is perpendicular to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier
    pub id: String,
    /// Identifier of the start node
    pub start_node_id: String,
    /// Identifier of the end node
    pub end_node_id: String,
    /// Elastic modulus E
    pub elastic_modulus: f64,
    /// Second moment of area I
    pub moment_of_inertia: f64,
    /// Cross-sectional area A
    pub cross_section_area: f64,
    /// Moment release at the start node
    #[serde(default)]
    pub release_start: bool,
    /// Moment release at the end node
    #[serde(default)]
    pub release_end: bool,
}

impl Member {
    /// Create a new rigid-rigid member
    pub fn new(id: &str, start_node_id: &str, end_node_id: &str, e: f64, i: f64, a: f64) -> Self {
        Self {
            id: id.to_string(),
            start_node_id: start_node_id.to_string(),
            end_node_id: end_node_id.to_string(),
            elastic_modulus: e,
            moment_of_inertia: i,
            cross_section_area: a,
            release_start: false,
            release_end: false,
        }
    }

    /// Set the end releases
    pub fn with_releases(mut self, release_start: bool, release_end: bool) -> Self {
        self.release_start = release_start;
        self.release_end = release_end;
        self
    }

    /// Release the moment at the start node
    pub fn pin_start(self) -> Self {
        let end = self.release_end;
        self.with_releases(true, end)
    }

    /// Release the moment at the end node
    pub fn pin_end(self) -> Self {
        let start = self.release_start;
        self.with_releases(start, true)
    }

    /// The member's release configuration
    pub fn release_state(&self) -> ReleaseState {
        ReleaseState::from_flags(self.release_start, self.release_end)
    }
}
