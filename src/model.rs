//! Frame model - main structural model container

use serde::{Deserialize, Serialize};

use crate::analysis;
use crate::elements::{Member, Node};
use crate::error::{FrameError, FrameResult};
use crate::loads::{MemberPointLoad, NodeLoad, PointLoad, UniformLoad};
use crate::results::{FrameResponse, Solution};

/// The 2D frame model: nodes, members, and loads.
///
/// Nodes and members are kept in insertion order; global DOF numbering is
/// derived from the node order, three DOFs per node. The model is read-only
/// during a solve - every invocation owns its assembled matrices and returns
/// an independent [`Solution`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameModel {
    /// Nodes, in DOF order
    pub nodes: Vec<Node>,
    /// Members
    pub members: Vec<Member>,
    /// Concentrated loads (nodal and member)
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,
    /// Uniform member loads
    #[serde(default)]
    pub uniform_loads: Vec<UniformLoad>,
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a node to the model
    pub fn add_node(&mut self, node: Node) -> FrameResult<()> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(FrameError::DuplicateName(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Add a member to the model
    pub fn add_member(&mut self, member: Member) -> FrameResult<()> {
        if self.node(&member.start_node_id).is_err() {
            return Err(FrameError::NodeNotFound(member.start_node_id));
        }
        if self.node(&member.end_node_id).is_err() {
            return Err(FrameError::NodeNotFound(member.end_node_id));
        }
        if self.members.iter().any(|m| m.id == member.id) {
            return Err(FrameError::DuplicateName(member.id));
        }
        for (property, value) in [
            ("elastic modulus", member.elastic_modulus),
            ("moment of inertia", member.moment_of_inertia),
            ("cross-section area", member.cross_section_area),
        ] {
            if value <= 0.0 {
                return Err(FrameError::InvalidProperty {
                    member: member.id,
                    property,
                    value,
                });
            }
        }
        self.members.push(member);
        Ok(())
    }

    /// Add a load applied directly to a node
    pub fn add_node_load(&mut self, load: NodeLoad) -> FrameResult<()> {
        self.node(&load.target_id)?;
        self.point_loads.push(PointLoad::Node(load));
        Ok(())
    }

    /// Add a concentrated load along a member span
    pub fn add_member_point_load(&mut self, load: MemberPointLoad) -> FrameResult<()> {
        self.member(&load.target_id)?;
        self.point_loads.push(PointLoad::Member(load));
        Ok(())
    }

    /// Add a uniform load over a member span
    pub fn add_uniform_load(&mut self, load: UniformLoad) -> FrameResult<()> {
        self.member(&load.member_id)?;
        self.uniform_loads.push(load);
        Ok(())
    }

    // ========================
    // Lookup Methods
    // ========================

    /// Find a node by id
    pub fn node(&self, id: &str) -> FrameResult<&Node> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| FrameError::NodeNotFound(id.to_string()))
    }

    /// Find a member by id
    pub fn member(&self, id: &str) -> FrameResult<&Member> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| FrameError::MemberNotFound(id.to_string()))
    }

    /// Concentrated span loads targeting a member
    pub(crate) fn member_point_loads<'a>(
        &'a self,
        member_id: &'a str,
    ) -> impl Iterator<Item = &'a MemberPointLoad> {
        self.point_loads.iter().filter_map(move |load| match load {
            PointLoad::Member(pl) if pl.target_id == member_id => Some(pl),
            _ => None,
        })
    }

    /// Uniform loads targeting a member
    pub(crate) fn member_uniform_loads<'a>(
        &'a self,
        member_id: &'a str,
    ) -> impl Iterator<Item = &'a UniformLoad> {
        self.uniform_loads
            .iter()
            .filter(move |load| load.member_id == member_id)
    }

    /// Check that ids are unique and that every load and member references an
    /// existing target.
    ///
    /// Models built through the `add_*` methods always pass; deserialized
    /// models get the same guarantees here before any assembly starts.
    pub(crate) fn validate(&self) -> FrameResult<()> {
        let mut seen = std::collections::HashSet::new();
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(FrameError::DuplicateName(node.id.clone()));
            }
        }
        seen.clear();
        for member in &self.members {
            if !seen.insert(&member.id) {
                return Err(FrameError::DuplicateName(member.id.clone()));
            }
        }
        for member in &self.members {
            self.node(&member.start_node_id)?;
            self.node(&member.end_node_id)?;
        }
        for load in &self.point_loads {
            match load {
                PointLoad::Node(nl) => {
                    self.node(&nl.target_id)?;
                }
                PointLoad::Member(pl) => {
                    self.member(&pl.target_id)?;
                }
            }
        }
        for load in &self.uniform_loads {
            self.member(&load.member_id)?;
        }
        Ok(())
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Run the linear static analysis and return the owned solution
    pub fn solve(&self) -> FrameResult<Solution> {
        analysis::analyze(self)
    }

    /// Run the analysis and convert any failure into the boundary response
    /// (`success = false`, descriptive message, empty arrays)
    pub fn solve_response(&self) -> FrameResponse {
        FrameResponse::from_result(self.solve())
    }
}
