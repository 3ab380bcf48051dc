//! Load types

mod distributed;
mod node_load;
mod point_load;

use serde::{Deserialize, Serialize};

pub use distributed::UniformLoad;
pub use node_load::NodeLoad;
pub use point_load::MemberPointLoad;

/// Tagged concentrated-load variant carried in the request's point-load list.
///
/// The `kind` discriminator on the wire is `NODE_LOAD` or `MEMBER_POINT_LOAD`;
/// assembly dispatches on the variant exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PointLoad {
    /// Force/moment applied directly to a node (global axes)
    #[serde(rename = "NODE_LOAD")]
    Node(NodeLoad),
    /// Concentrated load along a member span (local axes)
    #[serde(rename = "MEMBER_POINT_LOAD")]
    Member(MemberPointLoad),
}

impl From<NodeLoad> for PointLoad {
    fn from(load: NodeLoad) -> Self {
        Self::Node(load)
    }
}

impl From<MemberPointLoad> for PointLoad {
    fn from(load: MemberPointLoad) -> Self {
        Self::Member(load)
    }
}
