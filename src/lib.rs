//! Frame Solver - a native Rust 2D frame analysis library
//!
//! Linear-elastic analysis of plane frames using the direct stiffness method:
//! - Frame members with rotational end releases (rigid, single-pin, pin-pin)
//! - Nodal loads, member point loads, and uniform member loads
//! - Nodal displacements, support reactions, and per-member force diagrams
//!   (axial, shear, moment, with the moment split into free-moment and
//!   end-moment components)
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! // Fixed-fixed beam, 6 m span
//! model.add_node(Node::new("n1", 0.0, 0.0).with_support(Support::fixed()))?;
//! model.add_node(Node::new("n2", 6.0, 0.0).with_support(Support::fixed()))?;
//! model.add_member(Member::new("m1", "n1", "n2", 200e6, 1e-4, 0.01))?;
//!
//! // 10 kN/m downward over the whole span
//! model.add_uniform_load(UniformLoad::transverse("m1", -10.0))?;
//!
//! let solution = model.solve()?;
//! let beam = solution.member_result("m1").unwrap();
//! assert!((beam.moment_start - 30.0).abs() < 1e-6);
//! # Ok::<(), frame_solver::FrameError>(())
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Member, Node, ReleaseState, Support};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{MemberPointLoad, NodeLoad, PointLoad, UniformLoad};
    pub use crate::model::FrameModel;
    pub use crate::results::{FrameResponse, MemberResult, Solution};
}

pub use error::{FrameError, FrameResult};
