//! Structural elements module

mod member;
mod node;
mod support;

pub use member::{Member, ReleaseState};
pub use node::Node;
pub use support::Support;
