//! Minimal scene graph.
//!
//! - [`Node`]: a named scene node with parent/child links and a transform
//! - [`Transform`]: position, Euler rotation and scale with cached matrices
//! - [`Scene`]: the node arena plus the world-matrix update pass

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use transform::{RotationOrder, Transform};

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a [`Node`] stored in a [`Scene`].
    pub struct NodeKey;
}
