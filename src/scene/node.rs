use glam::Affine3A;

use crate::scene::NodeKey;
use crate::scene::transform::Transform;

/// A minimal scene node: hierarchy links, a transform and a visibility flag.
///
/// Nodes form a tree through parent/child handles. Only data traversed
/// every frame lives here; everything else belongs to the systems that
/// own the node handles.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name, used for rig part lookup and debugging.
    pub name: String,

    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,

    /// Transform component (hot data accessed every frame).
    pub transform: Transform,

    /// Visibility flag; first-person mode hides the character subtree.
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
