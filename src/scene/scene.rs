use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeKey;
use crate::scene::node::Node;

/// Scene graph container.
///
/// Pure data layer: stores the node arena and the root list, and runs the
/// world-matrix hierarchy pass once per frame. Systems (animation, camera
/// follow, motion) mutate node transforms through handles between passes.
pub struct Scene {
    pub nodes: SlotMap<NodeKey, Node>,
    pub root_nodes: Vec<NodeKey>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Adds a node at the scene root.
    pub fn add_node(&mut self, node: Node) -> NodeKey {
        let key = self.nodes.insert(node);
        self.root_nodes.push(key);
        key
    }

    /// Adds a node as a child of `parent`.
    ///
    /// If the parent handle is stale the node is kept at the root instead
    /// so the data is not lost.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeKey) -> NodeKey {
        let key = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(key);
        } else {
            log::error!("parent node not found during insert; keeping child at root");
            self.root_nodes.push(key);
            return key;
        }
        if let Some(c) = self.nodes.get_mut(key) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }

        key
    }

    #[must_use]
    pub fn get_node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Updates world matrices for the whole scene.
    ///
    /// Iterative traversal with an explicit stack; parents are always
    /// processed before their children, and a subtree is only recomputed
    /// when its local transform or an ancestor actually changed.
    pub fn update_matrix_world(&mut self) {
        let mut stack: Vec<(NodeKey, Affine3A, bool)> = Vec::with_capacity(64);

        for &root in self.root_nodes.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((key, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(key) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let world_needs_update = local_changed || parent_changed;

            if world_needs_update {
                let new_world = parent_world * *node.transform.local_matrix();
                node.transform.set_world_matrix(new_world);
            }

            let current_world = node.transform.world_matrix;
            for i in (0..node.children.len()).rev() {
                stack.push((node.children[i], current_world, world_needs_update));
            }
        }
    }
}
