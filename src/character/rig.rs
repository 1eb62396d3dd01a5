//! The fixed character skeleton.
//!
//! The rig is a flat hierarchy: one root node with eleven named body-part
//! children, each at a hand-tuned bind pose. Animation clips address parts
//! by [`BodyPart`] and drive individual transform channels; parts a clip
//! does not mention simply keep their last pose.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::scene::{Node, NodeKey, Scene};

/// A named part of the character skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Body,
    Head,
    LeftArm,
    RightArm,
    LeftHand,
    RightHand,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
    Bell,
}

impl BodyPart {
    pub const ALL: [Self; 11] = [
        Self::Body,
        Self::Head,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftHand,
        Self::RightHand,
        Self::LeftLeg,
        Self::RightLeg,
        Self::LeftFoot,
        Self::RightFoot,
        Self::Bell,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Head => "head",
            Self::LeftArm => "leftArm",
            Self::RightArm => "rightArm",
            Self::LeftHand => "leftHand",
            Self::RightHand => "rightHand",
            Self::LeftLeg => "leftLeg",
            Self::RightLeg => "rightLeg",
            Self::LeftFoot => "leftFoot",
            Self::RightFoot => "rightFoot",
            Self::Bell => "bell",
        }
    }

    /// Rest position of the part relative to the character root.
    #[must_use]
    pub fn bind_position(self) -> Vec3 {
        match self {
            Self::Body => Vec3::new(0.0, 0.7, 0.0),
            Self::Head => Vec3::new(0.0, 2.3, 0.0),
            Self::LeftArm => Vec3::new(-1.0, 0.9, 0.0),
            Self::RightArm => Vec3::new(1.0, 0.9, 0.0),
            Self::LeftHand => Vec3::new(-1.4, 0.4, 0.0),
            Self::RightHand => Vec3::new(1.4, 0.4, 0.0),
            Self::LeftLeg => Vec3::new(-0.4, -0.4, 0.0),
            Self::RightLeg => Vec3::new(0.4, -0.4, 0.0),
            Self::LeftFoot => Vec3::new(-0.4, -0.9, 0.15),
            Self::RightFoot => Vec3::new(0.4, -0.9, 0.15),
            Self::Bell => Vec3::new(0.0, 1.5, 1.0),
        }
    }

    /// Rest rotation (Euler, radians) of the part. Only the arms hang at
    /// an angle; everything else binds straight.
    #[must_use]
    pub fn bind_rotation(self) -> Vec3 {
        match self {
            Self::LeftArm => Vec3::new(0.0, 0.0, 0.2),
            Self::RightArm => Vec3::new(0.0, 0.0, -0.2),
            _ => Vec3::ZERO,
        }
    }
}

/// Node mapping for one built character skeleton.
#[derive(Debug)]
pub struct CharacterRig {
    root: NodeKey,
    parts: FxHashMap<BodyPart, NodeKey>,
}

impl CharacterRig {
    /// Creates the root node and all body-part children in `scene`, every
    /// part at its bind pose.
    #[must_use]
    pub fn build(scene: &mut Scene) -> Self {
        let root = scene.add_node(Node::new("character"));

        let mut parts = FxHashMap::default();
        for part in BodyPart::ALL {
            let mut node = Node::new(part.name());
            node.transform.position = part.bind_position();
            node.transform.rotation = part.bind_rotation();

            let key = scene.add_to_parent(node, root);
            parts.insert(part, key);
        }

        Self { root, parts }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Scene node of a body part. All parts exist after [`Self::build`],
    /// so a `None` here means the node was removed behind the rig's back.
    #[inline]
    #[must_use]
    pub fn part(&self, part: BodyPart) -> Option<NodeKey> {
        self.parts.get(&part).copied()
    }
}
