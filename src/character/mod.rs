//! The playable character: rig (fixed skeleton), motion controller and
//! animation playback bundled into one unit.

pub mod controller;
pub mod rig;

pub use controller::CharacterController;
pub use rig::{BodyPart, CharacterRig};

use glam::Vec3;

use crate::animation::{AnimationPlayer, ClipLibrary};
use crate::errors::Result;
use crate::scene::Scene;

/// A rigged, animated character living in a [`Scene`].
pub struct Character {
    pub rig: CharacterRig,
    pub controller: CharacterController,
    pub player: AnimationPlayer,
    pub clips: ClipLibrary,
}

impl Character {
    /// Builds the rig in `scene` and loads the standard clip library.
    pub fn new(scene: &mut Scene) -> Result<Self> {
        let clips = ClipLibrary::standard()?;
        let rig = CharacterRig::build(scene);
        let player = AnimationPlayer::new(&clips);

        Ok(Self {
            rig,
            controller: CharacterController::new(Vec3::ZERO),
            player,
            clips,
        })
    }

    /// Runs one simulation tick: physics first, then the animation state
    /// machine, then pose sampling onto the rig, then the root transform
    /// sync. Intent must already have been applied to the controller.
    pub fn update(&mut self, scene: &mut Scene, dt: f32) {
        self.controller.tick(dt);

        self.player.request(&self.clips, self.controller.requested_clip());
        self.player.advance(&self.clips, dt);
        self.player.apply_pose(&self.clips, &self.rig, scene);

        if let Some(node) = scene.get_node_mut(self.rig.root()) {
            node.transform.position = self.controller.position;
            node.transform.rotation.y = self.controller.yaw;
        }
    }
}
