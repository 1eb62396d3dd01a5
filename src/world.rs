//! Top-level simulation world.
//!
//! Owns the scene graph, the character and the follow camera, and runs
//! the fixed per-tick pipeline: intent, physics, animation, hierarchy
//! update, camera.

use glam::{Quat, Vec3};

use crate::character::Character;
use crate::errors::Result;
use crate::input::InputState;
use crate::scene::{Node, NodeKey, RotationOrder, Scene};
use crate::utils::follow_control::{CameraMode, FollowControls};

const CAMERA_START: Vec3 = Vec3::new(0.0, 4.0, 12.0);
const LOOK_HEIGHT: f32 = 0.8;

pub struct World {
    pub scene: Scene,
    pub character: Character,
    pub camera: FollowControls,
    camera_node: NodeKey,
    paused: bool,
}

impl World {
    /// Builds the scene with the character rig and a third-person camera.
    pub fn new() -> Result<Self> {
        let mut scene = Scene::new();
        let character = Character::new(&mut scene)?;

        let mut camera = Node::new("camera");
        camera.transform.position = CAMERA_START;
        camera.transform.rotation_order = RotationOrder::Yxz;
        let camera_node = scene.add_node(camera);

        log::info!(
            "world ready: {} scene nodes, third-person camera",
            scene.node_count()
        );

        Ok(Self {
            scene,
            character,
            camera: FollowControls::new(CameraMode::ThirdPerson),
            camera_node,
            paused: false,
        })
    }

    /// Runs one simulation tick.
    ///
    /// While paused, nothing moves; the embedder keeps calling `tick` so
    /// resuming needs no special handling. The caller is expected to call
    /// [`InputState::end_frame`] afterwards.
    pub fn tick(&mut self, input: &InputState, dt: f32) {
        if self.paused {
            return;
        }

        // Movement intent is camera-relative: pressing forward walks away
        // from the camera regardless of where the character faces.
        let raw = input.move_axes();
        let direction = Quat::from_rotation_y(self.camera.yaw()) * raw;
        self.character.controller.apply_intent(direction, input.run);
        if input.jump {
            self.character.controller.jump();
        }

        self.character.update(&mut self.scene, dt);
        self.scene.update_matrix_world();

        let target = self.character.controller.position;
        if let Some(node) = self.scene.get_node_mut(self.camera_node) {
            self.camera.update(&mut node.transform, target, input, dt);
        }

        // First-person: the body follows the camera's look direction, and
        // the camera angle must win over whatever intent set this tick.
        if self.camera.mode == CameraMode::FirstPerson {
            self.character.controller.yaw = self.camera.yaw();
        }
    }

    /// Switches between first- and third-person view. The character mesh
    /// is hidden in first person so it does not fill the screen.
    pub fn toggle_view(&mut self) {
        self.camera.toggle_mode();
        let first_person = self.camera.mode == CameraMode::FirstPerson;
        if let Some(node) = self.scene.get_node_mut(self.character.rig.root()) {
            node.visible = !first_person;
        }
        log::info!(
            "camera mode: {}",
            if first_person {
                "first-person"
            } else {
                "third-person"
            }
        );
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The point the third-person camera aims at, slightly above the
    /// character's feet.
    #[must_use]
    pub fn look_target(&self) -> Vec3 {
        self.character.controller.position + Vec3::Y * LOOK_HEIGHT
    }

    #[inline]
    #[must_use]
    pub fn camera_node(&self) -> NodeKey {
        self.camera_node
    }
}
