#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod character;
pub mod errors;
pub mod input;
pub mod scene;
pub mod utils;
pub mod world;

pub use animation::{
    AnimationClip, AnimationPlayer, Channel, ClipId, ClipLibrary, Interpolatable, KeyframeCursor,
    KeyframeTrack, Track,
};
pub use character::{BodyPart, Character, CharacterController, CharacterRig};
pub use errors::{PromenadeError, Result};
pub use input::InputState;
pub use scene::{Node, NodeKey, RotationOrder, Scene, Transform};
pub use utils::follow_control::{CameraMode, FollowControls};
pub use utils::time::Timer;
pub use world::World;
