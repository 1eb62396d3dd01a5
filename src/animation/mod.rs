//! Keyframe animation: tracks, clips, the built-in clip library and the
//! animation state machine / pose sampler.

pub mod clip;
pub mod library;
pub mod player;
pub mod tracks;
pub mod values;

pub use clip::{AnimationClip, Channel, ClipId, Track};
pub use library::ClipLibrary;
pub use player::AnimationPlayer;
pub use tracks::{KeyframeCursor, KeyframeTrack};
pub use values::Interpolatable;
