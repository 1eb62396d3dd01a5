use crate::animation::clip::{Channel, ClipId};
use crate::animation::library::ClipLibrary;
use crate::animation::tracks::KeyframeCursor;
use crate::character::rig::CharacterRig;
use crate::scene::Scene;

/// Animation state machine and pose sampler.
///
/// Exactly one clip is active at any time. Transitions are level-triggered:
/// the motion controller states its wish every tick and a wish that differs
/// from the active clip hard-cuts to the new clip's time-0 pose. There is
/// no cross-fade and no blending of simultaneously active clips.
///
/// The one piece of real policy: while [`ClipId::Jump`] is active, all
/// requests are suppressed. The jump clip always plays to completion and
/// then hands control back to idle on its own.
#[derive(Debug)]
pub struct AnimationPlayer {
    active: ClipId,
    /// Elapsed local time within the active clip, always in [0, duration].
    time: f32,
    /// One cursor per track of the active clip.
    cursors: Vec<KeyframeCursor>,
}

impl AnimationPlayer {
    #[must_use]
    pub fn new(library: &ClipLibrary) -> Self {
        Self {
            active: ClipId::Idle,
            time: 0.0,
            cursors: vec![KeyframeCursor::default(); library.get(ClipId::Idle).tracks.len()],
        }
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> ClipId {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Level-triggered transition request.
    ///
    /// Ignored while a jump is in progress, and a no-op when `clip` is
    /// already active (the running clip keeps its elapsed time).
    pub fn request(&mut self, library: &ClipLibrary, clip: ClipId) {
        if self.active == ClipId::Jump {
            return;
        }
        if clip != self.active {
            self.transition(library, clip);
        }
    }

    /// Advances the active clip's local time.
    ///
    /// Looping clips wrap modulo the duration; the non-looping jump clip
    /// clamps at its duration and self-transitions back to idle.
    pub fn advance(&mut self, library: &ClipLibrary, dt: f32) {
        let clip = library.get(self.active);
        self.time += dt;

        if self.time >= clip.duration {
            if clip.looping {
                self.time %= clip.duration;
            } else {
                self.time = clip.duration;
                self.transition(library, ClipId::Idle);
            }
        }
    }

    /// Samples every track of the active clip and writes the values onto
    /// the mapped body-part transforms.
    ///
    /// Tracks whose span does not cover the current time write nothing;
    /// the part holds its previous pose. Channels the active clip has no
    /// track for are likewise untouched.
    pub fn apply_pose(&mut self, library: &ClipLibrary, rig: &CharacterRig, scene: &mut Scene) {
        let clip = library.get(self.active);

        for (track, cursor) in clip.tracks.iter().zip(self.cursors.iter_mut()) {
            let Some(value) = track.track.sample_with_cursor(self.time, cursor) else {
                continue;
            };
            let Some(node) = rig.part(track.part).and_then(|key| scene.get_node_mut(key))
            else {
                continue;
            };

            let transform = &mut node.transform;
            match track.channel {
                Channel::PositionX => transform.position.x = value,
                Channel::PositionY => transform.position.y = value,
                Channel::PositionZ => transform.position.z = value,
                Channel::RotationX => transform.rotation.x = value,
                Channel::RotationY => transform.rotation.y = value,
                Channel::RotationZ => transform.rotation.z = value,
            }
        }
    }

    fn transition(&mut self, library: &ClipLibrary, clip: ClipId) {
        log::debug!("animation transition: {:?} -> {:?}", self.active, clip);
        self.active = clip;
        self.time = 0.0;
        self.cursors = vec![KeyframeCursor::default(); library.get(clip).tracks.len()];
    }
}
