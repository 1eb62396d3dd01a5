//! The built-in clip library.
//!
//! Four hand-authored clips drive the character rig: a breathing idle, a
//! walk and a run cycle, and a one-shot jump. Keyframe data is expressed
//! as per-axis scalar tracks; axes a clip does not list are simply not
//! driven by it.

use crate::animation::clip::{AnimationClip, Channel, ClipId, Track};
use crate::animation::tracks::KeyframeTrack;
use crate::character::BodyPart;
use crate::errors::Result;

/// Immutable set of all clips, indexed by [`ClipId`].
///
/// Built once at character construction; every track is validated during
/// the build so playback code can stay infallible.
#[derive(Debug, Clone)]
pub struct ClipLibrary {
    clips: [AnimationClip; ClipId::COUNT],
}

impl ClipLibrary {
    /// Builds the standard idle/walk/run/jump set.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            clips: [idle()?, walk()?, run()?, jump()?],
        })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: ClipId) -> &AnimationClip {
        &self.clips[id.index()]
    }
}

fn track(part: BodyPart, channel: Channel, keys: &[(f32, f32)]) -> Track {
    let times = keys.iter().map(|k| k.0).collect();
    let values = keys.iter().map(|k| k.1).collect();
    Track {
        part,
        channel,
        track: KeyframeTrack::new(times, values),
    }
}

/// Slow breathing sway with a small head turn.
fn idle() -> Result<AnimationClip> {
    use BodyPart::{Bell, Body, Head, LeftArm, RightArm};
    use Channel::{PositionY, RotationX, RotationY, RotationZ};

    AnimationClip::new(
        ClipId::Idle,
        3.0,
        true,
        vec![
            track(Body, PositionY, &[(0.0, 0.7), (1.5, 0.75), (3.0, 0.7)]),
            track(Body, RotationY, &[(0.0, 0.0), (1.5, 0.05), (3.0, 0.0)]),
            track(
                Head,
                RotationX,
                &[(0.0, 0.0), (1.0, 0.02), (2.0, 0.02), (3.0, 0.0)],
            ),
            track(
                Head,
                RotationY,
                &[(0.0, 0.0), (1.0, 0.1), (2.0, -0.1), (3.0, 0.0)],
            ),
            track(Bell, RotationX, &[(0.0, 0.0), (1.5, 0.05), (3.0, 0.0)]),
            track(LeftArm, RotationX, &[(0.0, 0.0), (1.5, 0.1), (3.0, 0.0)]),
            track(LeftArm, RotationZ, &[(0.0, 0.35), (1.5, 0.4), (3.0, 0.35)]),
            track(RightArm, RotationX, &[(0.0, 0.0), (1.5, 0.1), (3.0, 0.0)]),
            track(
                RightArm,
                RotationZ,
                &[(0.0, -0.35), (1.5, -0.4), (3.0, -0.35)],
            ),
        ],
    )
}

/// One-second stride: opposing arm/leg swings with a light body bob.
fn walk() -> Result<AnimationClip> {
    use BodyPart::{Body, LeftArm, LeftLeg, RightArm, RightLeg};
    use Channel::{PositionY, RotationX, RotationZ};

    AnimationClip::new(
        ClipId::Walk,
        1.0,
        true,
        vec![
            track(LeftArm, RotationX, &[(0.0, 0.4), (0.5, -0.4), (1.0, 0.4)]),
            track(LeftArm, RotationZ, &[(0.0, 0.35), (0.5, 0.35), (1.0, 0.35)]),
            track(RightArm, RotationX, &[(0.0, -0.4), (0.5, 0.4), (1.0, -0.4)]),
            track(
                RightArm,
                RotationZ,
                &[(0.0, -0.35), (0.5, -0.35), (1.0, -0.35)],
            ),
            track(LeftLeg, RotationX, &[(0.0, 0.3), (0.5, -0.3), (1.0, 0.3)]),
            track(RightLeg, RotationX, &[(0.0, -0.3), (0.5, 0.3), (1.0, -0.3)]),
            track(
                Body,
                PositionY,
                &[
                    (0.0, 0.7),
                    (0.25, 0.75),
                    (0.5, 0.7),
                    (0.75, 0.75),
                    (1.0, 0.7),
                ],
            ),
        ],
    )
}

/// Faster, wider stride with body roll and a swinging bell.
fn run() -> Result<AnimationClip> {
    use BodyPart::{Bell, Body, LeftArm, LeftLeg, RightArm, RightLeg};
    use Channel::{PositionY, RotationX, RotationZ};

    AnimationClip::new(
        ClipId::Run,
        0.6,
        true,
        vec![
            track(LeftArm, RotationX, &[(0.0, 0.8), (0.3, -0.8), (0.6, 0.8)]),
            track(LeftArm, RotationZ, &[(0.0, 0.3), (0.3, 0.3), (0.6, 0.3)]),
            track(RightArm, RotationX, &[(0.0, -0.8), (0.3, 0.8), (0.6, -0.8)]),
            track(RightArm, RotationZ, &[(0.0, -0.3), (0.3, -0.3), (0.6, -0.3)]),
            track(LeftLeg, RotationX, &[(0.0, 0.6), (0.3, -0.6), (0.6, 0.6)]),
            track(RightLeg, RotationX, &[(0.0, -0.6), (0.3, 0.6), (0.6, -0.6)]),
            track(
                Body,
                PositionY,
                &[(0.0, 0.6), (0.15, 0.8), (0.3, 0.6), (0.45, 0.8), (0.6, 0.6)],
            ),
            track(
                Body,
                RotationZ,
                &[(0.0, 0.1), (0.15, 0.0), (0.3, -0.1), (0.45, 0.0), (0.6, 0.1)],
            ),
            track(Bell, RotationX, &[(0.0, 0.1), (0.3, -0.1), (0.6, 0.1)]),
        ],
    )
}

/// One-shot crouch, launch and landing recovery.
fn jump() -> Result<AnimationClip> {
    use BodyPart::{Bell, Body, LeftArm, LeftLeg, RightArm, RightLeg};
    use Channel::{PositionY, RotationX, RotationZ};

    AnimationClip::new(
        ClipId::Jump,
        0.8,
        false,
        vec![
            track(
                Body,
                PositionY,
                &[(0.0, 0.6), (0.2, 0.8), (0.4, 1.2), (0.6, 0.8), (0.8, 0.6)],
            ),
            track(
                Body,
                RotationX,
                &[(0.0, 0.0), (0.2, -0.2), (0.4, 0.0), (0.6, 0.1), (0.8, 0.0)],
            ),
            track(LeftArm, RotationX, &[(0.0, 0.0), (0.2, -1.2), (0.8, 0.0)]),
            track(LeftArm, RotationZ, &[(0.0, 0.3), (0.2, 0.8), (0.8, 0.3)]),
            track(RightArm, RotationX, &[(0.0, 0.0), (0.2, -1.2), (0.8, 0.0)]),
            track(RightArm, RotationZ, &[(0.0, -0.3), (0.2, -0.8), (0.8, -0.3)]),
            track(
                LeftLeg,
                RotationX,
                &[(0.0, 0.0), (0.2, -0.5), (0.4, -0.8), (0.8, 0.0)],
            ),
            track(
                RightLeg,
                RotationX,
                &[(0.0, 0.0), (0.2, -0.5), (0.4, -0.8), (0.8, 0.0)],
            ),
            track(
                Bell,
                RotationX,
                &[(0.0, 0.0), (0.2, -0.3), (0.4, 0.2), (0.8, 0.0)],
            ),
        ],
    )
}
