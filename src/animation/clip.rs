use crate::animation::tracks::KeyframeTrack;
use crate::character::BodyPart;
use crate::errors::{PromenadeError, Result};

/// Identifier of one of the built-in animation clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    Idle,
    Walk,
    Run,
    Jump,
}

impl ClipId {
    pub const COUNT: usize = 4;

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walk => 1,
            Self::Run => 2,
            Self::Jump => 3,
        }
    }
}

/// The transform channel a track drives on its body part.
///
/// A clip only moves the channels it defines tracks for; every other
/// channel of the part keeps whatever the previous write left there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
}

/// One keyframe track bound to a (part, channel) target.
#[derive(Debug, Clone)]
pub struct Track {
    pub part: BodyPart,
    pub channel: Channel,
    pub track: KeyframeTrack<f32>,
}

/// A named animation definition: duration, loop flag and per-part tracks.
///
/// Validated once at construction so sampling never has to cope with
/// malformed keyframe data; immutable afterwards.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub id: ClipId,
    /// Clip length in seconds.
    pub duration: f32,
    /// Looping clips wrap elapsed time; non-looping clips clamp at the
    /// duration and hand control back to idle.
    pub looping: bool,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    pub fn new(id: ClipId, duration: f32, looping: bool, tracks: Vec<Track>) -> Result<Self> {
        if duration <= 0.0 {
            return Err(PromenadeError::NonPositiveDuration { clip: id, duration });
        }

        for track in &tracks {
            validate_track(id, track, duration)?;
        }

        Ok(Self {
            id,
            duration,
            looping,
            tracks,
        })
    }
}

fn validate_track(clip: ClipId, track: &Track, duration: f32) -> Result<()> {
    let part = track.part;
    let channel = track.channel;
    let times = &track.track.times;

    if times.is_empty() {
        return Err(PromenadeError::EmptyTrack {
            clip,
            part,
            channel,
        });
    }
    if times.len() != track.track.values.len() {
        return Err(PromenadeError::TrackLengthMismatch {
            clip,
            part,
            channel,
            times: times.len(),
            values: track.track.values.len(),
        });
    }
    if times[0] != 0.0 {
        return Err(PromenadeError::MissingStartKey {
            clip,
            part,
            channel,
            found: times[0],
        });
    }
    for (i, pair) in times.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(PromenadeError::UnsortedKeyframes {
                clip,
                part,
                channel,
                index: i + 1,
            });
        }
    }
    if let Some(&last) = times.last()
        && last > duration
    {
        return Err(PromenadeError::KeyframeBeyondDuration {
            clip,
            part,
            channel,
            time: last,
            duration,
        });
    }

    Ok(())
}
