//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The simulation core itself is total over well-formed input: motion
//! integration, state transitions and pose sampling never fail. The one
//! place errors arise is clip construction, where keyframe data is
//! validated once at load time so that sampling can stay infallible.
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, PromenadeError>`.

use thiserror::Error;

use crate::animation::{Channel, ClipId};
use crate::character::BodyPart;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum PromenadeError {
    // ========================================================================
    // Clip Validation Errors
    // ========================================================================
    /// A clip declared a non-positive duration.
    #[error("clip {clip:?}: duration must be positive (found {duration})")]
    NonPositiveDuration {
        /// The offending clip
        clip: ClipId,
        /// The declared duration in seconds
        duration: f32,
    },

    /// A track carried no keyframes at all.
    #[error("clip {clip:?}, {part:?}/{channel:?}: track has no keyframes")]
    EmptyTrack {
        clip: ClipId,
        part: BodyPart,
        channel: Channel,
    },

    /// A track's time and value arrays disagree in length.
    #[error(
        "clip {clip:?}, {part:?}/{channel:?}: {times} keyframe times but {values} values"
    )]
    TrackLengthMismatch {
        clip: ClipId,
        part: BodyPart,
        channel: Channel,
        times: usize,
        values: usize,
    },

    /// A track's first keyframe does not sit at time 0.
    #[error(
        "clip {clip:?}, {part:?}/{channel:?}: first keyframe must be at time 0 (found {found})"
    )]
    MissingStartKey {
        clip: ClipId,
        part: BodyPart,
        channel: Channel,
        /// Time of the first keyframe actually present
        found: f32,
    },

    /// Keyframe times are not strictly increasing.
    #[error(
        "clip {clip:?}, {part:?}/{channel:?}: keyframe times must be strictly increasing (at index {index})"
    )]
    UnsortedKeyframes {
        clip: ClipId,
        part: BodyPart,
        channel: Channel,
        /// Index of the first keyframe that violates the ordering
        index: usize,
    },

    /// A keyframe lies beyond the clip's declared duration.
    #[error(
        "clip {clip:?}, {part:?}/{channel:?}: keyframe at {time} exceeds clip duration {duration}"
    )]
    KeyframeBeyondDuration {
        clip: ClipId,
        part: BodyPart,
        channel: Channel,
        time: f32,
        duration: f32,
    },
}

/// Alias for `Result<T, PromenadeError>`.
pub type Result<T> = std::result::Result<T, PromenadeError>;
