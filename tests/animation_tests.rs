//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear sampling and out-of-span behavior
//! - KeyframeCursor O(1) optimization vs. stateless sampling
//! - AnimationClip construction validation
//! - ClipLibrary keyframe spot checks
//! - AnimationPlayer state machine (loop wrap, jump suppression)

use promenade::animation::clip::{AnimationClip, Channel, ClipId, Track};
use promenade::animation::library::ClipLibrary;
use promenade::animation::player::AnimationPlayer;
use promenade::animation::tracks::{KeyframeCursor, KeyframeTrack};
use promenade::errors::PromenadeError;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn f32_track(keys: &[(f32, f32)]) -> KeyframeTrack<f32> {
    KeyframeTrack::new(
        keys.iter().map(|k| k.0).collect(),
        keys.iter().map(|k| k.1).collect(),
    )
}

// ============================================================================
// KeyframeTrack: Linear Sampling
// ============================================================================

#[test]
fn track_midpoint_interpolates_linearly() {
    let track = f32_track(&[(0.0, 0.0), (1.0, 10.0)]);
    let val = track.sample(0.5);
    assert!(approx(val.unwrap(), 5.0), "Expected 5.0, got {val:?}");
}

#[test]
fn track_exact_keyframe_returns_stored_value() {
    let track = f32_track(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
    assert!(approx(track.sample(0.0).unwrap(), 0.0));
    assert!(approx(track.sample(1.0).unwrap(), 10.0));
    assert!(approx(track.sample(2.0).unwrap(), 20.0));
}

#[test]
fn track_outside_span_is_noop() {
    let track = f32_track(&[(0.5, 1.0), (1.0, 2.0)]);

    // Before the first key and after the last key the track writes
    // nothing at all; the driven value holds.
    assert_eq!(track.sample(0.25), None);
    assert_eq!(track.sample(1.5), None);
    assert!(approx(track.sample(0.5).unwrap(), 1.0));
    assert!(approx(track.sample(1.0).unwrap(), 2.0));
}

#[test]
fn track_single_keyframe_samples_only_at_its_time() {
    let track = f32_track(&[(0.5, 7.0)]);
    assert_eq!(track.sample(0.0), None);
    assert_eq!(track.sample(1.0), None);
    assert!(approx(track.sample(0.5).unwrap(), 7.0));
}

#[test]
fn track_uneven_segments_interpolate_per_segment() {
    let track = f32_track(&[(0.0, 0.0), (0.2, 1.0), (1.0, 5.0)]);
    assert!(approx(track.sample(0.1).unwrap(), 0.5));
    assert!(approx(track.sample(0.6).unwrap(), 3.0));
}

// ============================================================================
// KeyframeCursor: Sequential Optimization
// ============================================================================

#[test]
fn cursor_matches_stateless_sampling_forward() {
    let track = f32_track(&[(0.0, 0.0), (0.5, 5.0), (1.0, 2.0), (1.5, 8.0), (2.0, 0.0)]);
    let mut cursor = KeyframeCursor::default();

    let mut t = 0.0;
    while t <= 2.0 {
        let with_cursor = track.sample_with_cursor(t, &mut cursor);
        let stateless = track.sample(t);
        match (with_cursor, stateless) {
            (Some(a), Some(b)) => assert!(approx(a, b), "mismatch at t={t}: {a} vs {b}"),
            (a, b) => panic!("mismatch at t={t}: {a:?} vs {b:?}"),
        }
        t += 0.05;
    }
}

#[test]
fn cursor_recovers_after_loop_reset() {
    let track = f32_track(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0), (3.0, 30.0)]);
    let mut cursor = KeyframeCursor::default();

    // Play to the end, then wrap to the start like a looping clip.
    assert!(approx(track.sample_with_cursor(2.9, &mut cursor).unwrap(), 29.0));
    assert!(approx(track.sample_with_cursor(0.1, &mut cursor).unwrap(), 1.0));
}

#[test]
fn cursor_recovers_after_large_jump() {
    let times: Vec<f32> = (0..32).map(|i| i as f32).collect();
    let values: Vec<f32> = (0..32).map(|i| (i * 10) as f32).collect();
    let track = KeyframeTrack::new(times, values);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor).unwrap(), 5.0));
    // Far beyond the linear scan window: binary search fallback.
    assert!(approx(
        track.sample_with_cursor(28.5, &mut cursor).unwrap(),
        285.0
    ));
    assert!(approx(track.sample_with_cursor(29.0, &mut cursor).unwrap(), 290.0));
}

// ============================================================================
// AnimationClip: Validation
// ============================================================================

fn bare_track(keys: &[(f32, f32)]) -> Track {
    Track {
        part: promenade::BodyPart::Body,
        channel: Channel::PositionY,
        track: f32_track(keys),
    }
}

#[test]
fn clip_rejects_non_positive_duration() {
    let err = AnimationClip::new(ClipId::Idle, 0.0, true, vec![]).unwrap_err();
    assert!(matches!(err, PromenadeError::NonPositiveDuration { .. }));
}

#[test]
fn clip_rejects_empty_track() {
    let err = AnimationClip::new(ClipId::Idle, 1.0, true, vec![bare_track(&[])]).unwrap_err();
    assert!(matches!(err, PromenadeError::EmptyTrack { .. }));
}

#[test]
fn clip_rejects_length_mismatch() {
    let track = Track {
        part: promenade::BodyPart::Body,
        channel: Channel::PositionY,
        track: KeyframeTrack::new(vec![0.0, 1.0], vec![0.0]),
    };
    let err = AnimationClip::new(ClipId::Idle, 1.0, true, vec![track]).unwrap_err();
    assert!(matches!(err, PromenadeError::TrackLengthMismatch { .. }));
}

#[test]
fn clip_rejects_missing_start_key() {
    let err =
        AnimationClip::new(ClipId::Idle, 1.0, true, vec![bare_track(&[(0.5, 1.0)])]).unwrap_err();
    assert!(matches!(err, PromenadeError::MissingStartKey { .. }));
}

#[test]
fn clip_rejects_unsorted_keyframes() {
    let err = AnimationClip::new(
        ClipId::Idle,
        2.0,
        true,
        vec![bare_track(&[(0.0, 0.0), (1.0, 1.0), (0.5, 2.0)])],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PromenadeError::UnsortedKeyframes { index: 2, .. }
    ));
}

#[test]
fn clip_rejects_keyframe_beyond_duration() {
    let err = AnimationClip::new(
        ClipId::Idle,
        1.0,
        true,
        vec![bare_track(&[(0.0, 0.0), (1.5, 1.0)])],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        PromenadeError::KeyframeBeyondDuration { .. }
    ));
}

// ============================================================================
// ClipLibrary: Built-in Clips
// ============================================================================

#[test]
fn library_builds_without_error() {
    let library = ClipLibrary::standard().unwrap();
    assert!(library.get(ClipId::Idle).looping);
    assert!(library.get(ClipId::Walk).looping);
    assert!(library.get(ClipId::Run).looping);
    assert!(!library.get(ClipId::Jump).looping);
}

#[test]
fn idle_body_sway_midpoint() {
    let library = ClipLibrary::standard().unwrap();
    let clip = library.get(ClipId::Idle);

    // Body rotation.y keys are 0 -> 0.05 over 1.5s; halfway gives 0.025.
    let track = clip
        .tracks
        .iter()
        .find(|t| t.part == promenade::BodyPart::Body && t.channel == Channel::RotationY)
        .unwrap();
    assert!(approx(track.track.sample(0.75).unwrap(), 0.025));
}

#[test]
fn walk_arms_swing_in_opposition() {
    let library = ClipLibrary::standard().unwrap();
    let clip = library.get(ClipId::Walk);

    let left = clip
        .tracks
        .iter()
        .find(|t| t.part == promenade::BodyPart::LeftArm && t.channel == Channel::RotationX)
        .unwrap();
    let right = clip
        .tracks
        .iter()
        .find(|t| t.part == promenade::BodyPart::RightArm && t.channel == Channel::RotationX)
        .unwrap();

    let mut t = 0.0;
    while t <= 1.0 {
        let l = left.track.sample(t).unwrap();
        let r = right.track.sample(t).unwrap();
        assert!(approx(l, -r), "arms not opposed at t={t}: {l} vs {r}");
        t += 0.1;
    }
}

// ============================================================================
// AnimationPlayer: State Machine
// ============================================================================

#[test]
fn player_starts_idle_at_zero() {
    let library = ClipLibrary::standard().unwrap();
    let player = AnimationPlayer::new(&library);
    assert_eq!(player.active(), ClipId::Idle);
    assert!(approx(player.time(), 0.0));
}

#[test]
fn player_transition_resets_time() {
    let library = ClipLibrary::standard().unwrap();
    let mut player = AnimationPlayer::new(&library);

    player.advance(&library, 0.5);
    player.request(&library, ClipId::Walk);
    assert_eq!(player.active(), ClipId::Walk);
    assert!(approx(player.time(), 0.0));
}

#[test]
fn player_same_clip_request_keeps_time() {
    let library = ClipLibrary::standard().unwrap();
    let mut player = AnimationPlayer::new(&library);

    player.advance(&library, 0.5);
    player.request(&library, ClipId::Idle);
    assert!(approx(player.time(), 0.5));
}

#[test]
fn player_looping_clip_wraps() {
    let library = ClipLibrary::standard().unwrap();
    let mut player = AnimationPlayer::new(&library);
    player.request(&library, ClipId::Walk);

    // Walk is a 1.0s loop.
    player.advance(&library, 1.25);
    assert_eq!(player.active(), ClipId::Walk);
    assert!(approx(player.time(), 0.25));
}

#[test]
fn player_jump_completes_then_returns_to_idle() {
    let library = ClipLibrary::standard().unwrap();
    let mut player = AnimationPlayer::new(&library);
    player.request(&library, ClipId::Jump);

    player.advance(&library, 0.5);
    assert_eq!(player.active(), ClipId::Jump);

    // Jump is 0.8s and non-looping.
    player.advance(&library, 0.5);
    assert_eq!(player.active(), ClipId::Idle);
    assert!(approx(player.time(), 0.0));
}

#[test]
fn player_jump_suppresses_all_requests() {
    let library = ClipLibrary::standard().unwrap();
    let mut player = AnimationPlayer::new(&library);
    player.request(&library, ClipId::Jump);
    player.advance(&library, 0.3);

    player.request(&library, ClipId::Walk);
    assert_eq!(player.active(), ClipId::Jump);
    assert!(approx(player.time(), 0.3));

    player.request(&library, ClipId::Run);
    assert_eq!(player.active(), ClipId::Jump);

    // Re-requesting jump must not restart it either.
    player.request(&library, ClipId::Jump);
    assert!(approx(player.time(), 0.3));
}
