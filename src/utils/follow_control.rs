//! Camera follow controller.
//!
//! Drives a camera node's transform from pointer look input and a target
//! position, in either rigid first-person or smoothed third-person mode.
//! The camera's transform should use [`RotationOrder::Yxz`] so yaw is
//! applied before pitch.
//!
//! [`RotationOrder::Yxz`]: crate::scene::RotationOrder

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::input::InputState;
use crate::scene::Transform;

const SENSITIVITY: f32 = 0.002;
const THIRD_PERSON_DISTANCE: f32 = 12.0;
const THIRD_PERSON_HEIGHT: f32 = 3.0;
const FIRST_PERSON_EYE_HEIGHT: f32 = 2.5;
/// Larger values snap the third-person camera to its ideal spot faster.
const SMOOTHING: f32 = 10.0;
const LOOK_HEIGHT: f32 = 0.8;

/// Third-person pitch range. Narrow on purpose: the orbit stays behind
/// and above the character instead of swinging under the ground.
const THIRD_PERSON_PITCH_MIN: f32 = -0.3;
const THIRD_PERSON_PITCH_MAX: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    FirstPerson,
    ThirdPerson,
}

/// Pointer-driven follow camera.
///
/// In third-person mode the camera chases an ideal orbit position with
/// exponential smoothing, `1 - exp(-k * dt)` per step, so the settling
/// rate is the same at any frame rate. In first-person mode it pins
/// rigidly to the target's eye point with no smoothing at all.
#[derive(Debug)]
pub struct FollowControls {
    pub mode: CameraMode,
    yaw: f32,
    pitch: f32,
}

impl FollowControls {
    #[must_use]
    pub fn new(mode: CameraMode) -> Self {
        Self {
            mode,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Horizontal look angle in radians around +Y. The character borrows
    /// this as its facing in first-person mode.
    #[inline]
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CameraMode::FirstPerson => CameraMode::ThirdPerson,
            CameraMode::ThirdPerson => CameraMode::FirstPerson,
        };
    }

    /// Consumes this frame's look delta and moves `transform` to follow
    /// `target` (the character's root position).
    pub fn update(&mut self, transform: &mut Transform, target: Vec3, input: &InputState, dt: f32) {
        self.yaw -= input.look_delta.x * SENSITIVITY;
        self.pitch = (self.pitch - input.look_delta.y * SENSITIVITY).clamp(-FRAC_PI_2, FRAC_PI_2);

        match self.mode {
            CameraMode::FirstPerson => {
                transform.position = target + Vec3::Y * FIRST_PERSON_EYE_HEIGHT;
                transform.rotation = Vec3::new(self.pitch, self.yaw, 0.0);
            }
            CameraMode::ThirdPerson => {
                let pitch = self
                    .pitch
                    .clamp(THIRD_PERSON_PITCH_MIN, THIRD_PERSON_PITCH_MAX);
                let height = THIRD_PERSON_HEIGHT + pitch.sin() * 1.5;
                let back = THIRD_PERSON_DISTANCE * pitch.cos();
                let ideal =
                    target + Vec3::new(back * self.yaw.sin(), height, back * self.yaw.cos());

                let blend = 1.0 - (-SMOOTHING * dt).exp();
                transform.position = transform.position.lerp(ideal, blend);
                transform.look_at(target + Vec3::Y * LOOK_HEIGHT, Vec3::Y);
            }
        }
    }
}
