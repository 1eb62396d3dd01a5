//! Per-frame input snapshot.
//!
//! The embedding layer (window event loop, test harness) sets these flags
//! from whatever device it reads; the world consumes them once per tick.
//! Movement keys are level state, look deltas and jump are accumulated
//! edge events cleared by [`InputState::end_frame`].

use glam::{Vec2, Vec3};

#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub jump: bool,
    /// Accumulated pointer movement since the last frame, in pixels.
    pub look_delta: Vec2,
}

impl InputState {
    /// Raw movement intent on the XZ plane, before camera-relative
    /// rotation. Forward is -Z, matching a camera looking down -Z.
    #[must_use]
    pub fn move_axes(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }

    /// Adds pointer movement; deltas from several events within one frame
    /// accumulate.
    pub fn inject_look(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    /// Clears the edge-triggered state at the end of a tick. Held movement
    /// keys persist; a held jump key does not re-fire.
    pub fn end_frame(&mut self) {
        self.look_delta = Vec2::ZERO;
        self.jump = false;
    }
}
