use glam::Vec3;

use crate::animation::ClipId;

const WALK_SPEED: f32 = 5.0;
const RUN_SPEED: f32 = 10.0;
const JUMP_SPEED: f32 = 8.0;
const GRAVITY: f32 = -30.0;
const GROUND_Y: f32 = 0.0;

/// Kinematic motion state of the character.
///
/// The controller owns position, velocity and facing; it integrates
/// gravity, resolves collision against the flat ground plane and derives
/// the clip the animation player should be showing. It never touches the
/// scene graph itself.
#[derive(Debug)]
pub struct CharacterController {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Facing angle in radians around +Y; zero faces +Z.
    pub yaw: f32,
    pub grounded: bool,
    jumping: bool,
    requested: ClipId,
}

impl CharacterController {
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            grounded: true,
            jumping: false,
            requested: ClipId::Idle,
        }
    }

    /// Applies one tick of movement intent.
    ///
    /// A non-zero `direction` (world space, Y ignored) is normalized and
    /// scaled to walk or run speed; the character turns to face it. Zero
    /// intent zeroes the horizontal velocity immediately, there is no
    /// deceleration ramp. Vertical velocity is never touched here.
    pub fn apply_intent(&mut self, direction: Vec3, running: bool) {
        let flat = Vec3::new(direction.x, 0.0, direction.z);

        if let Some(dir) = flat.try_normalize() {
            let speed = if running { RUN_SPEED } else { WALK_SPEED };
            self.velocity.x = dir.x * speed;
            self.velocity.z = dir.z * speed;
            self.yaw = dir.x.atan2(dir.z);
            if !self.jumping {
                self.requested = if running { ClipId::Run } else { ClipId::Walk };
            }
        } else {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
            if !self.jumping {
                self.requested = ClipId::Idle;
            }
        }
    }

    /// Launches a jump if the character is on the ground; airborne calls
    /// are ignored, so holding the jump key cannot double-jump.
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity.y = JUMP_SPEED;
            self.grounded = false;
            self.jumping = true;
            self.requested = ClipId::Jump;
        }
    }

    /// Integrates one simulation step and resolves ground contact.
    pub fn tick(&mut self, dt: f32) {
        if !self.grounded {
            self.velocity.y += GRAVITY * dt;
        }

        self.position += self.velocity * dt;

        if self.position.y <= GROUND_Y {
            self.position.y = GROUND_Y;
            self.velocity.y = 0.0;
            self.grounded = true;
            if self.jumping {
                self.jumping = false;
                if self.requested == ClipId::Jump {
                    self.requested = ClipId::Idle;
                }
            }
        }
    }

    /// The clip the controller wants playing, restated every tick.
    #[inline]
    #[must_use]
    pub fn requested_clip(&self) -> ClipId {
        self.requested
    }

    #[inline]
    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }
}
