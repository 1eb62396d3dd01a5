use glam::{Affine3A, EulerRot, Mat3, Mat4, Quat, Vec3};

/// Order in which Euler rotation axes are applied.
///
/// Body parts use the default `Xyz` order; the camera uses `Yxz` so that
/// pitch is applied inside the yaw frame (look rotation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationOrder {
    #[default]
    Xyz,
    Yxz,
}

/// Local TRS transform with cached matrices and shadow-state dirty checking.
///
/// Rotation is stored as per-axis Euler angles (radians) rather than a
/// quaternion: animation tracks drive individual rotation axes, and a
/// quaternion cannot expose a single axis for partial writes.
///
/// The `last_*` shadow fields mirror the public attributes; the local
/// matrix is only recomputed when a public attribute actually changed.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, one per axis.
    pub rotation: Vec3,
    pub scale: Vec3,
    pub rotation_order: RotationOrder,

    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    last_position: Vec3,
    last_rotation: Vec3,
    last_scale: Vec3,
    last_order: RotationOrder,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_order: RotationOrder::Xyz,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            last_scale: Vec3::ONE,
            last_order: RotationOrder::Xyz,
            force_update: true,
        }
    }

    /// Checks the shadow state and recomputes the local matrix if any
    /// public attribute changed. Returns whether a recompute happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.rotation_order != self.last_order
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation_quat(),
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.last_order = self.rotation_order;
            self.force_update = false;
        }

        changed
    }

    /// The current Euler rotation as a quaternion, honoring the axis order.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        match self.rotation_order {
            RotationOrder::Xyz => Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            RotationOrder::Yxz => Quat::from_euler(
                EulerRot::YXZ,
                self.rotation.y,
                self.rotation.x,
                self.rotation.z,
            ),
        }
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as a `Mat4`, for renderer upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    /// World-space position after the last matrix update.
    #[inline]
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.world_matrix.translation.into()
    }

    /// Written back by [`Scene`](crate::scene::Scene) during the hierarchy pass.
    pub fn set_world_matrix(&mut self, mat: Affine3A) {
        self.world_matrix = mat;
    }

    /// Rotates the transform so its -Z axis points at `target`.
    ///
    /// `target` and `up` are expressed in the parent coordinate frame.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize();

        // Degenerate when looking straight along `up`.
        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot = Quat::from_mat3(&Mat3::from_cols(right, new_up, -forward));
        self.rotation = match self.rotation_order {
            RotationOrder::Xyz => {
                let (x, y, z) = rot.to_euler(EulerRot::XYZ);
                Vec3::new(x, y, z)
            }
            RotationOrder::Yxz => {
                let (y, x, z) = rot.to_euler(EulerRot::YXZ);
                Vec3::new(x, y, z)
            }
        };
    }

    /// Forces a matrix recompute on the next update.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
