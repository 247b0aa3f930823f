use glam::{EulerRot, Mat4, Quat, Vec3};

/// One floating cube of the current batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    /// Position inside its generation batch; only varies rotation speed.
    pub index: usize,
    pub dimensions: Vec3,
    /// Linear RGB.
    pub color: Vec3,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
}

impl Cube {
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Object-to-world transform. Dimensions are baked into the geometry, not the matrix.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position)
    }
}
