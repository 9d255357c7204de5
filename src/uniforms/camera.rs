//! Camera with look-at view and perspective/orthographic projection.

use cgmath::{Deg, Matrix4, Point3, Vector3};

/// Viewport rectangle for orthographic projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

/// Right-handed look-at camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub center: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Deg<f32>,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            center: Vector3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
            aspect: 1.0,
            fovy: Deg(45.0),
            near: 0.01,
            far: 50.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::new(self.position.x, self.position.y, self.position.z),
            Point3::new(self.center.x, self.center.y, self.center.z),
            self.up,
        )
    }

    pub fn perspective_projection(&self) -> Matrix4<f32> {
        cgmath::perspective(self.fovy, self.aspect, self.near, self.far)
    }

    pub fn orthographic_projection(&self, rect: Rect) -> Matrix4<f32> {
        cgmath::ortho(
            rect.left,
            rect.right,
            rect.bottom,
            rect.top,
            self.near,
            self.far,
        )
    }

    /// `projection * view`, the composition used for picking rays and
    /// frustum-space work.
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.perspective_projection() * self.view_matrix()
    }
}
