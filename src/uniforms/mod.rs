//! Per-frame uniform state: camera, lights and the shared uniform block.
//!
//! - `camera` holds view/projection construction
//! - `light` holds light descriptions and their flattened GPU layout
//!
//! The [`Uniforms`] block carries everything that is constant across one
//! frame. The per-draw model matrix is deliberately *not* part of it: it is
//! threaded down the render recursion by value and delivered inside each
//! [`crate::render::DrawCall`], so sibling subtrees can never observe each
//! other's matrix writes.

pub mod camera;
pub mod light;

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::uniforms::{camera::Camera, light::LightArray};

/// Frame-wide uniform values shared by every draw of a traversal.
#[derive(Clone, Debug)]
pub struct Uniforms {
    pub view_matrix: Matrix4<f32>,
    pub projection_matrix: Matrix4<f32>,
    pub camera_position: Vector3<f32>,
    pub lights: Option<LightArray>,
    /// Light-space matrix for shadow lookups, when a shadow pass ran.
    pub shadow_matrix: Option<Matrix4<f32>>,
}

impl Uniforms {
    pub fn from_camera(camera: &Camera, lights: Option<LightArray>) -> Self {
        Self {
            view_matrix: camera.view_matrix(),
            projection_matrix: camera.perspective_projection(),
            camera_position: camera.position,
            lights,
            shadow_matrix: None,
        }
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
            camera_position: Vector3::new(0.0, 0.0, 0.0),
            lights: None,
            shadow_matrix: None,
        }
    }
}
