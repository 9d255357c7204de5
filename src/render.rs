//! Graphics backend capability surface and draw dispatch.
//!
//! The engine core never talks to a GPU API directly. Instead it resolves
//! `{program, mesh, textures, model matrix}` per mesh reference and hands the
//! result to an injected [`GraphicsBackend`]. Buffer upload, shader
//! compilation and the actual draw-call issuance all live behind that trait,
//! which keeps the scene graph and the mesh generators testable with a
//! recording fake.

use cgmath::Matrix4;

use crate::{data_structures::mesh::Mesh, error::BackendError, uniforms::Uniforms};

/// Opaque handle of a compiled and linked shader program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Opaque handle of an uploaded texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// One resolved draw: everything a backend needs to issue the call.
///
/// `model_matrix` is the matrix accumulated down the node tree for this
/// specific mesh placement; frame-wide state travels in [`Uniforms`].
pub struct DrawCall<'a> {
    pub program: ProgramHandle,
    pub mesh: &'a Mesh,
    /// Textures bound for this mesh, in texture-slot order. May be empty.
    pub textures: &'a [TextureHandle],
    pub model_matrix: Matrix4<f32>,
}

/// Capability set owned by the graphics-binding collaborator.
pub trait GraphicsBackend {
    /// Compiles and links a program from vertex and fragment shader source.
    fn compile_program(
        &mut self,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<ProgramHandle, BackendError>;

    /// Uploads encoded image bytes and returns a handle to the texture.
    fn upload_texture(&mut self, bytes: &[u8]) -> Result<TextureHandle, BackendError>;

    /// Issues one draw. The backend picks indexed or array submission from
    /// `call.mesh.draw_mode`.
    fn draw(&mut self, call: DrawCall<'_>, uniforms: &Uniforms);
}
