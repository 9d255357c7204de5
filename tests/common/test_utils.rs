use cgmath::Matrix4;
use sol_ngin::{
    data_structures::mesh::DrawMode,
    error::BackendError,
    render::{DrawCall, GraphicsBackend, ProgramHandle, TextureHandle},
    uniforms::Uniforms,
};

/// Routes engine log output to the test harness. Safe to call from every
/// test; repeated initialization is ignored.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One recorded draw, detached from the borrowed mesh so it can outlive the
/// render call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRecord {
    pub program: ProgramHandle,
    pub vertex_count: usize,
    pub element_count: usize,
    pub draw_mode: DrawMode,
    pub textures: Vec<TextureHandle>,
    pub model_matrix: Matrix4<f32>,
}

/// Fake graphics backend that records every draw it is handed.
#[derive(Default)]
pub struct RecordingBackend {
    pub draws: Vec<DrawRecord>,
    next_program: u32,
    next_texture: u32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphicsBackend for RecordingBackend {
    fn compile_program(
        &mut self,
        _vertex_src: &str,
        _fragment_src: &str,
    ) -> Result<ProgramHandle, BackendError> {
        let handle = ProgramHandle(self.next_program);
        self.next_program += 1;
        Ok(handle)
    }

    fn upload_texture(&mut self, _bytes: &[u8]) -> Result<TextureHandle, BackendError> {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        Ok(handle)
    }

    fn draw(&mut self, call: DrawCall<'_>, _uniforms: &Uniforms) {
        self.draws.push(DrawRecord {
            program: call.program,
            vertex_count: call.mesh.vertex_count(),
            element_count: call.mesh.element_count,
            draw_mode: call.mesh.draw_mode,
            textures: call.textures.to_vec(),
            model_matrix: call.model_matrix,
        });
    }
}

/// Asserts that two draw lists contain the same draws, ignoring order.
#[allow(dead_code)]
pub fn assert_same_draws(mut left: Vec<DrawRecord>, right: &[DrawRecord]) {
    assert_eq!(left.len(), right.len());
    for record in right {
        let position = left
            .iter()
            .position(|candidate| candidate == record)
            .unwrap_or_else(|| panic!("draw not found in other set: {record:?}"));
        left.remove(position);
    }
}
