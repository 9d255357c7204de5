//! Error taxonomy for the engine core.
//!
//! Configuration errors fail fast at generation time. Backend errors surface
//! failures from the graphics-binding collaborator. Capacity failures of mesh
//! merging are reported as a plain `bool` by [`crate::data_structures::mesh::MeshContainer::merge_into`]
//! so the caller can decide to start a new container. Numeric degeneracies
//! (ray parallel to a plane, normalizing a zero vector) are not errors: they
//! produce non-finite values and callers guard with domain checks.

use thiserror::Error;

/// Invalid shape parameters detected before any geometry is generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// A sphere needs a polar row at each end plus at least one intermediate
    /// ring, so fewer than 3 stacks cannot form a closed surface.
    #[error("sphere requires at least 3 stacks, got {stacks}")]
    TooFewStacks { stacks: usize },
}

/// Failures reported by a [`crate::render::GraphicsBackend`] implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("program compilation failed: {0}")]
    ProgramCompile(String),
    #[error("texture upload failed: {0}")]
    TextureUpload(String),
}
