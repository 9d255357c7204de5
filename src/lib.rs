//! sol-ngin
//!
//! A small scene-graph rendering engine core. The crate maintains a tree of
//! transformable nodes, procedurally generates polygon meshes for primitive
//! shapes (box, sphere, cone, cylinder, quad), relates meshes, shader
//! programs and textures through per-model index tables, and drives per-mesh
//! draw dispatch through an injected graphics backend. GPU buffer upload,
//! shader compilation, windowing and asset loading are external
//! collaborators behind the backend trait.
//!
//! High-level modules
//! - `geometry`: rays, planes, the two-vector rotation type and TRS matrices
//! - `data_structures`: vertices, meshes, merge logic, nodes and models
//! - `shapes`: procedural primitive generators and model constructors
//! - `uniforms`: camera, lights and the per-frame uniform block
//! - `render`: the backend capability trait and resolved draw calls
//! - `error`: configuration and backend error types
//!

pub mod data_structures;
pub mod error;
pub mod geometry;
pub mod render;
pub mod shapes;
pub mod uniforms;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
