//! Engine data structures: vertices, meshes, scene nodes and models.
//!
//! - `vertex` defines the interleaved vertex layout and the transform-baking
//!   pass over raw vertex buffers
//! - `mesh` contains faces, mergeable mesh containers and drawable meshes
//! - `node` is the transform-node tree
//! - `model` ties meshes, programs and textures together under one root

pub mod mesh;
pub mod model;
pub mod node;
pub mod vertex;
