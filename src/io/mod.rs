//! io : loading and dumping adjacency matrices, random generation, rendering.

/// text format of adjacency matrices
pub mod matrix;

/// random multigraphs
pub mod generator;

/// plain text rendering of a selection
pub mod render;
