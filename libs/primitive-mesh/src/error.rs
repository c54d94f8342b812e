//! # Mesh Errors
//!
//! Error types for mesh generation and animation setup.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building or validating meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Sphere grid with a zero dimension.
    #[error(
        "Invalid tessellation: segments_around={segments_around}, segments_down={segments_down} (both must be > 0)"
    )]
    InvalidTessellation {
        segments_around: u32,
        segments_down: u32,
    },

    /// Sphere grid whose vertices cannot all be addressed by `u32` indices.
    #[error(
        "Tessellation too large: segments_around={segments_around}, segments_down={segments_down} exceeds u32 vertex indexing"
    )]
    TessellationTooLarge {
        segments_around: u32,
        segments_down: u32,
    },

    /// An index references a vertex that does not exist.
    #[error("Index out of range: {index} (vertex count: {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// A vertex attribute buffer does not match the vertex count.
    #[error("Attribute '{attribute}' has {actual} components, expected {expected}")]
    AttributeLengthMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Index buffer length is not a multiple of three.
    #[error("Index buffer length {index_count} is not a whole number of triangles")]
    IncompleteTriangle { index_count: usize },

    /// Rejected configuration group
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid tessellation error.
    pub fn invalid_tessellation(segments_around: u32, segments_down: u32) -> Self {
        Self::InvalidTessellation {
            segments_around,
            segments_down,
        }
    }

    /// Creates an attribute length mismatch error.
    pub fn attribute_mismatch(attribute: &'static str, expected: usize, actual: usize) -> Self {
        Self::AttributeLengthMismatch {
            attribute,
            expected,
            actual,
        }
    }
}
