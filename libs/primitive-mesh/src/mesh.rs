//! # Mesh Data Structure
//!
//! Renderable mesh stored as tightly packed `f32` attribute buffers and a
//! `u32` triangle-list index buffer, ready for direct GPU upload.

use crate::error::MeshError;
use glam::{Vec2, Vec3};
use serde::Serialize;

/// A triangle mesh with parallel vertex attribute buffers.
///
/// Vertex `i` stores its position at `positions[3 * i..3 * i + 3]`, its
/// normal at `normals[3 * i..3 * i + 3]` and, when present, its texture
/// coordinate at `uvs[2 * i..2 * i + 2]`. Every consecutive index triple is
/// one counter-clockwise triangle.
///
/// Meshes are produced by the builders in [`crate::primitives`] and are
/// read-only afterwards.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::build_box;
///
/// let mesh = build_box();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.positions().len(), 24 * 3);
/// assert!(mesh.uvs().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Optional texture coordinates as [u, v, u, v, ...]
    uvs: Option<Vec<f32>>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: None,
            indices: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub(crate) fn with_capacity(vertex_count: usize, index_count: usize, with_uvs: bool) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            normals: Vec::with_capacity(vertex_count * 3),
            uvs: with_uvs.then(|| Vec::with_capacity(vertex_count * 2)),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends a vertex and returns its index.
    pub(crate) fn add_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.to_array());
        index
    }

    /// Appends a textured vertex and returns its index.
    pub(crate) fn add_vertex_with_uv(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.add_vertex(position, normal);
        self.uvs
            .get_or_insert_with(Vec::new)
            .extend_from_slice(&uv.to_array());
        index
    }

    /// Appends a triangle by vertex indices.
    pub(crate) fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns the packed position buffer.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Returns the packed normal buffer.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Returns the packed texture coordinate buffer, if any.
    #[inline]
    pub fn uvs(&self) -> Option<&[f32]> {
        self.uvs.as_deref()
    }

    /// Returns the index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the position of the vertex at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> Vec3 {
        Vec3::from_slice(&self.positions[index as usize * 3..])
    }

    /// Returns the normal of the vertex at the given index.
    #[inline]
    pub fn normal(&self, index: u32) -> Vec3 {
        Vec3::from_slice(&self.normals[index as usize * 3..])
    }

    /// Returns the texture coordinate of the vertex at the given index.
    pub fn uv(&self, index: u32) -> Option<Vec2> {
        self.uvs
            .as_ref()
            .map(|uvs| Vec2::from_slice(&uvs[index as usize * 2..]))
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let start = index * 3;
        [
            self.indices[start],
            self.indices[start + 1],
            self.indices[start + 2],
        ]
    }

    /// Iterates over all triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        bounds(&self.positions)
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - Normals (and UVs, if present) match the vertex count
    /// - The index buffer holds whole triangles
    /// - All indices reference existing vertices
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.len() % 3 != 0 {
            return Err(MeshError::attribute_mismatch(
                "position",
                self.vertex_count() * 3,
                self.positions.len(),
            ));
        }

        let vertex_count = self.vertex_count();

        if self.normals.len() != vertex_count * 3 {
            return Err(MeshError::attribute_mismatch(
                "normal",
                vertex_count * 3,
                self.normals.len(),
            ));
        }

        if let Some(uvs) = &self.uvs {
            if uvs.len() != vertex_count * 2 {
                return Err(MeshError::attribute_mismatch(
                    "uv",
                    vertex_count * 2,
                    uvs.len(),
                ));
            }
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }

        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Summarizes the mesh for logging and host-side inspection.
    pub fn summary(&self) -> MeshSummary {
        MeshSummary::from_buffers(&self.positions, &self.indices, self.uvs.is_some())
    }
}

/// Serializable overview of a mesh.
///
/// Bounds serialize as `[x, y, z]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshSummary {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub has_uvs: bool,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
}

impl MeshSummary {
    /// Summarizes raw attribute buffers, such as those staged by a runtime.
    ///
    /// Empty buffers report zero bounds.
    pub fn from_buffers(positions: &[f32], indices: &[u32], has_uvs: bool) -> Self {
        let (bounds_min, bounds_max) = bounds(positions);
        Self {
            vertex_count: positions.len() / 3,
            triangle_count: indices.len() / 3,
            has_uvs,
            bounds_min,
            bounds_max,
        }
    }
}

fn bounds(positions: &[f32]) -> (Vec3, Vec3) {
    let mut points = positions.chunks_exact(3).map(Vec3::from_slice);
    let Some(first) = points.next() else {
        return (Vec3::ZERO, Vec3::ZERO);
    };

    points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Z);
        mesh.add_vertex(Vec3::X, Vec3::Z);
        mesh.add_vertex(Vec3::Y, Vec3::Z);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.positions(), &[1.0, 2.0, 3.0]);
        assert_eq!(mesh.position(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.normal(0), Vec3::Y);
        assert!(mesh.uv(0).is_none());
    }

    #[test]
    fn test_mesh_add_vertex_with_uv() {
        let mut mesh = Mesh::new();
        mesh.add_vertex_with_uv(Vec3::ZERO, Vec3::Z, Vec2::new(0.25, 0.75));
        assert_eq!(mesh.uvs(), Some(&[0.25, 0.75][..]));
        assert_eq!(mesh.uv(0), Some(Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = triangle_mesh();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::new(-1.0, -2.0, -3.0), Vec3::Z);
        mesh.add_vertex(Vec3::new(4.0, 5.0, 6.0), Vec3::Z);
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(triangle_mesh().validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Z);
        mesh.add_triangle(0, 1, 2); // Invalid indices
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 1,
                vertex_count: 1
            })
        );
    }

    #[test]
    fn test_mesh_validate_partial_uvs() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::ZERO, Vec3::Z);
        mesh.add_vertex_with_uv(Vec3::X, Vec3::Z, Vec2::ONE);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::attribute_mismatch("uv", 4, 2))
        );
    }

    #[test]
    fn test_mesh_validate_incomplete_triangle() {
        let mut mesh = triangle_mesh();
        mesh.indices.push(0);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IncompleteTriangle { index_count: 4 })
        );
    }

    #[test]
    fn test_mesh_summary() {
        let summary = triangle_mesh().summary();
        assert_eq!(summary.vertex_count, 3);
        assert_eq!(summary.triangle_count, 1);
        assert!(!summary.has_uvs);
        assert_eq!(summary.bounds_min, Vec3::ZERO);
        assert_eq!(summary.bounds_max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_summary_matches_staged_buffers() {
        let mesh = triangle_mesh();
        let staged = MeshSummary::from_buffers(mesh.positions(), mesh.indices(), false);
        assert_eq!(staged, mesh.summary());
        assert_eq!(
            MeshSummary::from_buffers(&[], &[], true).bounds_max,
            Vec3::ZERO
        );
    }
}
