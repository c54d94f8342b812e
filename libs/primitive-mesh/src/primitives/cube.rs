//! # Box Primitive
//!
//! Generates the unit box: a cube spanning `[-1, 1]` on every axis with
//! flat per-face normals and per-face texture coordinates.

use crate::mesh::Mesh;
use config::constants::{BOX_INDEX_COUNT, BOX_VERTEX_COUNT};
use glam::{Vec2, Vec3};

/// One face of the box: an outward normal and four corners `[a, b, c, d]`.
///
/// Corners are ordered so that `(a, b, c)` and `(c, b, d)` are both
/// counter-clockwise when viewed from outside.
struct Face {
    normal: [f32; 3],
    corners: [[f32; 3]; 4],
}

/// Texture coordinates of corners `a`, `b`, `c`, `d` on every face.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

const FACES: [Face; 6] = [
    // front
    Face {
        normal: [0.0, 0.0, 1.0],
        corners: [
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
        ],
    },
    // right
    Face {
        normal: [1.0, 0.0, 0.0],
        corners: [
            [1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
        ],
    },
    // back
    Face {
        normal: [0.0, 0.0, -1.0],
        corners: [
            [1.0, -1.0, -1.0],
            [-1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
        ],
    },
    // left
    Face {
        normal: [-1.0, 0.0, 0.0],
        corners: [
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
        ],
    },
    // top
    Face {
        normal: [0.0, 1.0, 0.0],
        corners: [
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
        ],
    },
    // bottom
    Face {
        normal: [0.0, -1.0, 0.0],
        corners: [
            [1.0, -1.0, 1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [-1.0, -1.0, -1.0],
        ],
    },
];

/// Creates the unit box mesh.
///
/// # Returns
///
/// A mesh with 24 vertices (4 per face, unshared so each face keeps its own
/// flat normal) and 36 indices (2 triangles per face), with UVs.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::build_box;
///
/// let mesh = build_box();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.index_count(), 36);
/// ```
pub fn build_box() -> Mesh {
    let mut mesh = Mesh::with_capacity(BOX_VERTEX_COUNT, BOX_INDEX_COUNT, true);

    for face in &FACES {
        let normal = Vec3::from_array(face.normal);
        let mut corner_indices = [0u32; 4];
        for (slot, (corner, uv)) in face.corners.iter().zip(FACE_UVS).enumerate() {
            corner_indices[slot] =
                mesh.add_vertex_with_uv(Vec3::from_array(*corner), normal, Vec2::from_array(uv));
        }

        let [a, b, c, d] = corner_indices;
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(c, b, d);
    }

    debug_assert!(mesh.validate().is_ok(), "box mesh violates buffer invariants");
    log::debug!("box positions: {:?}", mesh.positions());
    log::debug!("box normals: {:?}", mesh.normals());
    log::debug!("box uvs: {:?}", mesh.uvs());
    log::info!("built box: {:?}", mesh.summary());

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_vertex_count() {
        let mesh = build_box();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.positions().len(), 72);
        assert_eq!(mesh.normals().len(), 72);
        assert_eq!(mesh.uvs().map(<[f32]>::len), Some(48));
    }

    #[test]
    fn test_box_index_count() {
        let mesh = build_box();
        assert_eq!(mesh.index_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices().iter().all(|&i| i < 24));
    }

    #[test]
    fn test_box_validates() {
        assert!(build_box().validate().is_ok());
    }

    #[test]
    fn test_box_is_deterministic() {
        assert_eq!(build_box(), build_box());
    }

    #[test]
    fn test_box_bounds() {
        let (min, max) = build_box().bounding_box();
        assert_eq!(min, Vec3::splat(-1.0));
        assert_eq!(max, Vec3::splat(1.0));
    }

    #[test]
    fn test_box_face_triangulation() {
        let mesh = build_box();
        for face in 0..6u32 {
            let n = face * 4;
            assert_eq!(mesh.triangle(face as usize * 2), [n, n + 1, n + 2]);
            assert_eq!(mesh.triangle(face as usize * 2 + 1), [n + 2, n + 1, n + 3]);
        }
    }

    #[test]
    fn test_box_faces_are_flat() {
        let mesh = build_box();
        for face in 0..6u32 {
            let normal = mesh.normal(face * 4);
            for corner in 0..4 {
                let index = face * 4 + corner;
                assert_eq!(mesh.normal(index), normal);
                // Every corner lies on the plane the normal points out of
                assert_eq!(mesh.position(index).dot(normal), 1.0);
            }
        }
    }

    #[test]
    fn test_box_winding_is_counter_clockwise() {
        let mesh = build_box();
        for [i0, i1, i2] in mesh.triangles() {
            let (p0, p1, p2) = (mesh.position(i0), mesh.position(i1), mesh.position(i2));
            let face_normal = (p1 - p0).cross(p2 - p0);
            assert!(
                face_normal.dot(mesh.normal(i0)) > 0.0,
                "triangle [{i0}, {i1}, {i2}] faces inward"
            );
        }
    }

    #[test]
    fn test_box_uvs_per_face() {
        let mesh = build_box();
        for face in 0..6u32 {
            assert_eq!(mesh.uv(face * 4), Some(Vec2::new(0.0, 0.0)));
            assert_eq!(mesh.uv(face * 4 + 3), Some(Vec2::new(1.0, 1.0)));
        }
    }
}
