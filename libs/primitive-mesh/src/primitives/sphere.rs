//! # Sphere Primitive
//!
//! Generates a unit UV sphere from a latitude/longitude grid of disjoint
//! quads.

use crate::error::MeshError;
use crate::math::spherical_to_cartesian;
use crate::mesh::Mesh;
use config::constants::{INDICES_PER_QUAD, VERTICES_PER_QUAD};
use std::f32::consts::{PI, TAU};

/// Creates a unit sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `segments_around` - Number of longitude columns around the vertical axis
/// * `segments_down` - Number of latitude rings from pole to pole
///
/// # Returns
///
/// A mesh with `4 * segments_around * segments_down` vertices and
/// `6 * segments_around * segments_down` indices. Normals equal positions;
/// there are no UVs.
///
/// # Algorithm
///
/// - Ring `down` spans latitudes `(down / segments_down - 0.5) * PI` to
///   `((down + 1) / segments_down - 0.5) * PI`
/// - Column `across` spans longitudes `across / segments_around * 2PI` to
///   `(across + 1) / segments_around * 2PI`
/// - Each quad emits four fresh corners `(lat0, long0)`, `(lat1, long0)`,
///   `(lat0, long1)`, `(lat1, long1)` and triangles `(n, n+1, n+2)`,
///   `(n+2, n+1, n+3)`
///
/// Quads never share vertices, including across the longitude seam, so the
/// surface shows faceting under per-vertex lighting.
///
/// # Errors
///
/// Returns [`MeshError::InvalidTessellation`] when either dimension is zero,
/// and [`MeshError::TessellationTooLarge`] when the grid has more vertices
/// than `u32` indices can address.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::primitives::build_sphere;
///
/// let mesh = build_sphere(4, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 32);
/// assert_eq!(mesh.index_count(), 48);
/// assert!(build_sphere(0, 2).is_err());
/// ```
pub fn build_sphere(segments_around: u32, segments_down: u32) -> Result<Mesh, MeshError> {
    if segments_around == 0 || segments_down == 0 {
        return Err(MeshError::invalid_tessellation(
            segments_around,
            segments_down,
        ));
    }

    // Indices are u32, so every vertex of the grid must be addressable.
    let quad_count = (segments_around as usize).checked_mul(segments_down as usize);
    let counts = quad_count.and_then(|quads| {
        let vertices = quads.checked_mul(VERTICES_PER_QUAD as usize)?;
        let indices = quads.checked_mul(INDICES_PER_QUAD as usize)?;
        u32::try_from(vertices).ok().map(|_| (vertices, indices))
    });
    let Some((vertex_count, index_count)) = counts else {
        return Err(MeshError::TessellationTooLarge {
            segments_around,
            segments_down,
        });
    };

    let mut mesh = Mesh::with_capacity(vertex_count, index_count, false);

    let around = segments_around as f32;
    let down_count = segments_down as f32;

    for down in 0..segments_down {
        let lat0 = (down as f32 / down_count - 0.5) * PI;
        let lat1 = ((down + 1) as f32 / down_count - 0.5) * PI;

        for across in 0..segments_around {
            let long0 = across as f32 / around * TAU;
            let long1 = (across + 1) as f32 / around * TAU;

            let n = mesh.vertex_count() as u32;
            for (lat, long) in [(lat0, long0), (lat1, long0), (lat0, long1), (lat1, long1)] {
                let point = spherical_to_cartesian(lat, long);
                // On a unit sphere centered at the origin the normal is the position.
                mesh.add_vertex(point, point);
            }

            mesh.add_triangle(n, n + 1, n + 2);
            mesh.add_triangle(n + 2, n + 1, n + 3);
        }
    }

    debug_assert!(mesh.validate().is_ok(), "sphere mesh violates buffer invariants");
    log::info!(
        "built sphere {}x{}: {:?}",
        segments_around,
        segments_down,
        mesh.summary()
    );

    Ok(mesh)
}
