//! # Render Runtime Seam
//!
//! The core never talks to a GPU. It hands finished buffers to a
//! [`RenderRuntime`] implementation and is driven by a host-owned
//! [`FrameLoop`]. [`StagingRuntime`] keeps the buffers in memory for a host
//! that pulls them, such as the three.js scene behind the WASM crate.

mod frame_loop;

pub use frame_loop::FrameLoop;

use crate::material::Material;
use crate::mesh::Mesh;

/// Placement and appearance of one uploaded mesh.
///
/// Instances are laid out along the X axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    pub material: Material,
    pub offset_x: f32,
}

impl Instance {
    /// Creates an instance at `offset_x`.
    pub fn new(material: Material, offset_x: f32) -> Self {
        Self { material, offset_x }
    }
}

/// Rendering backend consumed by the core.
pub trait RenderRuntime {
    /// Handle to uploaded geometry plus material.
    type Handle;

    /// Uploads a mesh and returns its handle.
    fn upload(&mut self, mesh: &Mesh, instance: &Instance) -> Self::Handle;

    /// Re-uploads the position buffer of previously uploaded geometry.
    fn update_positions(&mut self, handle: &Self::Handle, positions: &[f32]);
}

/// Handle issued by [`StagingRuntime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub u32);

/// What [`StagingRuntime`] stages for each upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedGeometry {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Option<Vec<f32>>,
    pub indices: Vec<u32>,
    pub instance: Instance,
    /// Number of position re-uploads received.
    pub revisions: u64,
}

/// In-memory runtime that stages uploaded buffers for a host to pull.
///
/// Used by tests and by the WASM scene, where JavaScript copies the staged
/// buffers into its own geometry whenever `revisions` changes.
///
/// # Examples
/// ```
/// use primitive_mesh::primitives::build_box;
/// use primitive_mesh::runtime::{Instance, StagingRuntime, RenderRuntime};
///
/// let mut runtime = StagingRuntime::default();
/// let handle = runtime.upload(&build_box(), &Instance::default());
/// assert_eq!(runtime.geometry(handle).unwrap().indices.len(), 36);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StagingRuntime {
    geometries: Vec<UploadedGeometry>,
}

impl StagingRuntime {
    /// Returns the geometry stored for `handle`.
    pub fn geometry(&self, handle: GeometryHandle) -> Option<&UploadedGeometry> {
        self.geometries.get(handle.0 as usize)
    }

    /// Number of uploaded geometries.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true if nothing was uploaded.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

impl RenderRuntime for StagingRuntime {
    type Handle = GeometryHandle;

    fn upload(&mut self, mesh: &Mesh, instance: &Instance) -> GeometryHandle {
        let handle = GeometryHandle(self.geometries.len() as u32);
        self.geometries.push(UploadedGeometry {
            positions: mesh.positions().to_vec(),
            normals: mesh.normals().to_vec(),
            uvs: mesh.uvs().map(<[f32]>::to_vec),
            indices: mesh.indices().to_vec(),
            instance: instance.clone(),
            revisions: 0,
        });
        handle
    }

    fn update_positions(&mut self, handle: &GeometryHandle, positions: &[f32]) {
        let Some(geometry) = self.geometries.get_mut(handle.0 as usize) else {
            log::warn!("position update for unknown geometry {handle:?}");
            return;
        };
        geometry.positions.clear();
        geometry.positions.extend_from_slice(positions);
        geometry.revisions += 1;
    }
}

#[cfg(test)]
mod tests;
