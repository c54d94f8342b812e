//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use primitive_mesh::runtime::UploadedGeometry;
use primitive_mesh::{Mesh, MeshSummary};
use wasm_bindgen::prelude::*;

/// A handle to mesh buffers that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_box();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// if (mesh.has_uvs()) {
///   geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// }
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Optional texture coordinates as [u, v, ...]
    uvs: Option<Vec<f32>>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Counts and bounds, computed once at construction
    summary: MeshSummary,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the texture coordinates as a Float32Array, if available.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Option<Vec<f32>> {
        self.uvs.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns true if the mesh has texture coordinates.
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns counts and bounds as a JSON object.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn summary_json(&self) -> Result<String, JsValue> {
        self.summary_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl MeshHandle {
    /// Counts and bounds of the mesh.
    pub fn summary(&self) -> MeshSummary {
        self.summary
    }

    /// Host-side twin of [`MeshHandle::summary_json`].
    pub fn summary_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.summary)
    }
}

impl From<&Mesh> for MeshHandle {
    fn from(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.positions().to_vec(),
            normals: mesh.normals().to_vec(),
            uvs: mesh.uvs().map(<[f32]>::to_vec),
            indices: mesh.indices().to_vec(),
            summary: mesh.summary(),
        }
    }
}

impl From<Mesh> for MeshHandle {
    fn from(mesh: Mesh) -> Self {
        Self::from(&mesh)
    }
}

impl From<&UploadedGeometry> for MeshHandle {
    fn from(geometry: &UploadedGeometry) -> Self {
        Self {
            positions: geometry.positions.clone(),
            normals: geometry.normals.clone(),
            uvs: geometry.uvs.clone(),
            indices: geometry.indices.clone(),
            summary: MeshSummary::from_buffers(
                &geometry.positions,
                &geometry.indices,
                geometry.uvs.is_some(),
            ),
        }
    }
}
