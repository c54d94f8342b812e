//! WASM-facing entry points for the procedural primitive meshes.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mesh = primitive_mesh_wasm::build_sphere_internal(8, 4).unwrap();
//! assert_eq!(mesh.vertex_count(), 8 * 4 * 4);
//! ```

use config::constants::{DEFAULT_SEGMENTS_AROUND, DEFAULT_SEGMENTS_DOWN};
use primitive_mesh::MeshError;
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod scene;

pub use mesh_handle::MeshHandle;
pub use scene::{Scene, SceneError, SphereOptions};

/// Installs the panic hook and routes `log` output to the browser console.
///
/// Safe to call more than once.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init } from "primitive-mesh-wasm";
/// // init();
/// ```
#[wasm_bindgen]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Default longitude column count for spheres.
///
/// # Examples
/// ```
/// assert_eq!(primitive_mesh_wasm::default_segments_around(), 24);
/// ```
#[wasm_bindgen]
pub fn default_segments_around() -> u32 {
    DEFAULT_SEGMENTS_AROUND
}

/// Default latitude ring count for spheres.
#[wasm_bindgen]
pub fn default_segments_down() -> u32 {
    DEFAULT_SEGMENTS_DOWN
}

/// Builds the 24-vertex unit box.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_box();
/// // console.log(mesh.vertex_count, mesh.triangle_count); // 24, 12
/// ```
#[wasm_bindgen]
pub fn build_box() -> MeshHandle {
    MeshHandle::from(primitive_mesh::build_box())
}

/// Builds a unit sphere of `segments_around` columns and `segments_down`
/// rings.
///
/// For Rust tests, prefer `build_sphere_internal`, which exposes Rust error
/// types directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when either count is zero.
#[wasm_bindgen]
pub fn build_sphere(segments_around: u32, segments_down: u32) -> Result<MeshHandle, JsValue> {
    build_sphere_internal(segments_around, segments_down)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`build_sphere`].
///
/// # Examples
/// ```
/// let err = primitive_mesh_wasm::build_sphere_internal(0, 4).unwrap_err();
/// assert!(err.to_string().contains("segments_around=0"));
/// ```
pub fn build_sphere_internal(
    segments_around: u32,
    segments_down: u32,
) -> Result<MeshHandle, MeshError> {
    primitive_mesh::build_sphere(segments_around, segments_down).map(MeshHandle::from)
}
