//! # Scene
//!
//! JavaScript-owned scene: static boxes plus pulsing spheres, staged in
//! memory and pulled by the host after every `tick`.
//!
//! ```text
//! requestAnimationFrame(t) → scene.tick(t) → scene.take_dirty(id)
//!                                          → scene.positions(id) → BufferAttribute
//! ```

use config::constants::{
    ConfigError, PulseConfig, TessellationConfig, DEFAULT_SEGMENTS_AROUND, DEFAULT_SEGMENTS_DOWN,
    PULSE_MAX_SCALE, PULSE_MIN_SCALE,
};
use primitive_mesh::material::{Color, InMemoryTextures, Material};
use primitive_mesh::runtime::{GeometryHandle, StagingRuntime, UploadedGeometry};
use primitive_mesh::{build_box, FrameLoop, Instance, MeshError, RadialPulseAnimator};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::mesh_handle::MeshHandle;

/// Errors surfaced by [`Scene`] operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The options JSON could not be parsed.
    #[error("invalid sphere options: {0}")]
    Options(#[from] serde_json::Error),

    /// Tessellation or pulse bounds were rejected.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// No geometry was staged under this id.
    #[error("unknown geometry id {0}")]
    UnknownGeometry(u32),

    /// A value could not be encoded for the host.
    #[error("failed to serialize: {0}")]
    Serialize(serde_json::Error),
}

impl From<ConfigError> for SceneError {
    fn from(err: ConfigError) -> Self {
        Self::Mesh(MeshError::from(err))
    }
}

/// Options accepted by [`Scene::add_pulsing_sphere`].
///
/// Missing fields take the crate defaults, so `{}` and the empty string both
/// describe the default sphere.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SphereOptions {
    pub segments_around: u32,
    pub segments_down: u32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            segments_around: DEFAULT_SEGMENTS_AROUND,
            segments_down: DEFAULT_SEGMENTS_DOWN,
            min_scale: PULSE_MIN_SCALE,
            max_scale: PULSE_MAX_SCALE,
        }
    }
}

impl SphereOptions {
    /// Parses options from JSON. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Validated grid dimensions.
    pub fn tessellation(&self) -> Result<TessellationConfig, ConfigError> {
        TessellationConfig::new(self.segments_around, self.segments_down)
    }

    /// Validated pulse bounds.
    pub fn pulse(&self) -> Result<PulseConfig, ConfigError> {
        PulseConfig::new(self.min_scale, self.max_scale)
    }
}

/// A scene of primitives driven by the host's refresh callback.
///
/// Geometry ids are assigned in insertion order starting at zero.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const scene = new Scene();
/// scene.add_box(0x44aa88, 0, undefined);
/// const sphere = scene.add_pulsing_sphere('{"segments_around": 24}', 0x8844aa, 2);
///
/// function render(time) {
///   scene.tick(time);
///   if (scene.take_dirty(sphere)) {
///     geometry.attributes.position.array.set(scene.positions(sphere));
///     geometry.attributes.position.needsUpdate = true;
///   }
///   requestAnimationFrame(render);
/// }
/// ```
#[wasm_bindgen]
pub struct Scene {
    frames: FrameLoop<StagingRuntime>,
    textures: InMemoryTextures,
    /// Last revision handed to the host, per geometry id.
    synced: Vec<u64>,
}

#[wasm_bindgen]
impl Scene {
    /// Creates an empty scene.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            frames: FrameLoop::new(StagingRuntime::default()),
            textures: InMemoryTextures::default(),
            synced: Vec::new(),
        }
    }

    /// Registers a texture path the host has loaded and returns its id.
    pub fn register_texture(&mut self, path: &str) -> u32 {
        self.textures.register(path)
    }

    /// Adds a unit box at `offset_x` and returns its geometry id.
    ///
    /// An unregistered `texture_path` falls back to the flat color.
    pub fn add_box(&mut self, color: u32, offset_x: f32, texture_path: Option<String>) -> u32 {
        let color = Color::from_hex(color);
        let material = match texture_path.as_deref() {
            Some(path) => Material::with_texture(color, &self.textures, path),
            None => Material::solid(color),
        };
        let handle = *self
            .frames
            .spawn(&build_box(), &Instance::new(material, offset_x));
        self.track(handle)
    }

    /// Adds a pulsing sphere and returns its geometry id.
    ///
    /// Every sphere added keeps pulsing on each `tick`.
    ///
    /// # Errors
    /// Returns a JavaScript error when the options are malformed or out of
    /// range.
    pub fn add_pulsing_sphere(
        &mut self,
        options_json: &str,
        color: u32,
        offset_x: f32,
    ) -> Result<u32, JsValue> {
        self.add_pulsing_sphere_internal(options_json, color, offset_x)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Advances the scene to a host timestamp in milliseconds and returns
    /// the time in seconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        self.frames.tick(timestamp_ms)
    }

    /// Number of frames ticked so far.
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> f64 {
        self.frames.frame_count() as f64
    }

    /// Number of geometries in the scene.
    #[wasm_bindgen(getter)]
    pub fn geometry_count(&self) -> u32 {
        self.frames.runtime().len() as u32
    }

    /// Returns true once per position re-upload the host has not yet seen.
    pub fn take_dirty(&mut self, id: u32) -> bool {
        let Some(geometry) = self.frames.runtime().geometry(GeometryHandle(id)) else {
            return false;
        };
        let revisions = geometry.revisions;
        match self.synced.get_mut(id as usize) {
            Some(seen) if *seen != revisions => {
                *seen = revisions;
                true
            }
            _ => false,
        }
    }

    /// Returns the full buffers of a geometry.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn mesh(&self, id: u32) -> Result<MeshHandle, JsValue> {
        self.geometry(id).map(MeshHandle::from).map_err(to_js)
    }

    /// Returns the current positions of a geometry as a Float32Array.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn positions(&self, id: u32) -> Result<Vec<f32>, JsValue> {
        self.geometry(id)
            .map(|geometry| geometry.positions.clone())
            .map_err(to_js)
    }

    /// X offset of a geometry's instance.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn offset_x(&self, id: u32) -> Result<f32, JsValue> {
        self.geometry(id)
            .map(|geometry| geometry.instance.offset_x)
            .map_err(to_js)
    }

    /// Material color of a geometry as `0xRRGGBB`.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn color(&self, id: u32) -> Result<u32, JsValue> {
        self.geometry(id)
            .map(|geometry| geometry.instance.material.color.to_hex())
            .map_err(to_js)
    }

    /// Material of a geometry as JSON:
    /// `{"color": {"r", "g", "b"}, "texture": {"id", "path"} | null}`.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn material_json(&self, id: u32) -> Result<String, JsValue> {
        self.material_json_internal(id).map_err(to_js)
    }

    /// Texture id of a geometry, or `undefined` for a flat-colored one.
    ///
    /// # Errors
    /// Returns a JavaScript error for an unknown id.
    pub fn texture_id(&self, id: u32) -> Result<Option<u32>, JsValue> {
        self.geometry(id)
            .map(|geometry| geometry.instance.material.texture.as_ref().map(|t| t.id))
            .map_err(to_js)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Host-side twin of [`Scene::add_pulsing_sphere`] returning Rust errors.
    pub fn add_pulsing_sphere_internal(
        &mut self,
        options_json: &str,
        color: u32,
        offset_x: f32,
    ) -> Result<u32, SceneError> {
        let options = SphereOptions::from_json(options_json)?;
        let tessellation = options.tessellation()?;
        let pulse = options.pulse()?;

        let (sphere, animator) = RadialPulseAnimator::from_tessellation(tessellation)?;
        let animator = animator.with_pulse(pulse);
        let instance = Instance::new(Material::solid(Color::from_hex(color)), offset_x);

        let handle = *self.frames.spawn_animated(&sphere, animator, &instance);
        log::info!(
            "pulsing sphere {}x{} staged as geometry {}",
            tessellation.segments_around,
            tessellation.segments_down,
            handle.0
        );
        Ok(self.track(handle))
    }

    /// Staged geometry for `id`.
    pub fn geometry(&self, id: u32) -> Result<&UploadedGeometry, SceneError> {
        self.frames
            .runtime()
            .geometry(GeometryHandle(id))
            .ok_or(SceneError::UnknownGeometry(id))
    }

    /// Host-side twin of [`Scene::material_json`].
    pub fn material_json_internal(&self, id: u32) -> Result<String, SceneError> {
        let geometry = self.geometry(id)?;
        serde_json::to_string(&geometry.instance.material).map_err(SceneError::Serialize)
    }

    /// The animator driving geometry `id`, if it is a pulsing sphere.
    pub fn animator(&self, id: u32) -> Option<&RadialPulseAnimator> {
        self.frames
            .animated()
            .find(|(handle, _)| handle.0 == id)
            .map(|(_, animator)| animator)
    }

    fn track(&mut self, handle: GeometryHandle) -> u32 {
        self.synced.push(0);
        handle.0
    }
}

fn to_js(err: SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
