//! Surface appearance handed to the renderer alongside each mesh.
//!
//! A material is a flat color with an optional texture. Texture loading is
//! the renderer's concern; this module only tracks which texture (if any) was
//! resolved and never lets a failed load stop the scene from rendering.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Linear RGB color with components in `[0, 1]`.
///
/// # Examples
/// ```
/// use primitive_mesh::material::Color;
/// let teal = Color::from_hex(0x44aa88);
/// assert_eq!(teal.to_hex(), 0x44aa88);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Creates a color from components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Packs the color back into `0xRRGGBB`.
    pub fn to_hex(self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Opaque handle to a texture resolved by a [`TextureSource`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextureRef {
    pub id: u32,
    pub path: String,
}

/// Error raised when a texture cannot be resolved.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TextureError {
    /// The requested path is unknown to the source.
    #[error("texture not found: {path}")]
    NotFound { path: String },
}

/// Resolves texture paths to renderer handles.
pub trait TextureSource {
    /// Looks up the texture stored at `path`.
    fn load(&self, path: &str) -> Result<TextureRef, TextureError>;
}

/// In-memory texture registry intended for tests and headless hosts.
///
/// # Examples
/// ```
/// use primitive_mesh::material::{InMemoryTextures, TextureSource};
/// let mut textures = InMemoryTextures::default();
/// let id = textures.register("checker.png");
/// assert_eq!(textures.load("checker.png").unwrap().id, id);
/// assert!(textures.load("missing.png").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryTextures {
    textures: HashMap<String, u32>,
}

impl InMemoryTextures {
    /// Registers a path and returns its id. Re-registering returns the
    /// existing id.
    pub fn register(&mut self, path: impl Into<String>) -> u32 {
        let next = self.textures.len() as u32;
        *self.textures.entry(path.into()).or_insert(next)
    }
}

impl TextureSource for InMemoryTextures {
    fn load(&self, path: &str) -> Result<TextureRef, TextureError> {
        self.textures
            .get(path)
            .map(|&id| TextureRef {
                id,
                path: path.to_owned(),
            })
            .ok_or_else(|| TextureError::NotFound { path: path.into() })
    }
}

/// Color plus optional texture.
///
/// A material without a texture renders with its flat color.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub texture: Option<TextureRef>,
}

impl Material {
    /// Creates an untextured material.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            texture: None,
        }
    }

    /// Creates a material textured from `source`.
    ///
    /// A failed load is logged and the material falls back to its flat
    /// color; this never fails.
    pub fn with_texture(color: Color, source: &impl TextureSource, path: &str) -> Self {
        let texture = match source.load(path) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("{err}; rendering with flat color");
                None
            }
        };
        Self { color, texture }
    }

    /// Returns true if a texture was resolved.
    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }
}

#[cfg(test)]
mod tests;
