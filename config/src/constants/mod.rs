//! Centralized configuration values shared across the procedural mesh
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of longitude columns around the sphere.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS_AROUND;
/// assert!(DEFAULT_SEGMENTS_AROUND >= 3);
/// ```
pub const DEFAULT_SEGMENTS_AROUND: u32 = 24;

/// Default number of latitude rings from pole to pole.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS_DOWN;
/// assert!(DEFAULT_SEGMENTS_DOWN >= 2);
/// ```
pub const DEFAULT_SEGMENTS_DOWN: u32 = 16;

/// Vertices emitted for every quad. Quads never share vertices.
pub const VERTICES_PER_QUAD: u32 = 4;

/// Indices emitted for every quad (two triangles).
pub const INDICES_PER_QUAD: u32 = 6;

/// Vertex count of the unit box: four corners on each of six faces.
///
/// # Examples
/// ```
/// use config::constants::{BOX_VERTEX_COUNT, VERTICES_PER_QUAD};
/// assert_eq!(BOX_VERTEX_COUNT, 6 * VERTICES_PER_QUAD as usize);
/// ```
pub const BOX_VERTEX_COUNT: usize = 24;

/// Index count of the unit box: two triangles on each of six faces.
pub const BOX_INDEX_COUNT: usize = 36;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Smallest radial scale reached by the pulse animation.
///
/// # Examples
/// ```
/// use config::constants::PULSE_MIN_SCALE;
/// assert_eq!(PULSE_MIN_SCALE, 1.0);
/// ```
pub const PULSE_MIN_SCALE: f32 = 1.0;

/// Largest radial scale reached by the pulse animation.
///
/// # Examples
/// ```
/// use config::constants::{PULSE_MAX_SCALE, PULSE_MIN_SCALE};
/// assert!(PULSE_MAX_SCALE > PULSE_MIN_SCALE);
/// ```
pub const PULSE_MAX_SCALE: f32 = 1.4;

/// Factor converting host frame timestamps (milliseconds) to seconds.
///
/// # Examples
/// ```
/// use config::constants::MILLIS_TO_SECONDS;
/// assert_eq!(1500.0 * MILLIS_TO_SECONDS, 1.5);
/// ```
pub const MILLIS_TO_SECONDS: f64 = 0.001;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when checking that generated normals are unit length.
///
/// # Examples
/// ```
/// use config::constants::UNIT_LENGTH_TOLERANCE;
/// assert!(UNIT_LENGTH_TOLERANCE <= 1.0e-5);
/// ```
pub const UNIT_LENGTH_TOLERANCE: f32 = 1.0e-5;

// =============================================================================
// CONFIGURATION GROUPS
// =============================================================================

/// Grid resolution of a UV sphere.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let config = TessellationConfig::default();
/// assert_eq!(config.quad_count(), 24 * 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationConfig {
    /// Longitude columns around the vertical axis.
    pub segments_around: u32,
    /// Latitude rings from pole to pole.
    pub segments_down: u32,
}

impl TessellationConfig {
    /// Builds a tessellation, rejecting zero-sized grids.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, TessellationConfig};
    /// assert!(TessellationConfig::new(8, 4).is_ok());
    /// assert_eq!(
    ///     TessellationConfig::new(0, 4).unwrap_err(),
    ///     ConfigError::InvalidSegments { segments_around: 0, segments_down: 4 }
    /// );
    /// ```
    pub fn new(segments_around: u32, segments_down: u32) -> Result<Self, ConfigError> {
        if segments_around == 0 || segments_down == 0 {
            return Err(ConfigError::InvalidSegments {
                segments_around,
                segments_down,
            });
        }
        Ok(Self {
            segments_around,
            segments_down,
        })
    }

    /// Number of quads in the latitude/longitude grid.
    pub fn quad_count(&self) -> usize {
        self.segments_around as usize * self.segments_down as usize
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            segments_around: DEFAULT_SEGMENTS_AROUND,
            segments_down: DEFAULT_SEGMENTS_DOWN,
        }
    }
}

/// Bounds of the radial pulse animation.
///
/// # Examples
/// ```
/// use config::constants::PulseConfig;
/// let pulse = PulseConfig::default();
/// assert_eq!(pulse.min_scale, 1.0);
/// assert_eq!(pulse.max_scale, 1.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseConfig {
    /// Scale applied when the oscillation is at its trough.
    pub min_scale: f32,
    /// Scale applied when the oscillation is at its crest.
    pub max_scale: f32,
}

impl PulseConfig {
    /// Builds pulse bounds, requiring `0 < min_scale <= max_scale`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PulseConfig;
    /// assert!(PulseConfig::new(0.5, 2.0).is_ok());
    /// assert!(PulseConfig::new(2.0, 0.5).is_err());
    /// ```
    pub fn new(min_scale: f32, max_scale: f32) -> Result<Self, ConfigError> {
        let unordered = min_scale.is_nan() || max_scale.is_nan();
        if unordered || min_scale <= 0.0 || max_scale < min_scale {
            return Err(ConfigError::InvalidScaleRange {
                min_scale,
                max_scale,
            });
        }
        Ok(Self {
            min_scale,
            max_scale,
        })
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            min_scale: PULSE_MIN_SCALE,
            max_scale: PULSE_MAX_SCALE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when either grid dimension is zero.
    InvalidSegments {
        /// Requested longitude columns.
        segments_around: u32,
        /// Requested latitude rings.
        segments_down: u32,
    },
    /// Raised when the pulse bounds are not positive and ordered.
    InvalidScaleRange {
        /// Requested lower bound.
        min_scale: f32,
        /// Requested upper bound.
        max_scale: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments {
                segments_around,
                segments_down,
            } => write!(
                f,
                "segments must be positive: around={segments_around}, down={segments_down}"
            ),
            ConfigError::InvalidScaleRange {
                min_scale,
                max_scale,
            } => write!(
                f,
                "pulse scale range must satisfy 0 < min <= max: min={min_scale}, max={max_scale}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
