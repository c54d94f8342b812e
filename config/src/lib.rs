//! # Config Crate
//!
//! Centralized configuration constants for the procedural mesh pipeline.
//! Tessellation defaults, animation bounds and numeric tolerances live here
//! so the mesh builders, the animator and the WASM surface agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PULSE_MAX_SCALE, PULSE_MIN_SCALE, UNIT_LENGTH_TOLERANCE};
//!
//! // The pulse oscillates between the two bounds.
//! assert!(PULSE_MIN_SCALE < PULSE_MAX_SCALE);
//!
//! // Sphere corners are unit vectors within tolerance.
//! let length: f32 = 1.0 + 1e-7;
//! assert!((length - 1.0).abs() < UNIT_LENGTH_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Tunable groups are built through checked constructors

pub mod constants;

#[cfg(test)]
mod tests;
