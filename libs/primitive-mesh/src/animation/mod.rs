//! # Animation
//!
//! Per-frame vertex animation over previously built meshes.

mod buffer;
mod pulse;

pub use buffer::PositionBuffer;
pub use pulse::RadialPulseAnimator;
