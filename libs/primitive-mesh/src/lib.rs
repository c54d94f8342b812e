//! # Primitive Mesh
//!
//! Procedural mesh generation and per-frame vertex animation.
//! Produces tightly packed vertex and index buffers ready for a GPU upload.
//!
//! ## Architecture
//!
//! ```text
//! primitives (build_box, build_sphere) → Mesh → RenderRuntime::upload
//!                                           ↓
//!                            RadialPulseAnimator::advance (per frame)
//!                                           ↓
//!                            RenderRuntime::update_positions
//! ```
//!
//! ## Components
//!
//! - **Box**: 24-vertex unit cube with flat per-face normals and UVs
//! - **Sphere**: disjoint-quad UV sphere of configurable tessellation
//! - **Radial pulse**: rescales every sphere vertex along its original normal
//! - **Frame loop**: host-driven tick that advances and re-uploads
//!
//! ## Usage
//!
//! ```rust
//! use primitive_mesh::{build_box, build_sphere, RadialPulseAnimator};
//!
//! let cube = build_box();
//! assert_eq!(cube.triangle_count(), 12);
//!
//! let sphere = build_sphere(24, 16)?;
//! let mut pulse = RadialPulseAnimator::new(&sphere, 24)?;
//! pulse.advance(0.5);
//! assert_eq!(pulse.positions().len(), sphere.positions().len());
//! # Ok::<(), primitive_mesh::MeshError>(())
//! ```

pub mod animation;
pub mod error;
pub mod material;
pub mod math;
pub mod mesh;
pub mod primitives;
pub mod runtime;

pub use animation::{PositionBuffer, RadialPulseAnimator};
pub use error::MeshError;
pub use material::{Color, Material};
pub use mesh::{Mesh, MeshSummary};
pub use primitives::{build_box, build_sphere};
pub use runtime::{FrameLoop, Instance, RenderRuntime};
