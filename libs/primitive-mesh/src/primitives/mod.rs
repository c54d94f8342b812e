//! # Primitives
//!
//! Mesh builders for the unit box and the disjoint-quad UV sphere.

pub mod cube;
pub mod sphere;

pub use cube::build_box;
pub use sphere::build_sphere;
