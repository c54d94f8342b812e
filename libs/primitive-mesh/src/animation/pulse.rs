//! # Radial Pulse
//!
//! Displaces every vertex of a disjoint-quad sphere along its original
//! normal by a travelling sinusoidal scale.

use super::buffer::PositionBuffer;
use crate::error::MeshError;
use crate::math::lerp;
use crate::mesh::Mesh;
use crate::primitives::build_sphere;
use config::constants::{PulseConfig, TessellationConfig, VERTICES_PER_QUAD};
use std::f64::consts::TAU;

/// Components of one quad's positions: four vertices of three floats.
const QUAD_COMPONENTS: usize = VERTICES_PER_QUAD as usize * 3;

/// Per-frame animator for a sphere built by [`build_sphere`].
///
/// Holds an immutable snapshot of the sphere's unit normals and the live
/// position buffer. Each [`advance`](Self::advance) rewrites every position
/// from the snapshot, so the result depends only on the time passed in.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::animation::RadialPulseAnimator;
/// use primitive_mesh::primitives::build_sphere;
///
/// let sphere = build_sphere(8, 4).unwrap();
/// let mut animator = RadialPulseAnimator::new(&sphere, 8).unwrap();
/// animator.advance(0.0);
/// assert!((animator.scale_at(0, 0.0) - 1.2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct RadialPulseAnimator {
    base_normals: Vec<f32>,
    buffer: PositionBuffer,
    segments_around: u32,
    pulse: PulseConfig,
}

impl RadialPulseAnimator {
    /// Binds an animator to a sphere mesh.
    ///
    /// The sphere's normals are copied as the displacement basis and its
    /// positions seed the live buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidTessellation`] if `segments_around` is zero
    /// or the vertex count is not a whole number of rings.
    pub fn new(sphere: &Mesh, segments_around: u32) -> Result<Self, MeshError> {
        let ring_vertices = (segments_around as usize)
            .checked_mul(VERTICES_PER_QUAD as usize)
            .unwrap_or(0);
        if ring_vertices == 0 || sphere.vertex_count() % ring_vertices != 0 {
            let segments_down = sphere.vertex_count().checked_div(ring_vertices).unwrap_or(0);
            return Err(MeshError::invalid_tessellation(
                segments_around,
                u32::try_from(segments_down).unwrap_or(u32::MAX),
            ));
        }

        log::debug!(
            "binding pulse animator to {} vertices ({} per ring)",
            sphere.vertex_count(),
            ring_vertices
        );

        Ok(Self {
            base_normals: sphere.normals().to_vec(),
            buffer: PositionBuffer::new(sphere.positions().to_vec()),
            segments_around,
            pulse: PulseConfig::default(),
        })
    }

    /// Builds a sphere for the given tessellation and binds an animator to it.
    ///
    /// Returns the static mesh (for the initial upload) with the animator.
    pub fn from_tessellation(tessellation: TessellationConfig) -> Result<(Mesh, Self), MeshError> {
        let sphere = build_sphere(tessellation.segments_around, tessellation.segments_down)?;
        let animator = Self::new(&sphere, tessellation.segments_around)?;
        Ok((sphere, animator))
    }

    /// Replaces the pulse bounds.
    pub fn with_pulse(mut self, pulse: PulseConfig) -> Self {
        self.pulse = pulse;
        self
    }

    /// Radial scale of the given vertex at `time_seconds`.
    ///
    /// `scale = lerp(min, max, 0.5 + 0.5 * sin(time + ring + angle))` where
    /// `ring` and `angle` locate the vertex's quad in the sphere grid.
    pub fn scale_at(&self, vertex: usize, time_seconds: f64) -> f32 {
        quad_scale(
            self.pulse,
            self.segments_around,
            vertex / VERTICES_PER_QUAD as usize,
            time_seconds,
        )
    }

    /// Recomputes every position for `time_seconds` and marks the buffer dirty.
    pub fn advance(&mut self, time_seconds: f64) {
        let Self {
            base_normals,
            buffer,
            segments_around,
            pulse,
        } = self;

        let quads = buffer
            .as_mut_slice()
            .chunks_exact_mut(QUAD_COMPONENTS)
            .zip(base_normals.chunks_exact(QUAD_COMPONENTS));
        for (quad, (dst, src)) in quads.enumerate() {
            let scale = quad_scale(*pulse, *segments_around, quad, time_seconds);
            for (p, n) in dst.iter_mut().zip(src) {
                *p = n * scale;
            }
        }

        buffer.mark_dirty();
        log::trace!("pulse advanced to t={time_seconds:.3}s");
    }

    /// Returns the live positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        self.buffer.as_slice()
    }

    /// Returns the normal snapshot taken at construction.
    #[inline]
    pub fn base_normals(&self) -> &[f32] {
        &self.base_normals
    }

    /// Returns the live buffer.
    pub fn buffer(&self) -> &PositionBuffer {
        &self.buffer
    }

    /// Returns the live buffer for the upload step.
    pub fn buffer_mut(&mut self) -> &mut PositionBuffer {
        &mut self.buffer
    }

    /// Number of animated vertices.
    pub fn vertex_count(&self) -> usize {
        self.base_normals.len() / 3
    }

    /// Longitude columns of the bound sphere.
    pub fn segments_around(&self) -> u32 {
        self.segments_around
    }

    /// Active pulse bounds.
    pub fn pulse(&self) -> PulseConfig {
        self.pulse
    }
}

/// Scale shared by the four vertices of `quad`.
fn quad_scale(pulse: PulseConfig, segments_around: u32, quad: usize, time_seconds: f64) -> f32 {
    let around = segments_around as usize;
    let ring = quad / around;
    let column = quad % around;
    let angle = column as f64 / around as f64 * TAU;
    let wave = 0.5 + 0.5 * (time_seconds + ring as f64 + angle).sin();
    lerp(pulse.min_scale, pulse.max_scale, wave as f32)
}
