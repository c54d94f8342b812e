//! Host-driven frame loop.

use super::{Instance, RenderRuntime};
use crate::animation::RadialPulseAnimator;
use crate::mesh::Mesh;
use config::constants::MILLIS_TO_SECONDS;

struct AnimatedGeometry<H> {
    animator: RadialPulseAnimator,
    handle: H,
}

/// Owns the runtime and the scene's geometry handles, and advances every
/// bound animation once per host refresh.
///
/// The host calls [`FrameLoop::tick`] from its refresh callback; the loop
/// never schedules itself.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::animation::RadialPulseAnimator;
/// use primitive_mesh::primitives::build_sphere;
/// use primitive_mesh::runtime::{FrameLoop, Instance, StagingRuntime};
///
/// let sphere = build_sphere(8, 4).unwrap();
/// let animator = RadialPulseAnimator::new(&sphere, 8).unwrap();
///
/// let mut frames = FrameLoop::new(StagingRuntime::default());
/// frames.spawn_animated(&sphere, animator, &Instance::default());
/// assert_eq!(frames.tick(1500.0), 1.5);
/// assert_eq!(frames.frame_count(), 1);
/// ```
pub struct FrameLoop<R: RenderRuntime> {
    runtime: R,
    statics: Vec<R::Handle>,
    animated: Vec<AnimatedGeometry<R::Handle>>,
    frame_count: u64,
}

impl<R: RenderRuntime> FrameLoop<R> {
    /// Creates an empty loop around `runtime`.
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            statics: Vec::new(),
            animated: Vec::new(),
            frame_count: 0,
        }
    }

    /// Uploads geometry that never changes after construction.
    pub fn spawn(&mut self, mesh: &Mesh, instance: &Instance) -> &R::Handle {
        let handle = self.runtime.upload(mesh, instance);
        self.statics.push(handle);
        &self.statics[self.statics.len() - 1]
    }

    /// Uploads an animated sphere and binds its animator to the loop.
    ///
    /// `mesh` must be the sphere the animator was built from. Each bound
    /// animator advances on every tick.
    pub fn spawn_animated(
        &mut self,
        mesh: &Mesh,
        mut animator: RadialPulseAnimator,
        instance: &Instance,
    ) -> &R::Handle {
        let handle = self.runtime.upload(mesh, instance);
        // The upload carried the initial positions.
        animator.buffer_mut().take_dirty();

        self.animated.push(AnimatedGeometry { animator, handle });
        &self.animated[self.animated.len() - 1].handle
    }

    /// Runs one frame for a host timestamp in milliseconds.
    ///
    /// Converts the timestamp to seconds, advances every animator and
    /// re-uploads its positions. Returns the time in seconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let time = timestamp_ms * MILLIS_TO_SECONDS;

        for animated in &mut self.animated {
            animated.animator.advance(time);
            if animated.animator.buffer_mut().take_dirty() {
                self.runtime
                    .update_positions(&animated.handle, animated.animator.positions());
            }
        }

        self.frame_count += 1;
        time
    }

    /// Number of frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Handles of static geometry, in spawn order.
    pub fn static_handles(&self) -> &[R::Handle] {
        &self.statics
    }

    /// Animated geometry handles with their animators, in spawn order.
    pub fn animated(&self) -> impl Iterator<Item = (&R::Handle, &RadialPulseAnimator)> {
        self.animated
            .iter()
            .map(|animated| (&animated.handle, &animated.animator))
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Consumes the loop and returns the runtime.
    pub fn into_runtime(self) -> R {
        self.runtime
    }
}
