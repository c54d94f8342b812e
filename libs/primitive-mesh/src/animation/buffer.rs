//! Live vertex position storage shared with the renderer.

/// A position buffer the renderer mirrors on the GPU.
///
/// The buffer is sized once and never reallocated; writers mark it dirty
/// after every mutation and the upload step consumes the flag with
/// [`PositionBuffer::take_dirty`].
///
/// # Example
///
/// ```rust
/// use primitive_mesh::animation::PositionBuffer;
///
/// let mut buffer = PositionBuffer::new(vec![0.0; 6]);
/// assert!(buffer.take_dirty()); // fresh buffers need a first upload
/// assert!(!buffer.take_dirty());
/// buffer.mark_dirty();
/// assert!(buffer.is_dirty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBuffer {
    data: Vec<f32>,
    dirty: bool,
}

impl PositionBuffer {
    /// Wraps packed `[x, y, z, ...]` data. The buffer starts dirty.
    pub fn new(data: Vec<f32>) -> Self {
        Self { data, dirty: true }
    }

    /// Returns the packed positions.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access for in-place updates. Callers must call
    /// [`PositionBuffer::mark_dirty`] once they are done writing.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of `f32` components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer holds no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flags the buffer for re-upload.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns true if the buffer changed since the last upload.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
