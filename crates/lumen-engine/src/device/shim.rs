use anyhow::Result;

/// Handle to a device-side storage buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BufferId(pub u32);

/// Handle to a device-side image surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SurfaceId(pub u32);

/// Named scalar uniform value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Scalar {
    U32(u32),
    F32(f32),
}

impl From<u32> for Scalar {
    #[inline]
    fn from(v: u32) -> Self {
        Scalar::U32(v)
    }
}

impl From<f32> for Scalar {
    #[inline]
    fn from(v: f32) -> Self {
        Scalar::F32(v)
    }
}

/// Device-side state the uploader drives.
///
/// Semantics every implementation must provide:
/// - `allocate_buffer` with `element_count == 0` is valid; a dispatch over an
///   empty scene still runs
/// - bindings are sticky: a bound buffer/texture/uniform stays bound across
///   dispatches until rebound
/// - failures propagate to the caller unmodified; the uploader does not retry
pub trait ComputeDevice {
    /// Allocates a storage buffer for `element_count` records of
    /// `element_stride` bytes each. Previous buffers are not reused.
    fn allocate_buffer(&mut self, element_count: usize, element_stride: usize)
    -> Result<BufferId>;

    /// Uploads raw record bytes into a buffer, starting at offset zero.
    fn upload(&mut self, buffer: BufferId, data: &[u8]) -> Result<()>;

    /// Binds a buffer to a shader slot.
    fn bind_buffer(&mut self, slot: u32, buffer: BufferId);

    /// Binds a named scalar uniform.
    fn bind_scalar(&mut self, name: &str, value: Scalar);

    /// Binds a named float-vector uniform.
    fn bind_vector(&mut self, name: &str, values: &[f32]);

    /// Creates a writable image surface of the given pixel size.
    fn create_surface(&mut self, width: u32, height: u32) -> Result<SurfaceId>;

    /// Binds a surface to a shader slot under the given name.
    fn bind_texture(&mut self, slot: u32, name: &str, surface: SurfaceId);

    /// Launches the compute pass over the given work-group grid.
    fn dispatch(&mut self, groups_x: u32, groups_y: u32, groups_z: u32) -> Result<()>;

    /// Copies one surface onto another (presentation).
    fn blit(&mut self, source: SurfaceId, destination: SurfaceId) -> Result<()>;
}
