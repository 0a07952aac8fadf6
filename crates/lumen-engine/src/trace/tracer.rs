use anyhow::Result;

use crate::collect::CollectedGeometry;
use crate::coords::Vec2;
use crate::device::{ComputeDevice, SurfaceId};

use super::Camera;
use super::pack::{GpuEdge, GpuGeometry, pack_edges, pack_records};

/// Work-group tile edge in pixels. One compute work-group shades one
/// `TILE_SIZE`×`TILE_SIZE` region of the output image; the dispatch grid is
/// sized to cover the resolution in these tiles.
pub const TILE_SIZE: u32 = 8;

/// Shader slot of the output storage texture.
const OUTPUT_SLOT: u32 = 0;
/// Shader slot of the geometry record buffer.
const GEOMETRY_SLOT: u32 = 1;
/// Shader slot of the shared edge buffer.
const EDGE_SLOT: u32 = 2;

/// Scalar tracer settings the host may change between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayTracerSettings {
    /// Rays cast per pixel.
    pub ray_count: u32,
}

impl Default for RayTracerSettings {
    fn default() -> Self {
        Self { ray_count: 1 }
    }
}

/// Change-tracked uploader and dispatcher.
///
/// Owns the previous frame's observed state (resolution, camera, settings)
/// and, per [`frame`](Self::frame), re-uploads only the device state whose
/// inputs changed. Geometry buffers are the exception: they are rebuilt from
/// scratch by collection every frame and re-uploaded unconditionally, so no
/// content comparison is attempted for them.
///
/// Stored state is refreshed after every frame whether or not any group
/// fired, so comparisons never run against stale values.
#[derive(Debug, Default)]
pub struct RayTracer {
    pub settings: RayTracerSettings,

    output: Option<SurfaceId>,

    // Previous-frame values the upload groups compare against. `None` until
    // the first frame, which therefore uploads everything.
    last_resolution: Option<(u32, u32)>,
    last_camera: Option<(Vec2, f32)>,
    last_ray_count: Option<u32>,
}

impl RayTracer {
    pub fn new(settings: RayTracerSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Runs one frame: evaluates the four upload groups, dispatches the
    /// compute grid, and refreshes the stored frame state.
    ///
    /// Device failures abort the frame and propagate unmodified; stored state
    /// is then left untouched so the next frame retries the same uploads.
    pub fn frame<D: ComputeDevice + ?Sized>(
        &mut self,
        device: &mut D,
        camera: Camera,
        resolution: (u32, u32),
        geometry: &CollectedGeometry,
    ) -> Result<()> {
        self.update_output_surface(device, resolution)?;
        self.update_camera(device, camera, resolution);
        self.update_settings(device);
        self.upload_geometry(device, geometry)?;

        device.dispatch(
            resolution.0.div_ceil(TILE_SIZE),
            resolution.1.div_ceil(TILE_SIZE),
            1,
        )?;

        self.last_resolution = Some(resolution);
        self.last_camera = Some((camera.position, camera.size));
        self.last_ray_count = Some(self.settings.ray_count);
        Ok(())
    }

    /// Copies the traced image onto `destination`.
    ///
    /// Before the first successful [`frame`](Self::frame) there is no output
    /// surface yet; `source` is passed through unmodified instead.
    pub fn present<D: ComputeDevice + ?Sized>(
        &self,
        device: &mut D,
        source: SurfaceId,
        destination: SurfaceId,
    ) -> Result<()> {
        device.blit(self.output.unwrap_or(source), destination)
    }

    /// Group 1: output surface + resolution uniform, on resolution change.
    fn update_output_surface<D: ComputeDevice + ?Sized>(
        &mut self,
        device: &mut D,
        resolution: (u32, u32),
    ) -> Result<()> {
        if self.last_resolution == Some(resolution) {
            return Ok(());
        }

        let (width, height) = resolution;
        log::debug!("provisioning {width}x{height} output surface");

        let surface = device.create_surface(width, height)?;
        device.bind_texture(OUTPUT_SLOT, "output", surface);
        device.bind_vector("resolution", &[width as f32, height as f32]);
        self.output = Some(surface);
        Ok(())
    }

    /// Group 2: camera uniforms, on position or projection-size change.
    /// Aspect is recomputed whenever the group fires.
    fn update_camera<D: ComputeDevice + ?Sized>(
        &mut self,
        device: &mut D,
        camera: Camera,
        resolution: (u32, u32),
    ) {
        if self.last_camera == Some((camera.position, camera.size)) {
            return;
        }

        let aspect = resolution.0 as f32 / resolution.1.max(1) as f32;
        device.bind_scalar("camera_size", camera.size.into());
        device.bind_scalar("camera_aspect", aspect.into());
        device.bind_vector("camera_position", &[camera.position.x, camera.position.y]);
    }

    /// Group 3: scalar settings, on change.
    fn update_settings<D: ComputeDevice + ?Sized>(&mut self, device: &mut D) {
        if self.last_ray_count == Some(self.settings.ray_count) {
            return;
        }

        device.bind_scalar("ray_count", self.settings.ray_count.into());
    }

    /// Group 4: geometry buffers, every frame.
    ///
    /// Buffers are allocated exactly sized to this frame's counts and fully
    /// re-uploaded; collection rebuilds the lists each frame regardless, so
    /// content change detection buys nothing here.
    fn upload_geometry<D: ComputeDevice + ?Sized>(
        &mut self,
        device: &mut D,
        geometry: &CollectedGeometry,
    ) -> Result<()> {
        let records = pack_records(geometry.records());
        let edges = pack_edges(geometry.edges());

        let record_buffer = device.allocate_buffer(records.len(), size_of::<GpuGeometry>())?;
        device.upload(record_buffer, bytemuck::cast_slice(&records))?;
        device.bind_buffer(GEOMETRY_SLOT, record_buffer);

        let edge_buffer = device.allocate_buffer(edges.len(), size_of::<GpuEdge>())?;
        device.upload(edge_buffer, bytemuck::cast_slice(&edges))?;
        device.bind_buffer(EDGE_SLOT, edge_buffer);

        device.bind_scalar("object_count", (records.len() as u32).into());
        Ok(())
    }
}
