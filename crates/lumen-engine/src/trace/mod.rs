//! Change-tracked GPU upload + dispatch.
//!
//! [`RayTracer`] sits between the collector's flat lists and the device shim:
//! each frame it decides which of the four upload groups (output surface,
//! camera, settings, geometry) actually changed, pushes only those, dispatches
//! the compute grid, and blits the result out.

mod camera;
mod pack;
mod tracer;

pub use camera::Camera;
pub use pack::{GpuEdge, GpuGeometry, pack_edges, pack_records};
pub use tracer::{RayTracer, RayTracerSettings, TILE_SIZE};
