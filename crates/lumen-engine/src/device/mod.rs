//! Compute device shim.
//!
//! The uploader talks to the GPU through [`ComputeDevice`], a small named
//! buffer/uniform/texture interface plus an opaque "run compute pass" call.
//! [`WgpuDevice`] is the headless wgpu implementation; tests substitute a
//! recording double.

mod gpu;
mod shim;

pub use gpu::WgpuDevice;
pub use shim::{BufferId, ComputeDevice, Scalar, SurfaceId};
