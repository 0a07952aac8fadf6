//! Lumen engine crate.
//!
//! This crate owns the CPU side of a compute-shader 2D ray tracer: it walks a
//! scene of 2D collider outlines each frame, flattens them into GPU-consumable
//! edge/geometry buffers, and pushes only the device state that actually
//! changed since the previous frame.

pub mod device;
pub mod trace;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod collect;
pub mod scene;
