//! Scene-side description types.
//!
//! Responsibilities:
//! - describe what the host scene graph hands the tracer per object
//!   (outline shape + transform + material)
//! - keep shape-specific payloads isolated per shape file under
//!   `scene::shapes`
//!
//! Nothing here touches the GPU; these are plain value types the collector
//! consumes each frame.

mod material;
mod object;

pub mod shapes;

pub use material::{RayMaterial, Rgb};
pub use object::SceneObject;
pub use shapes::Shape;
