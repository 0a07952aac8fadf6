//! Math primitives shared across the pipeline.
//!
//! Convention:
//! - all geometry handed to the tracer is in world units, +Y up
//! - transforms apply scale, then rotation, then translation

mod aabb;
mod transform;
mod vec2;

pub use aabb::Aabb;
pub use transform::Transform2;
pub use vec2::Vec2;
