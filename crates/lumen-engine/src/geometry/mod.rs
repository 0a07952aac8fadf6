//! Shape-to-edge extraction.
//!
//! Converts the scene's local-space shape primitives into flat world-space
//! edge lists plus the per-object bookkeeping records the GPU buffers are
//! packed from.

mod edge;
mod extract;
mod record;

pub use edge::Edge;
pub use extract::extract_edges;
pub use record::GeometryRecord;
