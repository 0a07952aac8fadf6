//! Per-frame scene collection.
//!
//! Responsibilities:
//! - filter the full object population down to relevant objects (shape and
//!   material both present) — a fresh filter every pass, never a diff
//! - run edge extraction per object into one shared, order-preserving edge
//!   list, recording each object's start/count range

use crate::geometry::{Edge, GeometryRecord, extract_edges};
use crate::scene::SceneObject;

/// Frame-scoped output of a collection pass: one record per relevant object
/// plus the shared edge list all records index into.
///
/// Contents are fully rebuilt by [`collect`](Self::collect); nothing persists
/// across frames except the allocations. After a pass:
/// - per-record `edge_start..edge_start + edge_count` ranges partition the
///   edge list with no gaps or overlaps, in record order
/// - the sum of `edge_count` over all records equals `edges().len()`
#[derive(Debug, Default)]
pub struct CollectedGeometry {
    records: Vec<GeometryRecord>,
    edges: Vec<Edge>,
}

impl CollectedGeometry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both lists. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
        self.edges.clear();
    }

    /// Rebuilds both lists from the current object population.
    ///
    /// Objects missing a shape or a material are skipped before any record is
    /// created; no partial records exist. Iteration order follows `objects`,
    /// so an unchanged scene collects to identical content.
    pub fn collect(&mut self, objects: &[SceneObject]) {
        self.clear();

        for obj in objects {
            let (Some(shape), Some(material)) = (&obj.shape, obj.material) else {
                continue;
            };

            let edge_start = self.edges.len() as u32;
            let edge_count = extract_edges(shape, &obj.transform, &mut self.edges);

            self.records.push(GeometryRecord {
                bounds: obj.world_bounds,
                material,
                edge_start,
                edge_count,
            });
        }
    }

    /// One record per relevant object, in collection order.
    #[inline]
    pub fn records(&self) -> &[GeometryRecord] {
        &self.records
    }

    /// Shared world-space edge list all records index into.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
