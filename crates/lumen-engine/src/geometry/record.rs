use core::ops::Range;

use crate::coords::Aabb;
use crate::scene::RayMaterial;

/// Per-object summary packed into the GPU geometry buffer.
///
/// `edge_start..edge_start + edge_count` indexes the shared edge list the
/// record was collected against. Ranges from one collection pass never
/// overlap and together cover the whole list.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeometryRecord {
    pub bounds: Aabb,
    pub material: RayMaterial,
    pub edge_start: u32,
    pub edge_count: u32,
}

impl GeometryRecord {
    /// Index range into the shared edge list.
    #[inline]
    pub fn edge_range(&self) -> Range<usize> {
        let start = self.edge_start as usize;
        start..start + self.edge_count as usize
    }
}
