//! CPU→GPU record packing.

use bytemuck::{Pod, Zeroable};

use crate::geometry::{Edge, GeometryRecord};

/// GPU layout of one edge: two packed points, 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuEdge {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

/// GPU layout of one geometry record: 10 floats + 2 uints, 48 bytes.
///
/// Field order matches the shader-side struct; every field is 4-byte aligned
/// so `repr(C)` introduces no padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuGeometry {
    pub bounds_min: [f32; 2],
    pub bounds_max: [f32; 2],
    pub roughness: f32,
    pub transmission: f32,
    pub emission: f32,
    pub color: [f32; 3],
    pub edge_start: u32,
    pub edge_count: u32,
}

impl From<Edge> for GpuEdge {
    #[inline]
    fn from(e: Edge) -> Self {
        Self {
            start: [e.start.x, e.start.y],
            end: [e.end.x, e.end.y],
        }
    }
}

impl From<&GeometryRecord> for GpuGeometry {
    #[inline]
    fn from(r: &GeometryRecord) -> Self {
        Self {
            bounds_min: [r.bounds.min.x, r.bounds.min.y],
            bounds_max: [r.bounds.max.x, r.bounds.max.y],
            roughness: r.material.roughness,
            transmission: r.material.transmission,
            emission: r.material.emission,
            color: [r.material.color.r, r.material.color.g, r.material.color.b],
            edge_start: r.edge_start,
            edge_count: r.edge_count,
        }
    }
}

/// Packs collected records into their GPU layout, preserving order.
pub fn pack_records(records: &[GeometryRecord]) -> Vec<GpuGeometry> {
    records.iter().map(GpuGeometry::from).collect()
}

/// Packs the shared edge list into its GPU layout, preserving order.
pub fn pack_edges(edges: &[Edge]) -> Vec<GpuEdge> {
    edges.iter().copied().map(GpuEdge::from).collect()
}
