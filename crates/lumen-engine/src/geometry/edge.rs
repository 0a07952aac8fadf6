use crate::coords::Vec2;

/// Single world-space line segment.
///
/// Edges are immutable once emitted and owned by the frame's shared edge
/// list; records refer to them by index range only.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Edge {
    pub start: Vec2,
    pub end: Vec2,
}

impl Edge {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}
