use crate::coords::Vec2;

/// Open chain of line segments in local space.
///
/// N points yield N−1 edges; the chain is never closed. Fewer than two points
/// is a valid (empty) outline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolylineShape {
    pub points: Vec<Vec2>,
}

impl PolylineShape {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}
