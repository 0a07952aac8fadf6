use crate::coords::Vec2;

/// One or more closed rings in local space.
///
/// Each path is an ordered point list whose last point connects back to its
/// first; paths are independent (holes, disjoint islands). A path of N points
/// yields N edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonShape {
    pub paths: Vec<Vec<Vec2>>,
}

impl PolygonShape {
    #[inline]
    pub fn new(paths: Vec<Vec<Vec2>>) -> Self {
        Self { paths }
    }

    /// Single-ring polygon.
    #[inline]
    pub fn from_ring(ring: Vec<Vec2>) -> Self {
        Self { paths: vec![ring] }
    }
}
