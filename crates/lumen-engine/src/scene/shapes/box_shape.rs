use crate::coords::Vec2;

/// Axis-aligned box outline in local space.
///
/// `offset` shifts the box center away from the object origin, like a collider
/// offset. World-space orientation comes from the object transform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxShape {
    pub half_extents: Vec2,
    pub offset: Vec2,
}

impl BoxShape {
    #[inline]
    pub const fn new(half_extents: Vec2, offset: Vec2) -> Self {
        Self {
            half_extents,
            offset,
        }
    }

    /// Box of the given full size, centered on the object origin.
    #[inline]
    pub fn centered(size: Vec2) -> Self {
        Self {
            half_extents: size * 0.5,
            offset: Vec2::zero(),
        }
    }

    /// Local-space corners in top-left, top-right, bottom-right, bottom-left
    /// order. Edge extraction walks these in sequence to close the loop.
    #[inline]
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.half_extents;
        let o = self.offset;
        [
            Vec2::new(-h.x, h.y) + o,
            Vec2::new(h.x, h.y) + o,
            Vec2::new(h.x, -h.y) + o,
            Vec2::new(-h.x, -h.y) + o,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_tl_tr_br_bl() {
        let b = BoxShape::new(Vec2::new(1.0, 2.0), Vec2::zero());
        let [tl, tr, br, bl] = b.corners();
        assert_eq!(tl, Vec2::new(-1.0, 2.0));
        assert_eq!(tr, Vec2::new(1.0, 2.0));
        assert_eq!(br, Vec2::new(1.0, -2.0));
        assert_eq!(bl, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn offset_shifts_all_corners() {
        let b = BoxShape::new(Vec2::splat(1.0), Vec2::new(10.0, 0.0));
        for c in b.corners() {
            assert!(c.x >= 9.0 && c.x <= 11.0);
        }
    }

    #[test]
    fn centered_halves_size() {
        let b = BoxShape::centered(Vec2::new(4.0, 6.0));
        assert_eq!(b.half_extents, Vec2::new(2.0, 3.0));
        assert_eq!(b.offset, Vec2::zero());
    }
}
