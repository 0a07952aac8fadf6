use super::Vec2;

/// Axis-aligned bounding box in world units.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y` for every box produced by
/// the constructors here. Field access is public for hosts that bring their
/// own engine-side bounds; such boxes are used as-is.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Degenerate box covering a single point.
    #[inline]
    pub const fn point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest box covering all points, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Aabb::point(first);
        for p in iter {
            aabb = aabb.expand(p);
        }
        Some(aabb)
    }

    /// Smallest box covering `self` and `p`.
    #[inline]
    pub fn expand(self, p: Vec2) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Smallest box covering both boxes.
    #[inline]
    pub fn union(self, other: Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Closed containment: both edges inclusive.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.x <= self.max.x && p.y <= self.max.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── from_points ───────────────────────────────────────────────────────

    #[test]
    fn from_points_empty_is_none() {
        assert!(Aabb::from_points([]).is_none());
    }

    #[test]
    fn from_points_single_is_degenerate() {
        let b = Aabb::from_points([v(2.0, 3.0)]).unwrap();
        assert_eq!(b, Aabb::point(v(2.0, 3.0)));
    }

    #[test]
    fn from_points_covers_all() {
        let b = Aabb::from_points([v(1.0, -2.0), v(-3.0, 4.0), v(0.0, 0.0)]).unwrap();
        assert_eq!(b.min, v(-3.0, -2.0));
        assert_eq!(b.max, v(1.0, 4.0));
    }

    // ── expand / union ────────────────────────────────────────────────────

    #[test]
    fn expand_interior_point_is_identity() {
        let b = Aabb::new(v(0.0, 0.0), v(10.0, 10.0));
        assert_eq!(b.expand(v(5.0, 5.0)), b);
    }

    #[test]
    fn union_disjoint() {
        let a = Aabb::new(v(0.0, 0.0), v(1.0, 1.0));
        let b = Aabb::new(v(5.0, 5.0), v(6.0, 6.0));
        assert_eq!(a.union(b), Aabb::new(v(0.0, 0.0), v(6.0, 6.0)));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_edges_inclusive() {
        let b = Aabb::new(v(-1.0, -1.0), v(1.0, 1.0));
        assert!(b.contains(v(-1.0, -1.0)));
        assert!(b.contains(v(1.0, 1.0)));
        assert!(!b.contains(v(1.1, 0.0)));
    }
}
