use crate::coords::{Aabb, Transform2, Vec2};

use super::material::RayMaterial;
use super::shapes::Shape;

/// Per-object record the host scene graph hands the collector.
///
/// This is a flattened snapshot, not a live handle: the host queries its own
/// object/component store once per frame and produces one of these per object.
/// An object is *relevant* to the tracer only when it carries both a shape and
/// a material; anything else is skipped during collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub shape: Option<Shape>,
    pub transform: Transform2,
    /// World-space axis-aligned bounds of the outline.
    ///
    /// [`SceneObject::new`] derives this from the transformed outline points.
    /// Hosts with engine-native collider bounds may overwrite the field; the
    /// pipeline uses whatever is stored here without recomputing.
    pub world_bounds: Aabb,
    pub material: Option<RayMaterial>,
}

impl SceneObject {
    /// Builds an object and derives `world_bounds` from the shape outline.
    ///
    /// Shapes without outline points (`Shape::Other`, empty point lists)
    /// get a degenerate box at the object translation.
    pub fn new(shape: Option<Shape>, transform: Transform2, material: Option<RayMaterial>) -> Self {
        let world_bounds = shape
            .as_ref()
            .and_then(|s| outline_bounds(s, &transform))
            .unwrap_or(Aabb::point(transform.translation));

        Self {
            shape,
            transform,
            world_bounds,
            material,
        }
    }

    /// True when the object carries both a shape and a material.
    #[inline]
    pub fn is_relevant(&self) -> bool {
        self.shape.is_some() && self.material.is_some()
    }
}

/// Axis-aligned bounds of the transformed outline points, or `None` when the
/// shape has none.
fn outline_bounds(shape: &Shape, transform: &Transform2) -> Option<Aabb> {
    let world = |p: Vec2| transform.transform_point(p);
    match shape {
        Shape::Box(b) => Aabb::from_points(b.corners().map(world)),
        Shape::Polyline(p) => Aabb::from_points(p.points.iter().copied().map(world)),
        Shape::Polygon(p) => Aabb::from_points(p.paths.iter().flatten().copied().map(world)),
        Shape::Other => None,
    }
}
