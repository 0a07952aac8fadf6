//! Shape primitives attachable to scene objects.
//!
//! Extending the scene:
//! - add a new payload module here
//! - add a new variant to [`Shape`]
//! - handle the variant in `geometry::extract_edges` (the match is
//!   exhaustive, the compiler will point at it)

mod box_shape;
mod polygon;
mod polyline;

pub use box_shape::BoxShape;
pub use polygon::PolygonShape;
pub use polyline::PolylineShape;

/// 2D outline primitive, tagged by kind.
///
/// Each variant carries only the data that kind needs. `Other` stands in for
/// collider kinds the tracer has no outline representation for (circles,
/// capsules, tilemaps); they contribute zero edges rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Box(BoxShape),
    Polyline(PolylineShape),
    Polygon(PolygonShape),
    Other,
}
