use crate::coords::Transform2;
use crate::scene::Shape;
use crate::scene::shapes::{BoxShape, PolygonShape, PolylineShape};

use super::Edge;

/// Appends the shape's world-space edges to `out` and returns how many were
/// appended.
///
/// Dispatch is exhaustive over the shape kind:
/// - box: 4 edges walking the corners TL→TR→BR→BL and closing back to TL
/// - polyline: N−1 edges for N points, open
/// - polygon: N edges per path of N points, each path closed independently
/// - other: nothing (outline-less collider kinds degrade to zero edges)
pub fn extract_edges(shape: &Shape, transform: &Transform2, out: &mut Vec<Edge>) -> u32 {
    let before = out.len();

    match shape {
        Shape::Box(b) => box_edges(b, transform, out),
        Shape::Polyline(p) => polyline_edges(p, transform, out),
        Shape::Polygon(p) => polygon_edges(p, transform, out),
        Shape::Other => {}
    }

    (out.len() - before) as u32
}

fn box_edges(shape: &BoxShape, transform: &Transform2, out: &mut Vec<Edge>) {
    let corners = shape.corners().map(|c| transform.transform_point(c));

    for i in 0..4 {
        out.push(Edge::new(corners[i], corners[(i + 1) % 4]));
    }
}

fn polyline_edges(shape: &PolylineShape, transform: &Transform2, out: &mut Vec<Edge>) {
    for pair in shape.points.windows(2) {
        out.push(Edge::new(
            transform.transform_point(pair[0]),
            transform.transform_point(pair[1]),
        ));
    }
}

fn polygon_edges(shape: &PolygonShape, transform: &Transform2, out: &mut Vec<Edge>) {
    for path in &shape.paths {
        for i in 0..path.len() {
            out.push(Edge::new(
                transform.transform_point(path[i]),
                transform.transform_point(path[(i + 1) % path.len()]),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    // ── box ───────────────────────────────────────────────────────────────

    #[test]
    fn unit_box_identity_edges() {
        let shape = Shape::Box(BoxShape::new(v(1.0, 1.0), Vec2::zero()));
        let mut out = Vec::new();
        let n = extract_edges(&shape, &Transform2::IDENTITY, &mut out);

        assert_eq!(n, 4);
        assert_eq!(
            out,
            vec![
                Edge::new(v(-1.0, 1.0), v(1.0, 1.0)),
                Edge::new(v(1.0, 1.0), v(1.0, -1.0)),
                Edge::new(v(1.0, -1.0), v(-1.0, -1.0)),
                Edge::new(v(-1.0, -1.0), v(-1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn box_edges_form_closed_loop() {
        let shape = Shape::Box(BoxShape::new(v(2.0, 0.5), v(1.0, -1.0)));
        let t = Transform2::new(v(3.0, 7.0), 0.3, v(1.5, 2.0));
        let mut out = Vec::new();
        extract_edges(&shape, &t, &mut out);

        for i in 0..4 {
            assert_close(out[i].end, out[(i + 1) % 4].start);
        }
    }

    #[test]
    fn box_corners_match_analytic_transform() {
        let half = v(1.0, 2.0);
        let offset = v(0.5, -0.5);
        let t = Transform2::new(v(-2.0, 4.0), core::f32::consts::FRAC_PI_3, v(2.0, 1.0));

        let shape = Shape::Box(BoxShape::new(half, offset));
        let mut out = Vec::new();
        extract_edges(&shape, &t, &mut out);

        let expected_tl = t.transform_point(v(-half.x, half.y) + offset);
        let expected_br = t.transform_point(v(half.x, -half.y) + offset);
        assert_close(out[0].start, expected_tl);
        assert_close(out[2].start, expected_br);
    }

    // ── polyline ──────────────────────────────────────────────────────────

    #[test]
    fn polyline_emits_n_minus_one_open_edges() {
        let pts = vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(2.0, 1.0)];
        let shape = Shape::Polyline(PolylineShape::new(pts.clone()));
        let mut out = Vec::new();
        let n = extract_edges(&shape, &Transform2::IDENTITY, &mut out);

        assert_eq!(n, 3);
        for (i, e) in out.iter().enumerate() {
            assert_eq!(e.start, pts[i]);
            assert_eq!(e.end, pts[i + 1]);
        }
        // Open chain: no edge returns to the first point.
        assert!(out.iter().all(|e| e.end != pts[0]));
    }

    #[test]
    fn polyline_with_fewer_than_two_points_is_empty() {
        let mut out = Vec::new();
        let one = Shape::Polyline(PolylineShape::new(vec![v(1.0, 1.0)]));
        assert_eq!(extract_edges(&one, &Transform2::IDENTITY, &mut out), 0);

        let none = Shape::Polyline(PolylineShape::default());
        assert_eq!(extract_edges(&none, &Transform2::IDENTITY, &mut out), 0);
        assert!(out.is_empty());
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn polygon_path_closes_back_to_first_point() {
        let ring = vec![v(0.0, 0.0), v(2.0, 0.0), v(1.0, 2.0)];
        let shape = Shape::Polygon(PolygonShape::from_ring(ring.clone()));
        let mut out = Vec::new();
        let n = extract_edges(&shape, &Transform2::IDENTITY, &mut out);

        assert_eq!(n as usize, ring.len());
        assert_eq!(out.last().unwrap().end, out[0].start);
    }

    #[test]
    fn polygon_paths_contribute_independently() {
        let outer = vec![v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)];
        let hole = vec![v(1.0, 1.0), v(2.0, 1.0), v(1.5, 2.0)];
        let shape = Shape::Polygon(PolygonShape::new(vec![outer.clone(), hole.clone()]));
        let mut out = Vec::new();
        let n = extract_edges(&shape, &Transform2::IDENTITY, &mut out);

        assert_eq!(n as usize, outer.len() + hole.len());
        // Each ring closes on itself, not on the other ring.
        assert_eq!(out[outer.len() - 1].end, out[0].start);
        assert_eq!(out.last().unwrap().end, out[outer.len()].start);
    }

    #[test]
    fn single_point_path_emits_degenerate_edge() {
        // N points yield N edges even for N = 1; the wraparound makes it
        // self-connecting. Degenerate edges are harmless to the tracer.
        let shape = Shape::Polygon(PolygonShape::from_ring(vec![v(5.0, 5.0)]));
        let mut out = Vec::new();
        assert_eq!(extract_edges(&shape, &Transform2::IDENTITY, &mut out), 1);
        assert_eq!(out[0].start, out[0].end);
    }

    // ── other ─────────────────────────────────────────────────────────────

    #[test]
    fn other_shape_emits_nothing() {
        let mut out = vec![Edge::default()];
        assert_eq!(extract_edges(&Shape::Other, &Transform2::IDENTITY, &mut out), 0);
        assert_eq!(out.len(), 1);
    }
}
