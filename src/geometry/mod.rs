pub mod rect;

pub use rect::Rect;

use crate::math::vec2::Vec2;

/// Computes the tight bounding box of a vertex sequence by min/max reduction.
///
/// Collinear input yields a zero-width or zero-height box. An empty slice
/// yields the zero rect at the origin.
pub fn bounding_box_from_vertices(vertices: &[Vec2]) -> Rect {
    Rect::from_points(vertices).unwrap_or_default()
}

/// Computes the bounding box of a circle: `(cx - r, cy - r, 2r, 2r)`.
pub fn bounding_box_from_circle(center: Vec2, radius: f64) -> Rect {
    let reach = Vec2::new(radius, radius);
    Rect::from_min_max(center - reach, center + reach)
}

/// Returns one unit normal per edge, edge `i` running from vertex `i` to `i + 1`
/// (the last edge wraps back to the first vertex).
///
/// Each normal is the edge vector rotated 90° counter-clockwise, `(-dy, dx)`,
/// normalized. It lies to the left of its edge, so it faces outward for
/// polygons wound clockwise in a y-up frame; SAT only uses it as an axis, so
/// either winding works. A zero-length edge produces a zero vector.
pub fn compute_edge_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    let mut normals = Vec::with_capacity(n);

    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        let edge = v2 - v1;
        normals.push(edge.perpendicular().normalize());
    }
    normals
}

/// Union of a sequence of rects, or `None` when the sequence is empty.
pub fn union_of<'a, I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let mut iter = rects.into_iter();
    let mut bounds = *iter.next()?;
    for rect in iter {
        bounds.merge(rect);
    }
    Some(bounds)
}
