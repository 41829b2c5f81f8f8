// Separating Axis Theorem narrow phase for convex polygons and circles

use crate::config::SatConfig;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon, Shape};
use super::result::CollisionResult;

/// Projects a vertex set onto an axis and returns the min/max interval.
fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;
    for vertex in vertices {
        let projection = vertex.dot(axis);
        min_proj = min_proj.min(projection);
        max_proj = max_proj.max(projection);
    }
    (min_proj, max_proj)
}

/// Runs the per-axis overlap test over `axes` in order, writing the outcome into `result`.
///
/// `project` maps an axis to the projection intervals of shape A and shape B.
/// The first separating axis ends the test with the no-overlap sentinel.
/// Otherwise the first axis attaining the smallest overlap is kept. Zero-length
/// axes cannot separate anything and are skipped; only when every axis is
/// zero-length does the result become a zero axis with zero penetration.
fn test_axes<I, P>(axes: I, mut project: P, result: &mut CollisionResult)
where
    I: IntoIterator<Item = Vec2>,
    P: FnMut(Vec2) -> ((f64, f64), (f64, f64)),
{
    *result = CollisionResult::NONE;
    let mut degenerate_axes = 0usize;

    for (index, axis) in axes.into_iter().enumerate() {
        if axis.magnitude_squared() == 0.0 {
            degenerate_axes += 1;
            continue;
        }

        let ((min_a, max_a), (min_b, max_b)) = project(axis);

        if max_a < min_b || max_b < min_a {
            log::trace!("separating axis #{} ({:?})", index, axis);
            *result = CollisionResult::NONE;
            return;
        }

        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap < result.penetration {
            result.axis = axis;
            result.penetration = overlap;
        }
    }

    if degenerate_axes > 0 && !result.is_colliding() {
        *result = CollisionResult::new(Vec2::ZERO, 0.0);
    }
}

/// Separating Axis Theorem resolver.
///
/// Stateless apart from its options; every call produces a fresh result. The
/// `*_into` variants write into a caller-owned result for hot loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sat {
    config: SatConfig,
}

impl Sat {
    pub fn new(config: SatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SatConfig {
        &self.config
    }

    /// Dispatches on the shape kinds of `a` and `b`.
    pub fn resolve(&self, a: &Shape, b: &Shape) -> CollisionResult {
        let mut result = CollisionResult::NONE;
        self.resolve_into(a, b, &mut result);
        result
    }

    pub fn resolve_into(&self, a: &Shape, b: &Shape, result: &mut CollisionResult) {
        match (a, b) {
            (Shape::Polygon(pa), Shape::Polygon(pb)) => self.resolve_polygons_into(pa, pb, result),
            (Shape::Circle(c), Shape::Polygon(p)) | (Shape::Polygon(p), Shape::Circle(c)) => {
                self.resolve_circle_polygon_into(c, p, result)
            }
            (Shape::Circle(ca), Shape::Circle(cb)) => self.resolve_circles_into(ca, cb, result),
        }
    }

    /// Polygon vs polygon over A's edge normals, then B's.
    pub fn resolve_polygons(&self, a: &Polygon, b: &Polygon) -> CollisionResult {
        let mut result = CollisionResult::NONE;
        self.resolve_polygons_into(a, b, &mut result);
        result
    }

    pub fn resolve_polygons_into(&self, a: &Polygon, b: &Polygon, result: &mut CollisionResult) {
        let axes = a.normals().iter().chain(b.normals()).copied();
        test_axes(
            axes,
            |axis| (project_vertices(a.vertices(), axis), project_vertices(b.vertices(), axis)),
            result,
        );
    }

    /// Circle vs polygon over the polygon's edge normals, plus the nearest-vertex
    /// axis when `circle_vertex_axis` is enabled. Penetration is symmetric, so
    /// operand order between circle and polygon does not matter.
    pub fn resolve_circle_polygon(&self, circle: &Circle, polygon: &Polygon) -> CollisionResult {
        let mut result = CollisionResult::NONE;
        self.resolve_circle_polygon_into(circle, polygon, &mut result);
        result
    }

    pub fn resolve_circle_polygon_into(
        &self,
        circle: &Circle,
        polygon: &Polygon,
        result: &mut CollisionResult,
    ) {
        let vertex_axis = self
            .config
            .circle_vertex_axis
            .then(|| nearest_vertex_axis(circle.center, polygon.vertices()));
        let axes = polygon.normals().iter().copied().chain(vertex_axis);
        test_axes(
            axes,
            |axis| (circle.project(axis), project_vertices(polygon.vertices(), axis)),
            result,
        );
    }

    /// Circle vs circle along the center-to-center axis.
    /// Coincident centers fall back to the vertical axis.
    pub fn resolve_circles(&self, a: &Circle, b: &Circle) -> CollisionResult {
        let mut result = CollisionResult::NONE;
        self.resolve_circles_into(a, b, &mut result);
        result
    }

    pub fn resolve_circles_into(&self, a: &Circle, b: &Circle, result: &mut CollisionResult) {
        let center_axis = (b.center - a.center).normalize();
        let axis = if center_axis == Vec2::ZERO { Vec2::UP } else { center_axis };
        test_axes([axis], |axis| (a.project(axis), b.project(axis)), result);
    }
}

/// Unit axis from `center` to the closest vertex. Zero when the center sits on a vertex.
fn nearest_vertex_axis(center: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut closest_dist_sq = f64::INFINITY;
    let mut closest = center;
    for vertex in vertices {
        let dist_sq = vertex.distance_squared(center);
        if dist_sq < closest_dist_sq {
            closest_dist_sq = dist_sq;
            closest = *vertex;
        }
    }
    (closest - center).normalize()
}
