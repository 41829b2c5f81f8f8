use crate::geometry::{bounding_box_from_vertices, compute_edge_normals, Rect};
use crate::math::vec2::Vec2;
use super::GeometryError;

/// A convex polygon in world space with its edge normals precomputed.
///
/// Vertices must be ordered with a consistent winding. Convexity is not
/// checked; SAT results for concave input are meaningless but defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    normals: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices and derives its edge normals.
    ///
    /// Fails if fewer than 3 vertices are provided or any coordinate is not finite.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        let normals = compute_edge_normals(&vertices);
        Ok(Polygon { vertices, normals })
    }

    /// Builds a polygon from a flat `[x0, y0, x1, y1, ...]` coordinate sequence.
    pub fn from_flat(coords: &[f64]) -> Result<Self, GeometryError> {
        if coords.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount(coords.len()));
        }
        let vertices = coords
            .chunks_exact(2)
            .map(|pair| Vec2::new(pair[0], pair[1]))
            .collect();
        Polygon::new(vertices)
    }

    /// Axis-aligned rectangle as a 4-vertex polygon, wound (x,y) → (x+w,y) → (x+w,y+h) → (x,y+h).
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Polygon::new(vec![
            Vec2::new(x, y),
            Vec2::new(x + width, y),
            Vec2::new(x + width, y + height),
            Vec2::new(x, y + height),
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// One unit normal per edge; zero vectors for zero-length edges.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    pub fn bounding_box(&self) -> Rect {
        bounding_box_from_vertices(&self.vertices)
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn calculate_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            area += v1.x * v2.y - v1.y * v2.x;
        }
        (area / 2.0).abs()
    }

    /// Calculates the area centroid of the polygon.
    /// Degenerate (zero-area) polygons fall back to the vertex average.
    pub fn calculate_centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.vertices[0];

        // Fan triangulation from the first vertex
        for i in 1..(n - 1) {
            let e1 = self.vertices[i] - origin;
            let e2 = self.vertices[i + 1] - origin;
            let triangle_signed_area = (e1.x * e2.y - e1.y * e2.x) / 2.0;
            signed_area_sum += triangle_signed_area;

            let triangle_centroid = (origin + self.vertices[i] + self.vertices[i + 1]) / 3.0;
            centroid += triangle_centroid * triangle_signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            let mut avg = Vec2::ZERO;
            for v in &self.vertices {
                avg += *v;
            }
            avg / (n as f64)
        } else {
            centroid / signed_area_sum
        }
    }
}
