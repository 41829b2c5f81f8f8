pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use thiserror::Error;

use crate::geometry::Rect;
use crate::math::vec2::Vec2;

/// Caller-assigned shape identifier.
pub type ShapeId = i32;

/// Reasons a coordinate sequence cannot describe a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("odd coordinate count {0}")]
    OddCoordinateCount(usize),
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("circle data must be [cx, cy, r], got {0} values")]
    CircleArity(usize),
    #[error("negative radius {0}")]
    NegativeRadius(f64),
    #[error("non-finite coordinate")]
    NonFinite,
}

/// Enum representing the geometry of a registered shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    Circle(Circle),
}

impl Shape {
    /// Parses a flat coordinate sequence: `[x0, y0, x1, y1, ...]` for polygons,
    /// `[cx, cy, r]` for circles.
    pub fn from_flat(coords: &[f64], is_circle: bool) -> Result<Self, GeometryError> {
        if is_circle {
            Circle::from_flat(coords).map(Shape::Circle)
        } else {
            Polygon::from_flat(coords).map(Shape::Polygon)
        }
    }

    /// Tight axis-aligned bounds of the shape.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Polygon(polygon) => polygon.bounding_box(),
            Shape::Circle(circle) => circle.bounding_box(),
        }
    }

    /// Reference point used to orient penetration axes: polygon centroid or circle center.
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Polygon(polygon) => polygon.calculate_centroid(),
            Shape::Circle(circle) => circle.center,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle(_))
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_flat_dispatch() {
        let poly = Shape::from_flat(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0], false).unwrap();
        assert!(!poly.is_circle());
        assert_eq!(poly.bounding_box(), Rect::new(0.0, 0.0, 2.0, 2.0));
        let center = poly.center();
        assert!((center.x - 1.0).abs() < 1e-9 && (center.y - 1.0).abs() < 1e-9);

        let circle = Shape::from_flat(&[5.0, 5.0, 1.0], true).unwrap();
        assert!(circle.is_circle());
        assert_eq!(circle.bounding_box(), Rect::new(4.0, 4.0, 2.0, 2.0));
        assert_eq!(circle.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_shape_from_flat_errors() {
        assert_eq!(Shape::from_flat(&[1.0, 2.0, 3.0], false), Err(GeometryError::OddCoordinateCount(3)));
        assert_eq!(Shape::from_flat(&[1.0, 2.0], true), Err(GeometryError::CircleArity(2)));
    }
}
