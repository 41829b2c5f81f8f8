use crate::geometry::{bounding_box_from_circle, Rect};
use crate::math::vec2::Vec2;
use super::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Creates a circle. The radius must be finite and non-negative; zero is a point.
    pub fn new(center: Vec2, radius: f64) -> Result<Self, GeometryError> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Builds a circle from `[cx, cy, r]`.
    pub fn from_flat(data: &[f64]) -> Result<Self, GeometryError> {
        match *data {
            [cx, cy, r] => Circle::new(Vec2::new(cx, cy), r),
            _ => Err(GeometryError::CircleArity(data.len())),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        bounding_box_from_circle(self.center, self.radius)
    }

    /// Projection interval of the circle onto `axis`: `center·axis ± radius`.
    pub fn project(&self, axis: Vec2) -> (f64, f64) {
        let center_proj = self.center.dot(axis);
        (center_proj - self.radius, center_proj + self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(Vec2::new(1.0, 2.0), 5.0).unwrap();
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.bounding_box(), Rect::new(-4.0, -3.0, 10.0, 10.0));
    }

    #[test]
    fn test_circle_new_negative_radius() {
        assert_eq!(Circle::new(Vec2::ZERO, -1.0), Err(GeometryError::NegativeRadius(-1.0)));
    }

    #[test]
    fn test_circle_zero_radius_is_a_point() {
        let c = Circle::new(Vec2::new(3.0, 3.0), 0.0).unwrap();
        assert_eq!(c.bounding_box(), Rect::new(3.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn test_circle_from_flat_arity() {
        assert!(Circle::from_flat(&[0.0, 0.0, 1.0]).is_ok());
        assert_eq!(Circle::from_flat(&[0.0, 0.0]), Err(GeometryError::CircleArity(2)));
        assert_eq!(Circle::from_flat(&[0.0, 0.0, 1.0, 2.0]), Err(GeometryError::CircleArity(4)));
    }

    #[test]
    fn test_circle_project() {
        let c = Circle::new(Vec2::new(10.0, 0.0), 2.0).unwrap();
        assert_eq!(c.project(Vec2::new(1.0, 0.0)), (8.0, 12.0));
        assert_eq!(c.project(Vec2::new(0.0, 1.0)), (-2.0, 2.0));
    }
}
