use crate::math::vec2::Vec2;

/// Outcome of a narrow-phase test between two shapes.
///
/// `penetration == f64::INFINITY` means a separating axis was found and the
/// shapes do not overlap. Otherwise `axis` is the unit axis of minimum overlap
/// and `penetration` its depth; a depth of zero means the shapes touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Axis of minimum penetration. Its sign is not oriented between the shapes.
    pub axis: Vec2,
    /// Overlap along `axis`, or `f64::INFINITY` for no overlap.
    pub penetration: f64,
}

impl CollisionResult {
    /// The "no overlap" sentinel.
    pub const NONE: CollisionResult = CollisionResult {
        axis: Vec2::ZERO,
        penetration: f64::INFINITY,
    };

    pub fn new(axis: Vec2, penetration: f64) -> Self {
        Self { axis, penetration }
    }

    pub fn is_colliding(&self) -> bool {
        self.penetration.is_finite()
    }

    /// `(axis_x, axis_y, penetration)`, the flat form handed to embedding layers.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.axis.x, self.axis.y, self.penetration)
    }

    /// Flips the axis, if needed, so it points from `from` towards `to`.
    /// Pushing the second shape along the result separates it from the first.
    pub fn oriented(self, from: Vec2, to: Vec2) -> Self {
        if (to - from).dot(self.axis) < 0.0 {
            Self {
                axis: -self.axis,
                ..self
            }
        } else {
            self
        }
    }

    /// Minimum translation vector (`axis * penetration`), or `None` without overlap.
    pub fn translation(&self) -> Option<Vec2> {
        self.is_colliding().then(|| self.axis * self.penetration)
    }
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_sentinel() {
        let none = CollisionResult::default();
        assert!(!none.is_colliding());
        assert_eq!(none.as_tuple().2, f64::INFINITY);
        assert!(none.translation().is_none());
    }

    #[test]
    fn test_touching_counts_as_colliding() {
        let touching = CollisionResult::new(Vec2::new(1.0, 0.0), 0.0);
        assert!(touching.is_colliding());
        assert_eq!(touching.translation(), Some(Vec2::ZERO));
    }

    #[test]
    fn test_oriented_flips_towards_target() {
        let r = CollisionResult::new(Vec2::new(-1.0, 0.0), 2.0);
        let flipped = r.oriented(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0));
        assert_eq!(flipped.axis, Vec2::new(1.0, 0.0));
        assert_eq!(flipped.penetration, 2.0);

        let kept = r.oriented(Vec2::new(5.0, 0.0), Vec2::new(0.0, 0.0));
        assert_eq!(kept.axis, Vec2::new(-1.0, 0.0));
    }
}
