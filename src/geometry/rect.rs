// Axis-aligned rectangle used for shape bounds and spatial index regions

use crate::math::vec2::Vec2;

/// An axis-aligned rectangle stored as origin plus extent.
///
/// `x`/`y` is the minimum corner; `width` and `height` are never negative for
/// rects built through [`Rect::new`] or [`Rect::from_min_max`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rect. Negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a rect spanning two corner points given in any order.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        let min_x = min.x.min(max.x);
        let min_y = min.y.min(max.y);
        Rect {
            x: min_x,
            y: min_y,
            width: covering_extent(min_x, min.x.max(max.x)),
            height: covering_extent(min_y, min.y.max(max.y)),
        }
    }

    /// Creates the tightest rect that encloses a set of points.
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in rest {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(Rect::from_min_max(min_pt, max_pt))
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Checks if this rect overlaps another. Touching edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Checks if `other` lies fully inside this rect, boundaries included.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Checks if a point lies inside this rect, boundaries included.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Expands this rect in place so it also encloses `other`.
    pub fn merge(&mut self, other: &Rect) {
        *self = self.union(other);
    }

    /// Returns the smallest rect enclosing both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Rect {
            x: min_x,
            y: min_y,
            width: covering_extent(min_x, max_x),
            height: covering_extent(min_y, max_y),
        }
    }

    /// Splits the rect into four quadrants about its midpoint.
    /// Order is NW, NE, SW, SE with `y` growing downwards.
    ///
    /// Each quadrant is built from the parent's edges and the shared midpoint,
    /// so together they cover every point the parent covers.
    pub fn quadrants(&self) -> [Rect; 4] {
        let (left, top) = (self.x, self.y);
        let (right, bottom) = (self.right(), self.bottom());
        let mid_x = left + self.width / 2.0;
        let mid_y = top + self.height / 2.0;
        [
            Rect::from_min_max(Vec2::new(left, top), Vec2::new(mid_x, mid_y)),
            Rect::from_min_max(Vec2::new(mid_x, top), Vec2::new(right, mid_y)),
            Rect::from_min_max(Vec2::new(left, mid_y), Vec2::new(mid_x, bottom)),
            Rect::from_min_max(Vec2::new(mid_x, mid_y), Vec2::new(right, bottom)),
        ]
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Distance from `min` to `max`, widened by ulps until `min + extent`
/// no longer rounds below `max`.
fn covering_extent(min: f64, max: f64) -> f64 {
    let mut extent = max - min;
    while min + extent < max {
        extent = next_up(extent);
    }
    extent
}

/// Smallest `f64` above a finite, non-negative `value`.
fn next_up(value: f64) -> f64 {
    if value == 0.0 {
        f64::from_bits(1)
    } else {
        f64::from_bits(value.to_bits() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_new_clamps_negative_extent() {
        let r = Rect::new(1.0, 2.0, -3.0, 4.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 4.0);
    }

    #[test]
    fn test_rect_from_min_max_unordered() {
        let r = Rect::from_min_max(Vec2::new(10.0, 0.0), Vec2::new(0.0, 5.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(r.min(), Vec2::new(0.0, 0.0));
        assert_eq!(r.max(), Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 1.0, 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_rect_intersects_touching_counts() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 5.0, 5.0);
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersects(&right));
        assert!(right.intersects(&a));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_rect_intersects_disjoint_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x but separated on y
        let below = Rect::new(2.0, 10.5, 2.0, 2.0);
        assert!(!a.intersects(&below));
        assert!(!below.intersects(&a));
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&Rect::new(2.0, 2.0, 3.0, 3.0)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&Rect::new(8.0, 8.0, 3.0, 3.0)));
        assert!(!Rect::new(2.0, 2.0, 3.0, 3.0).contains(&outer));
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_rect_from_points() {
        assert!(Rect::from_points(&[]).is_none());
        let points = [Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(1.0, 1.0)];
        assert_eq!(Rect::from_points(&points), Some(Rect::new(-2.0, -1.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_union_and_merge() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, -1.0, 1.0, 1.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, -1.0, 6.0, 3.0));
        assert!(u.contains(&a) && u.contains(&b));

        let mut m = a;
        m.merge(&b);
        assert_eq!(m, u);
    }

    #[test]
    fn test_rect_quadrants_partition_area() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let [nw, ne, sw, se] = r.quadrants();
        assert_eq!(nw, Rect::new(0.0, 0.0, 50.0, 25.0));
        assert_eq!(ne, Rect::new(50.0, 0.0, 50.0, 25.0));
        assert_eq!(sw, Rect::new(0.0, 25.0, 50.0, 25.0));
        assert_eq!(se, Rect::new(50.0, 25.0, 50.0, 25.0));
        let total: f64 = [nw, ne, sw, se].iter().map(Rect::area).sum();
        assert_eq!(total, r.area());
    }

    #[test]
    fn test_rect_quadrants_reach_parent_edges_for_odd_bounds() {
        let r = Rect::from_min_max(Vec2::new(10.84, 0.0), Vec2::new(1009.35, 10.0));
        assert!(r.right() >= 1009.35);

        // Sweep a range of awkward float bounds
        let mut seed = 0x2545_f491_u64;
        for _ in 0..2000 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = (seed >> 33) as f64 / 1000.0 - 500.0;
            let width = (seed & 0xffff) as f64 / 7.0;
            let parent = Rect::new(x, x / 3.0, width, width * 0.37);
            let [nw, ne, sw, se] = parent.quadrants();

            assert_eq!(nw.min(), parent.min());
            assert!(ne.right() >= parent.right());
            assert!(se.right() >= parent.right());
            assert!(sw.bottom() >= parent.bottom());
            assert!(se.bottom() >= parent.bottom());
            assert!(nw.right() >= ne.x);
            assert!(nw.bottom() >= sw.y);

            // A zero-size box on the far corner lands in the SE quadrant
            let corner = Rect::new(parent.right(), parent.bottom(), 0.0, 0.0);
            assert!(se.intersects(&corner));
        }
    }

    #[test]
    fn test_rect_union_reaches_max_edge() {
        let a = Rect::new(10.84, 0.0, 0.0, 0.0);
        let b = Rect::new(1009.35, 5.0, 0.0, 0.0);
        let u = a.union(&b);
        assert!(u.right() >= b.right());
        assert!(u.intersects(&b));
    }
}
