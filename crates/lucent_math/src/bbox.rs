//! Axis-aligned bounding box kept as min/max corners.

use glam::Vec3;

/// Conservative spatial extent of a primitive, consumed by external
/// acceleration structures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BBox {
    /// Seed box from two corner points, in either order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Grow the box to include `p`. Never shrinks any component.
    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// The smallest box containing both `a` and `b`.
    pub fn surrounding(a: &BBox, b: &BBox) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// True if `p` lies inside or on the boundary of the box.
    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The center point of the box.
    pub fn centroid(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_orders_corners() {
        let b = BBox::from_points(Vec3::new(5.0, -1.0, 2.0), Vec3::new(-3.0, 4.0, 2.0));
        assert_eq!(b.min, Vec3::new(-3.0, -1.0, 2.0));
        assert_eq!(b.max, Vec3::new(5.0, 4.0, 2.0));
    }

    #[test]
    fn test_expand_is_monotonic() {
        let mut b = BBox::from_points(Vec3::ZERO, Vec3::ONE);

        // Interior point: no change.
        b.expand(Vec3::splat(0.5));
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ONE);

        // Exterior point: grows to include it.
        b.expand(Vec3::new(-2.0, 0.5, 3.0));
        assert_eq!(b.min, Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 3.0));

        // min <= max componentwise after any sequence of expansions.
        assert!(b.min.cmple(b.max).all());
    }

    #[test]
    fn test_surrounding() {
        let a = BBox::from_points(Vec3::ZERO, Vec3::splat(5.0));
        let b = BBox::from_points(Vec3::splat(3.0), Vec3::splat(10.0));
        let s = BBox::surrounding(&a, &b);

        assert_eq!(s.min, Vec3::ZERO);
        assert_eq!(s.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_contains() {
        let b = BBox::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        assert!(b.contains(Vec3::ZERO));
        assert!(b.contains(Vec3::ONE)); // boundary is inside
        assert!(!b.contains(Vec3::new(1.1, 0.0, 0.0)));
    }

    #[test]
    fn test_centroid() {
        let b = BBox::from_points(Vec3::ZERO, Vec3::new(10.0, 4.0, 2.0));
        assert_eq!(b.centroid(), Vec3::new(5.0, 2.0, 1.0));
    }
}
