//! Ray types for light transport.

use crate::float::is_nearly_zero;
use glam::Vec3;

/// A half-line with an origin point and a direction vector.
///
/// The direction is not necessarily normalized; call [`Ray::unit`] when a
/// unit direction is required.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The same ray with its direction normalized.
    #[inline]
    pub fn unit(&self) -> Ray {
        Ray::new(self.origin, self.direction.normalize())
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::ZERO,
        }
    }
}

/// A ray carrying RGB throughput along a light transport path.
///
/// Colors are unit-less and may exceed 1.0. A black or degenerate light ray
/// tells the integrator to stop extending the path; neither is an error.
#[derive(Debug, Clone, Copy)]
pub struct LightRay {
    ray: Ray,
    color: Vec3,
}

impl LightRay {
    /// Create a light ray with an explicit color.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, color: Vec3) -> Self {
        Self {
            ray: Ray::new(origin, direction),
            color,
        }
    }

    /// A ray carrying full throughput in every channel.
    #[inline]
    pub fn white(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, Vec3::ONE)
    }

    /// A zero-length ray carrying a final color.
    ///
    /// Materials that end a path (emitters, perfect absorbers) return this;
    /// the integrator reads the color and stops bouncing.
    #[inline]
    pub fn terminated(color: Vec3) -> Self {
        Self {
            ray: Ray::default(),
            color,
        }
    }

    /// The underlying geometric ray.
    #[inline]
    pub fn ray(&self) -> Ray {
        self.ray
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.ray.origin()
    }

    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.ray.direction()
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Point along the carried ray at parameter t.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.ray.at(t)
    }

    /// True when the carried color is within epsilon of zero magnitude.
    #[inline]
    pub fn is_black(&self) -> bool {
        is_nearly_zero(self.color.length())
    }

    /// True when the direction is within epsilon of zero length.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        is_nearly_zero(self.ray.direction().length())
    }

    /// Largest RGB component; used for Russian-roulette survival tests.
    #[inline]
    pub fn energy(&self) -> f32 {
        self.color.max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_ray_unit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0));
        let unit = ray.unit();

        assert_eq!(unit.origin(), ray.origin());
        assert_relative_eq!(unit.direction().length(), 1.0, epsilon = 1e-6);
        // Same heading, different magnitude.
        assert_relative_eq!(
            unit.direction().dot(ray.direction()),
            ray.direction().length(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_light_ray_accessors() {
        let lr = LightRay::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.5, 0.25, 1.0),
        );

        assert_eq!(lr.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(lr.direction(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(lr.color(), Vec3::new(0.5, 0.25, 1.0));
        assert_eq!(lr.at(2.0), Vec3::new(1.0, 4.0, 3.0));
    }

    #[test]
    fn test_light_ray_white() {
        let lr = LightRay::white(Vec3::ZERO, Vec3::X);
        assert_eq!(lr.color(), Vec3::ONE);
        assert!(!lr.is_black());
    }

    #[test]
    fn test_light_ray_termination_signals() {
        let done = LightRay::terminated(Vec3::new(0.2, 0.4, 0.6));
        assert!(done.is_degenerate());
        assert!(!done.is_black());
        assert_eq!(done.color(), Vec3::new(0.2, 0.4, 0.6));

        let black = LightRay::new(Vec3::ZERO, Vec3::X, Vec3::ZERO);
        assert!(black.is_black());
        assert!(!black.is_degenerate());
    }

    #[test]
    fn test_light_ray_energy() {
        let lr = LightRay::new(Vec3::ZERO, Vec3::X, Vec3::new(0.1, 0.9, 0.5));
        assert_relative_eq!(lr.energy(), 0.9);
    }
}
