//! Sphere primitive, intersectable and sample-able as an area light.

use crate::geom::{AreaLight, AreaSample, Geom, GeomError, GeomResult};
use crate::{Intersection, Material};
use lucent_math::{is_positive, uniform_sample_sphere, BBox, Randomness, Ray, Vec3};
use std::f32::consts::PI;

/// A sphere around `origin` with the given radius.
#[derive(Clone)]
pub struct Sphere<'a> {
    origin: Vec3,
    radius: f32,
    material: &'a dyn Material,
    light: Option<&'a AreaLight>,
}

impl<'a> Sphere<'a> {
    /// Create a sphere.
    pub fn new(origin: Vec3, radius: f32, material: &'a dyn Material) -> GeomResult<Self> {
        if !is_positive(radius) {
            return Err(GeomError::InvalidRadius(radius));
        }

        log::debug!("sphere at {}, radius {}", origin, radius);

        Ok(Self {
            origin,
            radius,
            material,
            light: None,
        })
    }

    /// Create a sphere that also emits light described by `light`.
    pub fn with_light(
        origin: Vec3,
        radius: f32,
        material: &'a dyn Material,
        light: &'a AreaLight,
    ) -> GeomResult<Self> {
        let mut sphere = Self::new(origin, radius, material)?;
        sphere.light = Some(light);
        Ok(sphere)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Both quadratic roots along `ray`, near root first.
    ///
    /// `None` when the discriminant is not positive beyond epsilon: a
    /// tangent graze sits on a singular near-zero root, so it is treated as
    /// a miss rather than produce an unstable hit.
    ///
    /// See <http://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection>.
    fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let diff = ray.origin() - self.origin;
        let d = ray.direction();

        let a = d.dot(d);
        let b = d.dot(diff);
        let c = diff.dot(diff) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if !is_positive(discriminant) {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        Some(((-b - sqrt_disc) / a, (-b + sqrt_disc) / a))
    }
}

impl Geom for Sphere<'_> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let (near, far) = self.roots(ray)?;

        // Near root first, so the closest hit in front of the origin wins.
        let t = if is_positive(near) {
            near
        } else if is_positive(far) {
            far
        } else {
            return None;
        };

        let point = ray.at(t);
        let normal = (point - self.origin) / self.radius;
        Some(Intersection::with_frame(point, normal, t))
    }

    /// Same quadratic as `intersect` without building a record; a root
    /// qualifies only if it lies strictly within `max_dist`.
    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool {
        match self.roots(ray) {
            Some((near, far)) => {
                (is_positive(near) && is_positive(max_dist - near))
                    || (is_positive(far) && is_positive(max_dist - far))
            }
            None => false,
        }
    }

    fn bounds(&self) -> Option<BBox> {
        let diag = Vec3::splat(self.radius);
        Some(BBox::from_points(self.origin - diag, self.origin + diag))
    }

    fn material(&self) -> &dyn Material {
        self.material
    }

    fn area_light(&self) -> Option<&AreaLight> {
        self.light
    }
}

impl AreaSample for Sphere<'_> {
    fn sample_point(&self, rng: &mut dyn Randomness) -> (Vec3, Vec3) {
        let normal = uniform_sample_sphere(rng);
        (self.origin + self.radius * normal, normal)
    }

    fn area(&self) -> f32 {
        4.0 * PI * self.radius * self.radius
    }
}
