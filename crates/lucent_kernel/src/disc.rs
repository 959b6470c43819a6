//! Disc primitive: a bounded patch of a plane.

use crate::geom::{Geom, GeomError, GeomResult};
use crate::plane::plane_hit;
use crate::{Intersection, Material};
use lucent_math::{coord_system, is_positive, BBox, Ray, Vec3};

/// A flat disc of the given radius around `origin`, facing `normal`.
#[derive(Clone)]
pub struct Disc<'a> {
    origin: Vec3,
    normal: Vec3,
    radius: f32,
    tangent: Vec3,
    binormal: Vec3,
    material: &'a dyn Material,
}

impl<'a> Disc<'a> {
    /// Create a disc. The normal is normalized once here and the tangent
    /// frame is precomputed from it.
    pub fn new(
        origin: Vec3,
        normal: Vec3,
        radius: f32,
        material: &'a dyn Material,
    ) -> GeomResult<Self> {
        let normal = normal.try_normalize().ok_or(GeomError::DegenerateNormal)?;
        if !is_positive(radius) {
            return Err(GeomError::InvalidRadius(radius));
        }
        let (tangent, binormal) = coord_system(normal);

        log::debug!("disc at {}, normal {}, radius {}", origin, normal, radius);

        Ok(Self {
            origin,
            normal,
            radius,
            tangent,
            binormal,
            material,
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    // The radius is the one canonical value; the squared form is derived so
    // the two can never disagree.
    fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }
}

impl Geom for Disc<'_> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let t = plane_hit(self.origin, self.normal, ray)?;

        // In the supporting plane, but inside the disc? Strict inequality:
        // boundary points are misses, so a tangent hit is never counted
        // twice by adjacent geometry.
        let point = ray.at(t);
        if (point - self.origin).length_squared() < self.radius_squared() {
            Some(Intersection::new(
                point,
                self.normal,
                self.tangent,
                self.binormal,
                t,
            ))
        } else {
            None
        }
    }

    fn bounds(&self) -> Option<BBox> {
        let tr = self.tangent * self.radius;
        let br = self.binormal * self.radius;

        let mut b = BBox::from_points(self.origin + tr + br, self.origin - tr - br);
        b.expand(self.origin + tr - br);
        b.expand(self.origin - tr + br);

        Some(b)
    }

    fn material(&self) -> &dyn Material {
        self.material
    }
}
