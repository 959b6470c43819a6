//! Infinite plane primitive.

use crate::geom::{Geom, GeomError, GeomResult};
use crate::{Intersection, Material};
use lucent_math::{coord_system, is_nearly_zero, is_positive, BBox, Ray, Vec3};

/// Solve the line-plane equation for a plane through `origin` facing
/// `normal`.
///
/// Returns `None` for a parallel ray (denominator within epsilon of zero)
/// or a candidate behind, or epsilon-close to, the ray origin.
///
/// See <http://en.wikipedia.org/wiki/Line%E2%80%93plane_intersection>.
pub(crate) fn plane_hit(origin: Vec3, normal: Vec3, ray: &Ray) -> Option<f32> {
    let denom = ray.direction().dot(normal);
    if is_nearly_zero(denom) {
        return None;
    }

    let t = (origin - ray.origin()).dot(normal) / denom;
    is_positive(t).then_some(t)
}

/// An unbounded plane through `origin` with the given normal.
///
/// Clones are independent value copies that share the material reference.
#[derive(Clone)]
pub struct Plane<'a> {
    origin: Vec3,
    normal: Vec3,
    tangent: Vec3,
    binormal: Vec3,
    material: &'a dyn Material,
}

impl<'a> Plane<'a> {
    /// Create a plane. The normal is normalized once here; the tangent frame
    /// reported by every hit is precomputed from it.
    pub fn new(origin: Vec3, normal: Vec3, material: &'a dyn Material) -> GeomResult<Self> {
        let normal = normal.try_normalize().ok_or(GeomError::DegenerateNormal)?;
        let (tangent, binormal) = coord_system(normal);

        log::debug!("plane at {}, normal {}", origin, normal);

        Ok(Self {
            origin,
            normal,
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
}

impl Geom for Plane<'_> {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let t = plane_hit(self.origin, self.normal, ray)?;
        Some(Intersection::new(
            ray.at(t),
            self.normal,
            self.tangent,
            self.binormal,
            t,
        ))
    }

    /// Planes have no finite extent.
    fn bounds(&self) -> Option<BBox> {
        None
    }

    fn material(&self) -> &dyn Material {
        self.material
    }
}
