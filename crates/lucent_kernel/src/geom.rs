//! Geometry trait, area-light capability, and construction errors.

use crate::{Intersection, Material};
use lucent_math::{is_positive, BBox, Randomness, Ray, Vec3};
use thiserror::Error;

/// Errors raised while building primitives at scene-construction time.
///
/// Per-ray outcomes are never errors: parallel rays, grazing tangents, and
/// hits behind the origin are all ordinary misses and come back as `None`
/// from [`Geom::intersect`].
#[derive(Error, Debug)]
pub enum GeomError {
    #[error("normal vector is degenerate (length is nearly zero)")]
    DegenerateNormal,

    #[error("radius {0} is not positive")]
    InvalidRadius(f32),
}

/// Convenience alias for construction results.
pub type GeomResult<T> = Result<T, GeomError>;

/// Emission descriptor attached to light-emitting primitives.
///
/// Owned by the scene alongside materials; primitives hold non-owning
/// references.
#[derive(Debug, Clone, Copy)]
pub struct AreaLight {
    pub color: Vec3,
}

impl AreaLight {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

/// A primitive the integrator can query for hits.
///
/// Implementations are immutable after construction and hold only shared
/// references to scene-owned materials, so any number of worker threads may
/// query the same primitive concurrently.
pub trait Geom: Send + Sync {
    /// Nearest intersection strictly in front of the ray origin, or `None`.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// True if the ray hits strictly within `max_dist`.
    ///
    /// Shadow rays only need occlusion, so primitives may override this with
    /// a cheaper test that skips the intersection record. `max_dist` of zero
    /// (or less) never reports a hit.
    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool {
        match self.intersect(ray) {
            Some(isect) => is_positive(max_dist - isect.distance),
            None => false,
        }
    }

    /// Conservative spatial extent, or `None` for unbounded primitives.
    ///
    /// Acceleration structures must special-case the `None` variant rather
    /// than assume every primitive fits in a box.
    fn bounds(&self) -> Option<BBox>;

    /// The material shading this primitive.
    fn material(&self) -> &dyn Material;

    /// Emission descriptor, if this primitive acts as an area light.
    fn area_light(&self) -> Option<&AreaLight> {
        None
    }
}

/// Primitives that can be sampled as area lights.
pub trait AreaSample: Geom {
    /// Draw a uniform surface point and its outward unit normal.
    fn sample_point(&self, rng: &mut dyn Randomness) -> (Vec3, Vec3);

    /// Total surface area.
    fn area(&self) -> f32;
}
