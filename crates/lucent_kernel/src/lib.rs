//! Ray intersection and light transport kernel.
//!
//! Answers two questions for a Monte Carlo renderer: where does a ray meet a
//! primitive, and how does a material transform the light the ray carries at
//! that point. Scene assembly, acceleration structures, the sampling loop,
//! and the image plane all live outside this crate; they hand rays in and
//! consume [`Intersection`] and [`LightRay`] values back.

mod disc;
mod geom;
mod intersection;
mod material;
mod plane;
mod sphere;

pub use disc::Disc;
pub use geom::{AreaLight, AreaSample, Geom, GeomError, GeomResult};
pub use intersection::Intersection;
pub use material::{Emitter, Material};
pub use plane::Plane;
pub use sphere::Sphere;

/// Re-export the math types the kernel API speaks.
pub use lucent_math::{BBox, LightRay, Randomness, Ray, Vec3};
