//! Material trait and the emitter variant.

use crate::Intersection;
use lucent_math::{LightRay, Randomness, Vec3};

/// Transforms the light a ray carries at a hit point.
///
/// The general contract is {incoming ray, hit context, randomness} in,
/// outgoing ray out. A scattering material picks a new direction and weights
/// the carried color by its BRDF; an emitter terminates the path instead.
/// Implementations are read-only after scene construction and shared across
/// worker threads.
pub trait Material: Send + Sync {
    /// Produce the outgoing light ray for a hit.
    fn propagate(
        &self,
        incoming: &LightRay,
        isect: &Intersection,
        rng: &mut dyn Randomness,
    ) -> LightRay;
}

/// A light source with a fixed emission color.
#[derive(Clone)]
pub struct Emitter {
    color: Vec3,
}

impl Emitter {
    /// Create an emitter with the given emission color.
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }
}

impl Material for Emitter {
    fn propagate(
        &self,
        incoming: &LightRay,
        _isect: &Intersection,
        _rng: &mut dyn Randomness,
    ) -> LightRay {
        // The path ends here: a zero-length outgoing ray carrying the
        // accumulated color filtered by the emitter's own.
        LightRay::terminated(incoming.color() * self.color)
    }
}
