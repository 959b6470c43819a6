//! Caller-supplied randomness and sphere/hemisphere sampling.

use crate::frame::coord_system;
use glam::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::TAU;

/// A source of independent standard-normal variates.
///
/// The kernel only consumes entropy; it never seeds or reconfigures the
/// source. Each caller owns its own instance, and the `&mut` receiver makes
/// sharing one source across threads a compile error rather than a data
/// race.
pub trait Randomness {
    /// Draw the next standard-normal variate.
    fn next_normal(&mut self) -> f32;
}

/// Any `rand` generator works as a normal-variate source via Box-Muller.
impl<R: RngCore> Randomness for R {
    fn next_normal(&mut self) -> f32 {
        // Shift u1 into (0, 1] so the log stays finite.
        let u1: f32 = 1.0 - self.gen::<f32>();
        let u2: f32 = self.gen();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

/// Uniform direction on the unit sphere: three standard normals, normalized
/// (Muller's method).
///
/// See <http://mathworld.wolfram.com/SpherePointPicking.html>.
pub fn uniform_sample_sphere(rng: &mut dyn Randomness) -> Vec3 {
    Vec3::new(rng.next_normal(), rng.next_normal(), rng.next_normal()).normalize()
}

/// Uniform direction on the hemisphere about `normal`.
///
/// Uniform over solid angle, not cosine-weighted: the sphere sample is
/// folded into the upper hemisphere by taking the absolute value of its
/// normal-axis component, then reprojected through the tangent frame of
/// `normal`.
pub fn uniform_sample_hemisphere(normal: Vec3, rng: &mut dyn Randomness) -> Vec3 {
    let x1 = rng.next_normal();
    let x2 = rng.next_normal();
    let x3 = rng.next_normal();

    let inv_len = 1.0 / (x1 * x1 + x2 * x2 + x3 * x3).sqrt();
    let y1 = (x1 * inv_len).abs();
    let y2 = x2 * inv_len;
    let y3 = x3 * inv_len;

    let (tangent, binormal) = coord_system(normal);
    normal * y1 + tangent * y2 + binormal * y3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_next_normal_is_roughly_standard() {
        let mut rng = StdRng::seed_from_u64(7);

        let n = 10_000;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for _ in 0..n {
            let x = rng.next_normal();
            assert!(x.is_finite());
            sum += x as f64;
            sum_sq += (x * x) as f64;
        }

        let mean = sum / n as f64;
        let var = sum_sq / n as f64 - mean * mean;

        // Loose statistical bounds; the seed is fixed so this is stable.
        assert!(mean.abs() < 0.05, "mean {mean} too far from 0");
        assert!((var - 1.0).abs() < 0.1, "variance {var} too far from 1");
    }

    #[test]
    fn test_uniform_sample_sphere_is_unit() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = uniform_sample_sphere(&mut rng);
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_hemisphere_samples_stay_above_surface() {
        let mut rng = StdRng::seed_from_u64(13);
        let normals = [
            Vec3::Y,
            Vec3::X,
            -Vec3::Z,
            Vec3::new(1.0, -2.0, 0.5).normalize(),
        ];

        for normal in normals {
            for _ in 0..200 {
                let dir = uniform_sample_hemisphere(normal, &mut rng);
                assert_relative_eq!(dir.length(), 1.0, epsilon = 1e-4);
                assert!(
                    dir.dot(normal) >= -1e-6,
                    "sample {dir} fell below the surface of {normal}"
                );
            }
        }
    }
}
