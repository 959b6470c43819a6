// Re-export glam for convenience
pub use glam::*;

mod bbox;
mod float;
mod frame;
mod ray;
mod sample;

pub use bbox::BBox;
pub use float::{is_nearly_zero, is_positive, EPSILON};
pub use frame::coord_system;
pub use ray::{LightRay, Ray};
pub use sample::{uniform_sample_hemisphere, uniform_sample_sphere, Randomness};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_reexport() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }
}
