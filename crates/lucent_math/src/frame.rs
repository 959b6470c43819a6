//! Orthonormal tangent frame construction.

use glam::Vec3;

/// Build an orthonormal (tangent, binormal) pair from a unit normal.
///
/// Branches on the larger of |n.x| and |n.y| so the projection plane is
/// never nearly parallel to the normal; taking the smaller axis risks an
/// ill-conditioned cross product when the normal is almost axis-aligned.
/// Technique from Pharr & Humphreys, Physically Based Rendering, p. 63.
pub fn coord_system(normal: Vec3) -> (Vec3, Vec3) {
    let tangent = if normal.x.abs() > normal.y.abs() {
        let inv_len = 1.0 / (normal.x * normal.x + normal.z * normal.z).sqrt();
        Vec3::new(-normal.z * inv_len, 0.0, normal.x * inv_len)
    } else {
        let inv_len = 1.0 / (normal.y * normal.y + normal.z * normal.z).sqrt();
        Vec3::new(0.0, normal.z * inv_len, -normal.y * inv_len)
    };
    (tangent, normal.cross(tangent))
}
