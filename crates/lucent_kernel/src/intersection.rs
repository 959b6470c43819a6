//! Ray-primitive intersection record.

use lucent_math::{coord_system, Vec3};

/// Where and how a ray meets a primitive.
///
/// A record only exists for an actual hit: "no hit" is `None` at the
/// [`crate::Geom::intersect`] boundary, so reading position or normal off a
/// miss cannot compile.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// The hit point in world space.
    pub position: Vec3,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
    /// Unit tangent, orthogonal to the normal.
    pub tangent: Vec3,
    /// Unit binormal completing the frame.
    pub binormal: Vec3,
    /// Ray parameter t at the hit; positive beyond epsilon.
    pub distance: f32,
}

impl Intersection {
    /// Build a record with an explicit tangent frame.
    ///
    /// The normal is re-normalized; the frame vectors are trusted as given
    /// (primitives precompute them once at construction).
    pub fn new(
        position: Vec3,
        normal: Vec3,
        tangent: Vec3,
        binormal: Vec3,
        distance: f32,
    ) -> Self {
        Self {
            position,
            normal: normal.normalize(),
            tangent,
            binormal,
            distance,
        }
    }

    /// Build a record deriving the tangent frame from the normal.
    pub fn with_frame(position: Vec3, normal: Vec3, distance: f32) -> Self {
        let normal = normal.normalize();
        let (tangent, binormal) = coord_system(normal);
        Self {
            position,
            normal,
            tangent,
            binormal,
            distance,
        }
    }
}
