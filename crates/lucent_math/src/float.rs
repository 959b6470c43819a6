//! Epsilon-aware float predicates.
//!
//! Every "is this positive / is this zero" decision in the intersection
//! kernel routes through these two functions, so the numerical policy lives
//! in one place. Raw comparisons against 0.0 misclassify grazing hits and
//! produce shadow acne from self-intersection.

/// Tolerance shared by [`is_nearly_zero`] and [`is_positive`].
pub const EPSILON: f32 = f32::EPSILON;

/// True if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_nearly_zero(x: f32) -> bool {
    x.abs() < EPSILON
}

/// True if `x` is positive beyond [`EPSILON`].
#[inline]
pub fn is_positive(x: f32) -> bool {
    x > EPSILON
}
