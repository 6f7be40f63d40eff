//! Scalar helpers with shading-language semantics.

/// Fractional part, defined as `x - floor(x)`.
///
/// Unlike [`f32::fract`] this never goes negative: `fract(-0.25) == 0.75`.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear blend `a + (b - a) * t`. Exact at `t == 0`.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite step between two edges.
///
/// The edges are not reordered, so `smoothstep(1.0, 0.0, x)` is the mirrored
/// ramp `1 - smoothstep(0.0, 1.0, x)`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
