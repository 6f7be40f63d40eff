//! One-dimensional value noise and its ridged fold.

use crate::hash::hash;
use crate::shading::mix;

/// Quintic fade `6f^5 - 15f^4 + 10f^3`; zero first and second derivatives at 0 and 1.
#[inline]
pub fn quintic(f: f32) -> f32 {
    f * f * f * (f * (f * 6.0 - 15.0) + 10.0)
}

/// Smoothly interpolated lattice noise in `[0, 1]`.
///
/// At integer `x` this is exactly `hash(x)`.
pub fn value_noise(x: f32) -> f32 {
    let i = x.floor();
    let f = x - i;
    mix(hash(i), hash(i + 1.0), quintic(f))
}

/// Ridged transform of [`value_noise`]: `(1 - |2n - 1|)^2`.
///
/// Peaks sharply where the underlying noise crosses 0.5.
pub fn ridge(x: f32) -> f32 {
    let n = 1.0 - (value_noise(x) * 2.0 - 1.0).abs();
    n * n
}
