//! Sine-based lattice hashes.

use glam::Vec2;

use crate::shading::fract;

/// Multiplier applied to `sin(n)` by [`hash`].
pub const HASH_SCALE: f32 = 43758.5453123;

/// Multiplier applied to `sin(dot(p, HASH2_DOT))` by [`hash2`].
pub const HASH2_SCALE: f32 = 43758.5453;

/// Projection vector used by [`hash2`].
pub const HASH2_DOT: Vec2 = Vec2::new(127.1, 311.7);

/// Largest `f32` below 1.
///
/// `x - floor(x)` rounds to exactly 1.0 for tiny negative `x`, so hashes are
/// capped here to stay in `[0, 1)`.
pub const HASH_MAX: f32 = 1.0 - f32::EPSILON / 2.0;

/// Scalar hash in `[0, 1)`: `fract(sin(n) * 43758.5453123)`.
#[inline]
pub fn hash(n: f32) -> f32 {
    fract(n.sin() * HASH_SCALE).min(HASH_MAX)
}

/// Two-dimensional hash in `[0, 1)`, used for per-pixel dither.
#[inline]
pub fn hash2(p: Vec2) -> f32 {
    fract(p.dot(HASH2_DOT).sin() * HASH2_SCALE).min(HASH_MAX)
}
