//! Post-processing applied once per pixel after all layers.

use afterglow_noise::{fract, hash2, smoothstep};
use glam::{Vec2, Vec3};

/// Output gamma exponent.
pub const GAMMA: f32 = 0.93;
/// Peak-to-peak amplitude of the dither noise.
pub const DITHER_AMPLITUDE: f32 = 0.012;
/// Strength of the corner vignette.
pub const VIGNETTE_STRENGTH: f32 = 0.35;
/// Maximum darkening at the bottom edge.
pub const BOTTOM_SHADE: f32 = 0.5;
/// Height over which the bottom darkening fades out.
pub const BOTTOM_SHADE_HEIGHT: f32 = 0.15;

/// Multiplier darkening the lowest strip of the frame.
pub fn bottom_shade(y: f32) -> f32 {
    1.0 - smoothstep(BOTTOM_SHADE_HEIGHT, 0.0, y) * BOTTOM_SHADE
}

/// Radial vignette multiplier; 1 at the centre.
pub fn vignette(uv: Vec2) -> f32 {
    let centered = uv - Vec2::splat(0.5);
    1.0 - centered.dot(centered) * VIGNETTE_STRENGTH
}

/// Signed dither offset for a pixel, reseeded every second by `fract(time)`.
pub fn dither(frag_coord: Vec2, time: f32) -> f32 {
    (hash2(frag_coord + Vec2::splat(fract(time))) - 0.5) * DITHER_AMPLITUDE
}

/// Full stack: bottom shade, vignette, gamma, dither, clamp.
pub fn post_process(color: Vec3, uv: Vec2, frag_coord: Vec2, time: f32) -> Vec3 {
    let shaded = color * bottom_shade(uv.y) * vignette(uv);
    let graded = shaded.powf(GAMMA);
    (graded + Vec3::splat(dither(frag_coord, time))).clamp(Vec3::ZERO, Vec3::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_shade_profile() {
        assert_eq!(bottom_shade(0.0), 0.5);
        assert_eq!(bottom_shade(0.15), 1.0);
        assert_eq!(bottom_shade(0.9), 1.0);
        assert!(bottom_shade(0.05) < bottom_shade(0.1));
    }

    #[test]
    fn test_vignette_center_and_corner() {
        assert_eq!(vignette(Vec2::splat(0.5)), 1.0);
        let corner = vignette(Vec2::ZERO);
        assert!((corner - (1.0 - 0.5 * 0.35)).abs() < 1e-6);
    }

    #[test]
    fn test_dither_is_small_and_signed() {
        let mut saw_negative = false;
        let mut saw_positive = false;
        for x in 0..64 {
            for y in 0..64 {
                let d = dither(Vec2::new(x as f32 + 0.5, y as f32 + 0.5), 0.0);
                assert!(d.abs() <= DITHER_AMPLITUDE * 0.5 + 1e-6);
                saw_negative |= d < 0.0;
                saw_positive |= d > 0.0;
            }
        }
        assert!(saw_negative && saw_positive);
    }

    #[test]
    fn test_output_is_clamped() {
        let uv = Vec2::splat(0.5);
        let frag = Vec2::new(10.5, 10.5);
        let hot = post_process(Vec3::splat(4.0), uv, frag, 0.0);
        assert_eq!(hot, Vec3::ONE);
        let cold = post_process(Vec3::ZERO, uv, frag, 0.0);
        assert!(cold.min_element() >= 0.0);
    }
}
