//! Vertical sky gradient and the additive sun glow.

use glam::{Vec2, Vec3};

use crate::palette::{SKY_GLOW, SKY_HORIZON, SKY_MID, SKY_TOP, SUN_CORE, SUN_HALO};

/// Vertical position of the sun in uv space.
pub const SUN_Y: f32 = 0.52;

/// One interpolated band of the gradient, active strictly above `floor`.
struct Band {
    floor: f32,
    span: f32,
    below: Vec3,
    above: Vec3,
}

/// Checked top to bottom; anything under the last floor is flat horizon.
const BANDS: [Band; 3] = [
    Band {
        floor: 0.72,
        span: 0.28,
        below: SKY_MID,
        above: SKY_TOP,
    },
    Band {
        floor: 0.50,
        span: 0.22,
        below: SKY_GLOW,
        above: SKY_MID,
    },
    Band {
        floor: 0.36,
        span: 0.14,
        below: SKY_HORIZON,
        above: SKY_GLOW,
    },
];

/// Horizontal sun position in aspect-corrected space (screen centre).
#[inline]
pub fn sun_x(aspect: f32) -> f32 {
    aspect * 0.5
}

/// Gradient colour at vertical uv position `y`.
pub fn sky_gradient(y: f32) -> Vec3 {
    BANDS
        .iter()
        .find(|band| y > band.floor)
        .map(|band| band.below.lerp(band.above, (y - band.floor) / band.span))
        .unwrap_or(SKY_HORIZON)
}

/// Additive glow around the sun. `px` is the aspect-corrected x coordinate.
///
/// The distance is squashed horizontally and stretched vertically so the halo
/// reads as a wide ellipse hugging the horizon.
pub fn sun_glow(px: f32, y: f32, aspect: f32) -> Vec3 {
    let d = Vec2::new((px - sun_x(aspect)) * 0.7, (y - SUN_Y) * 1.8).length();
    SUN_CORE * ((-d * 3.5).exp() * 0.5) + SUN_HALO * ((-d * 1.5).exp() * 0.2)
}

/// Sky colour before any mountain is drawn. Not clamped.
pub fn sky_color(uv: Vec2, aspect: f32) -> Vec3 {
    sky_gradient(uv.y) + sun_glow(uv.x * aspect, uv.y, aspect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_gradient_anchors() {
        assert!(close(sky_gradient(1.0), SKY_TOP));
        assert!(close(sky_gradient(0.30), SKY_HORIZON));
        assert!(close(sky_gradient(0.0), SKY_HORIZON));
    }

    #[test]
    fn test_gradient_continuous_at_band_floors() {
        for floor in [0.72f32, 0.50, 0.36] {
            let below = sky_gradient(floor);
            let above = sky_gradient(floor + 1e-4);
            assert!(
                (below - above).abs().max_element() < 5e-3,
                "discontinuity at {floor}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn test_band_floor_is_exclusive() {
        // y == 0.72 belongs to the band below, which ends on SKY_MID.
        assert!(close(sky_gradient(0.72), SKY_MID));
        assert!(close(sky_gradient(0.50), SKY_GLOW));
        assert!(close(sky_gradient(0.36), SKY_HORIZON));
    }

    #[test]
    fn test_sun_glow_peaks_at_sun() {
        let aspect = 16.0 / 9.0;
        let peak = sun_glow(sun_x(aspect), SUN_Y, aspect);
        assert!(close(peak, SUN_CORE * 0.5 + SUN_HALO * 0.2));

        let mut previous = peak.x;
        for step in 1..20 {
            let glow = sun_glow(sun_x(aspect) + step as f32 * 0.05, SUN_Y, aspect);
            assert!(glow.x < previous);
            previous = glow.x;
        }
    }

    #[test]
    fn test_glow_is_wider_than_tall() {
        let aspect = 1.0;
        let sideways = sun_glow(sun_x(aspect) + 0.1, SUN_Y, aspect);
        let upward = sun_glow(sun_x(aspect), SUN_Y + 0.1, aspect);
        assert!(sideways.x > upward.x);
    }
}
