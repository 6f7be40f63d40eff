//! Parallax mountain layers, back (index 0) to front (index 8).

use afterglow_noise::terrain;
use glam::Vec3;

use crate::palette::{MOUNTAIN_DARK, MOUNTAIN_FOG, RIM_LIGHT, RIM_SUN_TINT};
use crate::sky::sun_x;

/// Number of depth layers.
pub const LAYER_COUNT: usize = 9;

/// Layer whose pass also composites the bird flock.
pub const BIRD_LAYER: usize = 3;

/// Ridgelines never rise above this uv height.
pub const MAX_RIDGE_HEIGHT: f32 = 0.92;

/// How quickly rim light decays below a ridgeline, per uv unit.
const RIM_FALLOFF: f32 = 90.0;
const RIM_STRENGTH: f32 = 0.45;

/// Parameters of one depth layer, derived entirely from its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerDescriptor {
    /// Position in draw order.
    pub index: usize,
    /// `index / 8`: 0 for the farthest layer, 1 for the nearest.
    pub depth: f32,
    /// Terrain seed.
    pub seed: f32,
    /// Terrain sharpness.
    pub jaggedness: f32,
    /// Horizontal scroll rate against the slowed scroll clock.
    pub scroll_speed: f32,
    /// Ridge baseline in uv height.
    pub base_height: f32,
    /// Terrain height multiplier.
    pub vertical_scale: f32,
}

impl LayerDescriptor {
    pub fn for_index(index: usize) -> Self {
        let depth = index as f32 / (LAYER_COUNT - 1) as f32;
        Self {
            index,
            depth,
            seed: index as f32 * 173.7 + 31.0,
            jaggedness: 0.25 + depth * 0.6,
            scroll_speed: 0.03 + depth.powf(1.8) * 1.2,
            base_height: 0.48 - depth * 0.32,
            vertical_scale: 0.16 + depth * 0.22,
        }
    }

    /// Horizontal terrain frequency multiplier; nearer layers are busier.
    pub fn frequency_scale(&self) -> f32 {
        0.5 + self.depth * 0.3
    }

    /// Aerial perspective weight: 1 for the farthest layer, 0 for the nearest.
    pub fn fog(&self) -> f32 {
        (1.0 - self.depth).powf(1.5)
    }

    /// Ridgeline height in uv space at aspect-corrected x `px`.
    pub fn height_at(&self, px: f32, aspect: f32, scroll_time: f32) -> f32 {
        let scroll = px / aspect + scroll_time * self.scroll_speed;
        let h = terrain(scroll * self.frequency_scale(), self.seed, self.jaggedness)
            * self.vertical_scale
            + self.base_height;
        h.min(MAX_RIDGE_HEIGHT)
    }

    /// Colour of this layer at a pixel below its ridgeline `height`.
    pub fn shade(&self, y: f32, height: f32, px: f32, aspect: f32) -> Vec3 {
        let fog = self.fog();
        let base = MOUNTAIN_DARK.lerp(MOUNTAIN_FOG, fog);
        let rim = (-(height - y) * RIM_FALLOFF).exp() * fog * RIM_STRENGTH;
        let offset = (px - sun_x(aspect)) / aspect;
        let sun_proximity = (-offset * offset * 3.0).exp();
        base + RIM_LIGHT * rim + RIM_SUN_TINT * (rim * sun_proximity)
    }
}

/// All layers in draw order.
pub fn layers() -> [LayerDescriptor; LAYER_COUNT] {
    std::array::from_fn(LayerDescriptor::for_index)
}
