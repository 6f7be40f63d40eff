//! Scene colours, linear RGB in display range.

use glam::Vec3;

/// Sky at the horizon line.
pub const SKY_HORIZON: Vec3 = Vec3::new(1.0, 0.88, 0.52);
/// Warm glow band above the horizon.
pub const SKY_GLOW: Vec3 = Vec3::new(0.95, 0.75, 0.38);
/// Mid-sky band.
pub const SKY_MID: Vec3 = Vec3::new(0.58, 0.40, 0.24);
/// Top of the frame.
pub const SKY_TOP: Vec3 = Vec3::new(0.25, 0.22, 0.22);

/// Tight sun core.
pub const SUN_CORE: Vec3 = Vec3::new(1.0, 0.92, 0.65);
/// Wide sun halo.
pub const SUN_HALO: Vec3 = Vec3::new(0.9, 0.7, 0.4);

/// Silhouette colour of the nearest layers.
pub const MOUNTAIN_DARK: Vec3 = Vec3::new(0.022, 0.025, 0.015);
/// Colour distant layers fade toward.
pub const MOUNTAIN_FOG: Vec3 = Vec3::new(0.82, 0.65, 0.38);
/// Rim light along ridgelines.
pub const RIM_LIGHT: Vec3 = Vec3::new(0.95, 0.78, 0.42);
/// Extra rim warmth near the sun's column.
pub const RIM_SUN_TINT: Vec3 = Vec3::new(0.3, 0.2, 0.08);

/// Bird silhouettes.
pub const BIRD: Vec3 = Vec3::new(0.08, 0.06, 0.04);
