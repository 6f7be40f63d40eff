//! Multi-octave ridged terrain profile.
//!
//! Low octaves use plain value noise for broad slopes, middle octaves blend
//! toward ridged noise by a sharpness control, and high octaves are fully
//! ridged for crisp crests. Two extra terms shape the silhouette: sparse tall
//! spires and a slow large-scale swell.

use crate::shading::mix;
use crate::value::{ridge, value_noise};

/// Which noise flavour an octave samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OctaveBand {
    /// Plain value noise (octaves 0-1).
    Base,
    /// Value noise blended toward ridge noise by sharpness (octaves 2-4).
    Transition,
    /// Ridge noise only (octaves 5 and above).
    Ridged,
}

impl OctaveBand {
    /// Band for the given octave index.
    pub fn for_octave(index: u32) -> Self {
        match index {
            0 | 1 => Self::Base,
            2..=4 => Self::Transition,
            _ => Self::Ridged,
        }
    }

    /// Sample this band at `p`. `blend` only affects [`OctaveBand::Transition`].
    #[inline]
    pub fn sample(self, p: f32, blend: f32) -> f32 {
        match self {
            Self::Base => value_noise(p),
            Self::Transition => mix(value_noise(p), ridge(p), blend),
            Self::Ridged => ridge(p),
        }
    }
}

/// Constants for the terrain fractal sum.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainParams {
    /// Number of octaves summed.
    pub octaves: u32,
    /// Amplitude of octave 0.
    pub amplitude: f32,
    /// Amplitude multiplier per octave.
    pub persistence: f32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Scales `sharpness` into the transition-band blend factor.
    pub transition_blend: f32,
    /// Frequency of the spire term.
    pub spire_frequency: f32,
    /// Seed multiplier of the spire term.
    pub spire_seed_scale: f32,
    /// Peak height of the spire term.
    pub spire_amplitude: f32,
    /// Frequency of the large-scale swell.
    pub swell_frequency: f32,
    /// Seed multiplier of the swell.
    pub swell_seed_scale: f32,
    /// Peak height of the swell.
    pub swell_amplitude: f32,
}

impl TerrainParams {
    /// Values used by the sunset scene.
    pub const SUNSET: Self = Self {
        octaves: 10,
        amplitude: 0.55,
        persistence: 0.48,
        lacunarity: 2.05,
        transition_blend: 0.7,
        spire_frequency: 0.3,
        spire_seed_scale: 1.7,
        spire_amplitude: 0.4,
        swell_frequency: 0.08,
        swell_seed_scale: 0.3,
        swell_amplitude: 0.35,
    };

    /// Upper bound of [`terrain_with`]: the geometric octave sum plus both
    /// shaping terms at their peaks. Every noise sample lies in `[0, 1]`.
    pub fn max_amplitude(&self) -> f32 {
        let mut sum = 0.0;
        let mut amp = self.amplitude;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= self.persistence;
        }
        sum + self.spire_amplitude + self.swell_amplitude
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self::SUNSET
    }
}

/// Terrain height at horizontal position `x` for a layer `seed`.
///
/// `sharpness` in `[0, 1]` pushes the middle octaves toward ridged crests.
pub fn terrain(x: f32, seed: f32, sharpness: f32) -> f32 {
    terrain_with(&TerrainParams::SUNSET, x, seed, sharpness)
}

/// [`terrain`] with explicit constants.
pub fn terrain_with(params: &TerrainParams, x: f32, seed: f32, sharpness: f32) -> f32 {
    let p = x + seed;
    let blend = sharpness * params.transition_blend;

    let mut height = 0.0;
    let mut amplitude = params.amplitude;
    let mut frequency = 1.0;
    for octave in 0..params.octaves {
        height += OctaveBand::for_octave(octave).sample(p * frequency, blend) * amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    // Shaping terms sample the unshifted position.
    let spire = ridge(x * params.spire_frequency + seed * params.spire_seed_scale)
        .max(0.0)
        .powi(3)
        * params.spire_amplitude;
    let swell = value_noise(x * params.swell_frequency + seed * params.swell_seed_scale)
        * params.swell_amplitude;

    height + spire + swell
}
