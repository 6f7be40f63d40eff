//! A small flock of flapping birds drifting across the sky.
//!
//! Each bird is a slot whose placement, wobble and flap rate come from hashes
//! of a per-slot id. Positions wrap horizontally so the flock cycles off one
//! edge and back in at the other.

use afterglow_noise::{fract, hash, smoothstep};
use glam::Vec2;

/// Number of birds in the flock.
pub const FLOCK_SIZE: usize = 8;

/// Extra width added to the aspect ratio to form the horizontal wrap modulus.
pub const WRAP_MARGIN: f32 = 0.1;

/// Leftward shift applied after wrapping so birds enter from just off-screen.
pub const WRAP_SHIFT: f32 = 0.05;

/// Peak wing rotation in radians (about 5 degrees).
pub const FLAP_AMPLITUDE: f32 = 0.087;

const BODY_RADIUS: f32 = 0.0003;
const WING_SPAN: f32 = 0.0035;
const WING_THICKNESS: f32 = 0.00018;
const EDGE_SOFTNESS: f32 = 0.0001;

/// Flock-wide placement and motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlockParams {
    /// Flock centre in (aspect-corrected x, uv y).
    pub center: Vec2,
    /// Size of the bounding ellipse birds scatter within.
    pub spread: f32,
    /// Rightward drift in aspect-corrected units per second.
    pub speed: f32,
    /// Uniform scale of every bird silhouette.
    pub size: f32,
}

impl FlockParams {
    pub const SUNSET: Self = Self {
        center: Vec2::new(0.45, 0.68),
        spread: 0.08,
        speed: 0.03,
        size: 1.0,
    };

    /// Horizontal wrap modulus for a given aspect ratio.
    pub fn wrap_width(&self, aspect: f32) -> f32 {
        aspect + WRAP_MARGIN
    }

    /// Seconds for the drift to carry a bird once around the wrap.
    pub fn drift_period(&self, aspect: f32) -> f32 {
        self.wrap_width(aspect) / self.speed
    }

    /// Combined coverage of every bird: the strongest slot wins.
    pub fn coverage(&self, uv: Vec2, aspect: f32, time: f32) -> f32 {
        flock()
            .iter()
            .map(|bird| bird.coverage(self, uv, aspect, time))
            .fold(0.0, f32::max)
    }
}

impl Default for FlockParams {
    fn default() -> Self {
        Self::SUNSET
    }
}

/// One bird of the flock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BirdSlot {
    /// Slot index, 0..FLOCK_SIZE.
    pub index: usize,
    /// Hash key for this slot.
    pub id: f32,
}

impl BirdSlot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            id: index as f32 * 7.13 + 3.0,
        }
    }

    /// Static offset from the flock centre.
    pub fn offset(&self, params: &FlockParams, aspect: f32) -> Vec2 {
        Vec2::new(
            (hash(self.id * 1.1) - 0.5) * params.spread * aspect,
            (hash(self.id * 2.3) - 0.5) * params.spread * 0.35,
        )
    }

    /// Low-amplitude flight wobble at `time`.
    pub fn wobble(&self, time: f32) -> Vec2 {
        let j = self.index as f32;
        Vec2::new(
            (time * (1.2 + hash(self.id * 3.7) * 0.8) + j).sin() * 0.005,
            (time * (0.8 + hash(self.id * 5.1) * 0.6) + j * 2.0).sin() * 0.003,
        )
    }

    /// Wing beats per radian of time, in `[5, 7]`.
    pub fn flap_speed(&self) -> f32 {
        5.0 + hash(self.id * 7.3) * 2.0
    }

    pub fn flap_phase(&self, time: f32) -> f32 {
        time * self.flap_speed() + self.index as f32 * 1.8
    }

    /// Wrap an unwrapped aspect-corrected x onto the ring `[-0.05, aspect + 0.05)`.
    pub fn wrap_x(params: &FlockParams, x: f32, aspect: f32) -> f32 {
        let width = params.wrap_width(aspect);
        fract(x / width) * width - WRAP_SHIFT
    }

    /// Wrapped horizontal position ignoring wobble. Periodic in
    /// [`FlockParams::drift_period`].
    pub fn drift_x(&self, params: &FlockParams, time: f32, aspect: f32) -> f32 {
        let x = params.center.x + self.offset(params, aspect).x + time * params.speed;
        Self::wrap_x(params, x, aspect)
    }

    /// Bird centre at `time` in (aspect-corrected x, uv y).
    pub fn position(&self, params: &FlockParams, time: f32, aspect: f32) -> Vec2 {
        let offset = self.offset(params, aspect);
        let wobble = self.wobble(time);
        let x = params.center.x + offset.x + time * params.speed + wobble.x;
        Vec2::new(
            Self::wrap_x(params, x, aspect),
            params.center.y + offset.y + wobble.y,
        )
    }

    /// Anti-aliased silhouette coverage in `[0, 1]` at uv `uv`.
    pub fn coverage(&self, params: &FlockParams, uv: Vec2, aspect: f32, time: f32) -> f32 {
        let center = self.position(params, time, aspect);
        let local = (Vec2::new(uv.x * aspect, uv.y) - center) / params.size;
        let d = bird_distance(local, self.flap_phase(time)) * params.size;
        smoothstep(EDGE_SOFTNESS, -EDGE_SOFTNESS, d)
    }
}

/// Signed distance to a bird centred at the origin with wings at `wing_phase`.
///
/// The body is a small disc. Each wing is a parabolic arc of fixed span,
/// mirrored across x = 0 and rotated by the current flap angle.
pub fn bird_distance(p: Vec2, wing_phase: f32) -> f32 {
    let angle = wing_phase.sin() * FLAP_AMPLITUDE;
    let body = p.length() - BODY_RADIUS;

    let mirrored = Vec2::new(-p.x.abs(), p.y);
    let (sin, cos) = angle.sin_cos();
    let rotated = Vec2::new(
        mirrored.x * cos - mirrored.y * sin,
        mirrored.x * sin + mirrored.y * cos,
    );

    let t = (-rotated.x / WING_SPAN).clamp(0.0, 1.0);
    let wing_point = Vec2::new(-t * WING_SPAN, -t * t * WING_SPAN * 0.5);
    let wing = (rotated - wing_point).length() - WING_THICKNESS;

    body.min(wing)
}

/// All slots in index order.
pub fn flock() -> [BirdSlot; FLOCK_SIZE] {
    std::array::from_fn(BirdSlot::new)
}

/// [`FlockParams::coverage`] for the sunset flock.
pub fn flock_coverage(uv: Vec2, aspect: f32, time: f32) -> f32 {
    FlockParams::SUNSET.coverage(uv, aspect, time)
}
