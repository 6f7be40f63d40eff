//! Deterministic hashing, value noise and ridged fractal terrain.
//!
//! Every function in this crate is a pure function of its arguments, so the CPU
//! reference kernel and the GPU program agree on the same lattice values. The
//! scalar helpers in [`shading`] follow shading-language semantics rather than
//! Rust's (`fract` floors, `smoothstep` accepts reversed edges).

mod hash;
pub mod shading;
mod terrain;
mod value;

pub use hash::{HASH_MAX, HASH_SCALE, HASH2_DOT, HASH2_SCALE, hash, hash2};
pub use shading::{fract, mix, smoothstep};
pub use terrain::{OctaveBand, TerrainParams, terrain, terrain_with};
pub use value::{quintic, ridge, value_noise};
