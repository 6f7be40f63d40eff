//! Procedural sunset scene: sky gradient, parallax mountain layers, a bird
//! flock and a post-processing stack, all evaluated per pixel.
//!
//! [`shade_pixel`] is the reference implementation of the per-pixel program.
//! The GPU program in `afterglow-render` mirrors it line for line, and
//! [`render_frame`] runs it across worker threads to produce a [`FrameImage`].

pub mod flock;
mod frame;
mod image;
mod kernel;
pub mod layers;
pub mod palette;
pub mod post;
pub mod sky;
mod snapshot;

pub use flock::{BirdSlot, FLOCK_SIZE, FlockParams, bird_distance, flock, flock_coverage};
pub use frame::{FrameParams, Resolution, SCROLL_TIME_SCALE};
pub use image::FrameImage;
pub use kernel::{
    composite_scene, composite_scene_with_flock, frag_coord, render_frame,
    render_frame_with_threads, shade_pixel,
};
pub use layers::{BIRD_LAYER, LAYER_COUNT, LayerDescriptor, layers};
pub use snapshot::{SnapshotError, encode_png, encode_png_to, write_png};
