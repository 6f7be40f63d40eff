//! The per-pixel program and a threaded CPU runner for it.

use std::time::Instant;

use glam::{Vec2, Vec3};

use crate::flock::FlockParams;
use crate::frame::FrameParams;
use crate::image::FrameImage;
use crate::layers::{BIRD_LAYER, layers};
use crate::palette::BIRD;
use crate::post::post_process;
use crate::sky::sky_color;

/// Opacity of birds over their layer.
const BIRD_OPACITY: f32 = 0.7;

/// Fragment coordinate of image pixel (`column`, `row`), rows counted from the top.
///
/// Fragment coordinates sit at pixel centres with the origin at the bottom-left.
pub fn frag_coord(column: u32, row: u32, height: u32) -> Vec2 {
    Vec2::new(column as f32 + 0.5, height as f32 - row as f32 - 0.5)
}

/// Sky, mountains and birds for one pixel, before post-processing.
pub fn composite_scene(frag: Vec2, params: &FrameParams) -> Vec3 {
    composite_scene_with_flock(frag, params, &FlockParams::SUNSET)
}

/// [`composite_scene`] with an explicit flock placement.
///
/// Layers are drawn back to front and each one that covers the pixel replaces
/// the colour outright. Birds blend in during the [`BIRD_LAYER`] pass, so
/// layers in front of it occlude them.
pub fn composite_scene_with_flock(
    frag: Vec2,
    params: &FrameParams,
    flock: &FlockParams,
) -> Vec3 {
    let res = params.resolution;
    let uv = frag / Vec2::new(res.width as f32, res.height as f32);
    let aspect = params.aspect();
    let px = uv.x * aspect;
    let scroll_time = params.scroll_time();

    let mut color = sky_color(uv, aspect);
    for layer in layers() {
        let height = layer.height_at(px, aspect, scroll_time);
        if uv.y < height {
            color = layer.shade(uv.y, height, px, aspect);
        }
        if layer.index == BIRD_LAYER {
            let birds = flock.coverage(uv, aspect, params.time);
            color = color.lerp(BIRD, birds * BIRD_OPACITY);
        }
    }
    color
}

/// Final display colour of one pixel; channels in `[0, 1]`, alpha implied 1.
pub fn shade_pixel(frag: Vec2, params: &FrameParams) -> Vec3 {
    let res = params.resolution;
    let uv = frag / Vec2::new(res.width as f32, res.height as f32);
    post_process(composite_scene(frag, params), uv, frag, params.time)
}

/// Render a full frame using one worker per available CPU.
pub fn render_frame(params: &FrameParams) -> FrameImage {
    render_frame_with_threads(params, num_cpus::get())
}

/// Render a full frame split into row bands across `threads` workers.
///
/// Each worker owns a disjoint band of the output, so the result is identical
/// for any thread count.
pub fn render_frame_with_threads(params: &FrameParams, threads: usize) -> FrameImage {
    let start = Instant::now();
    let res = params.resolution;
    let mut image = FrameImage::new(res.width, res.height);
    let width = res.width as usize;
    let rows_per_band = (res.height as usize).div_ceil(threads.max(1));

    std::thread::scope(|scope| {
        for (band, pixels) in image
            .pixels_mut()
            .chunks_mut(rows_per_band * width)
            .enumerate()
        {
            let first_row = band * rows_per_band;
            scope.spawn(move || {
                for (offset, row) in pixels.chunks_mut(width).enumerate() {
                    let y = (first_row + offset) as u32;
                    for (x, pixel) in row.iter_mut().enumerate() {
                        *pixel = shade_pixel(frag_coord(x as u32, y, res.height), params);
                    }
                }
            });
        }
    });

    log::debug!(
        "Rendered {}x{} frame at t={:.3}s on {} threads in {:.1}ms",
        res.width,
        res.height,
        params.time,
        threads,
        start.elapsed().as_secs_f64() * 1000.0
    );
    image
}
