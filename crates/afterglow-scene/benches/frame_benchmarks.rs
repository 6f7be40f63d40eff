use afterglow_scene::{FrameParams, render_frame, render_frame_with_threads, shade_pixel};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;

fn bench_shade_pixel(c: &mut Criterion) {
    let params = FrameParams::new(12.0, 1280, 720);
    c.bench_function("shade_pixel", |bencher| {
        bencher.iter(|| black_box(shade_pixel(black_box(Vec2::new(640.5, 360.5)), &params)))
    });
}

fn bench_frame_single_thread(c: &mut Criterion) {
    let params = FrameParams::new(12.0, 320, 180);
    c.bench_function("frame_320x180_1_thread", |bencher| {
        bencher.iter(|| black_box(render_frame_with_threads(&params, 1)))
    });
}

fn bench_frame_all_threads(c: &mut Criterion) {
    let params = FrameParams::new(12.0, 320, 180);
    c.bench_function("frame_320x180_all_threads", |bencher| {
        bencher.iter(|| black_box(render_frame(&params)))
    });
}

criterion_group!(
    benches,
    bench_shade_pixel,
    bench_frame_single_thread,
    bench_frame_all_threads
);
criterion_main!(benches);
