//! Headless single-frame rendering.

use std::time::Instant;

use afterglow_config::SnapshotConfig;
use afterglow_scene::{FrameImage, FrameParams, SnapshotError, render_frame, write_png};
use tracing::info;

/// Render one frame on the CPU at the configured time and size.
pub fn render_snapshot(settings: &SnapshotConfig) -> FrameImage {
    let params = FrameParams::new(settings.time, settings.width, settings.height);
    render_frame(&params)
}

/// Render and write `settings.output` as PNG.
pub fn run_snapshot(settings: &SnapshotConfig) -> Result<(), SnapshotError> {
    let start = Instant::now();
    let image = render_snapshot(settings);
    write_png(&image, &settings.output)?;
    info!(
        width = image.width(),
        height = image.height(),
        time = settings.time,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Snapshot written to {}",
        settings.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_snapshot_uses_configured_size() {
        let settings = SnapshotConfig {
            width: 24,
            height: 16,
            ..Default::default()
        };
        let image = render_snapshot(&settings);
        assert_eq!((image.width(), image.height()), (24, 16));
    }

    #[test]
    fn test_run_snapshot_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SnapshotConfig {
            width: 24,
            height: 16,
            time: 7.5,
            output: dir.path().join("frames").join("dusk.png"),
        };

        run_snapshot(&settings).unwrap();

        let bytes = std::fs::read(&settings.output).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }
}
