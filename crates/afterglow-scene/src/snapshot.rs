//! PNG export of rendered frames.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::image::FrameImage;

/// Errors writing a frame to disk.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The output file could not be created or written.
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Encode a frame as an 8-bit RGBA PNG into `writer`.
pub fn encode_png_to<W: Write>(image: &FrameImage, writer: W) -> Result<(), SnapshotError> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.to_rgba8())?;
    writer.finish()?;
    Ok(())
}

/// Encode a frame as PNG bytes.
pub fn encode_png(image: &FrameImage) -> Result<Vec<u8>, SnapshotError> {
    let mut buf = Vec::new();
    encode_png_to(image, std::io::Cursor::new(&mut buf))?;
    Ok(buf)
}

/// Write a frame to `path` as PNG, creating parent directories as needed.
pub fn write_png(image: &FrameImage, path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    encode_png_to(image, BufWriter::new(file))?;
    log::info!(
        "Wrote {}x{} snapshot to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_png_has_signature_and_size() {
        let image = FrameImage::new(7, 5);
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 7);
        assert_eq!(reader.info().height, 5);
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    }

    #[test]
    fn test_write_png_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("frame.png");
        write_png(&FrameImage::new(2, 2), &path).unwrap();
        assert!(path.exists());
    }
}
