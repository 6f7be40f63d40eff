//! CPU frame buffer.

use glam::Vec3;

/// An opaque RGB image stored top row first, channels in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameImage {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl FrameImage {
    /// Black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Vec3] {
        &mut self.pixels
    }

    /// Pixel at (`x`, `y`) with `y` counted from the top, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Vec3> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row, top row first.
    pub fn row(&self, y: u32) -> &[Vec3] {
        let width = self.width as usize;
        let start = y as usize * width;
        &self.pixels[start..start + width]
    }

    /// Mean colour of a row.
    pub fn row_average(&self, y: u32) -> Vec3 {
        let row = self.row(y);
        row.iter().copied().sum::<Vec3>() / row.len() as f32
    }

    /// Pack into 8-bit RGBA with alpha fixed at 255.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            let [r, g, b] = pixel.to_array().map(unorm8);
            bytes.extend_from_slice(&[r, g, b, u8::MAX]);
        }
        bytes
    }
}

fn unorm8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
