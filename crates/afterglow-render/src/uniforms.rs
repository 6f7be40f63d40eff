//! Per-frame uniform block.

use afterglow_scene::FrameParams;
use bytemuck::{Pod, Zeroable};

use crate::surface::BackingSize;

/// Mirrors `FrameUniforms` in the fragment program. 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Backing size in device pixels.
    pub resolution: [f32; 2],
    /// Seconds, fed straight from the host's frame timestamp.
    pub time: f32,
    pub _padding: f32,
}

impl FrameUniforms {
    pub fn new(size: BackingSize, time: f32) -> Self {
        Self {
            resolution: [size.width as f32, size.height as f32],
            time,
            _padding: 0.0,
        }
    }

    /// Same inputs as seen by the CPU reference kernel.
    pub fn frame_params(&self) -> FrameParams {
        FrameParams::new(
            self.time,
            self.resolution[0] as u32,
            self.resolution[1] as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_block_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 16);
    }

    #[test]
    fn test_frame_params_roundtrip() {
        let uniforms = FrameUniforms::new(BackingSize::new(800, 600), 2.5);
        let params = uniforms.frame_params();
        assert_eq!(params.time, 2.5);
        assert_eq!(params.resolution.width, 800);
        assert_eq!(params.resolution.height, 600);
    }
}
