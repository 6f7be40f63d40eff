//! A [`GpuBackend`] that runs the CPU reference kernel.
//!
//! Programs are validated with the same naga front end the wgpu backend
//! uses, so compile and link failures behave identically. Frames are written
//! to an in-memory [`FrameImage`] instead of a surface.

use afterglow_scene::{FrameImage, render_frame, render_frame_with_threads};

use crate::backend::GpuBackend;
use crate::error::DriverError;
use crate::program::{self, CompiledProgram, ProgramSource};
use crate::quad::QuadVertex;
use crate::surface::BackingSize;
use crate::uniforms::FrameUniforms;

#[derive(Default)]
pub struct SoftwareBackend {
    threads: Option<usize>,
    unavailable: bool,
    context_lost: bool,
    acquired: bool,
    program: Option<CompiledProgram>,
    quad: Option<Vec<QuadVertex>>,
    viewport: Option<BackingSize>,
    viewport_updates: usize,
    last_frame: Option<FrameImage>,
}

impl SoftwareBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render on exactly `threads` workers instead of one per core.
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads: Some(threads.max(1)),
            ..Self::default()
        }
    }

    /// A backend whose `acquire` always fails.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Make every subsequent draw report a lost surface.
    pub fn lose_context(&mut self) {
        self.context_lost = true;
    }

    pub fn last_frame(&self) -> Option<&FrameImage> {
        self.last_frame.as_ref()
    }

    pub fn viewport(&self) -> Option<BackingSize> {
        self.viewport
    }

    /// Number of `resize_viewport` calls so far.
    pub fn viewport_updates(&self) -> usize {
        self.viewport_updates
    }

    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn has_quad(&self) -> bool {
        self.quad.is_some()
    }

    fn require_context(&self) -> Result<(), DriverError> {
        if self.acquired {
            Ok(())
        } else {
            Err(DriverError::ContextUnavailable(
                "software context not acquired".to_string(),
            ))
        }
    }
}

impl GpuBackend for SoftwareBackend {
    fn acquire(&mut self, size: BackingSize) -> Result<(), DriverError> {
        if self.unavailable {
            return Err(DriverError::ContextUnavailable(
                "software rendering disabled".to_string(),
            ));
        }
        log::debug!("Software context acquired at {}x{}", size.width, size.height);
        self.acquired = true;
        self.context_lost = false;
        Ok(())
    }

    fn compile_program(&mut self, source: &ProgramSource) -> Result<(), DriverError> {
        self.require_context()?;
        self.program = Some(program::compile(source)?);
        Ok(())
    }

    fn upload_quad(&mut self, vertices: &[QuadVertex]) -> Result<(), DriverError> {
        self.require_context()?;
        self.quad = Some(vertices.to_vec());
        Ok(())
    }

    fn resize_viewport(&mut self, size: BackingSize) {
        self.viewport = Some(size);
        self.viewport_updates += 1;
    }

    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), DriverError> {
        if self.context_lost {
            return Err(DriverError::SurfaceLost);
        }
        self.require_context()?;
        if self.program.is_none() || self.quad.is_none() {
            return Err(DriverError::ContextUnavailable(
                "draw issued before program and quad were ready".to_string(),
            ));
        }

        let params = uniforms.frame_params();
        let image = match self.threads {
            Some(threads) => render_frame_with_threads(&params, threads),
            None => render_frame(&params),
        };
        self.last_frame = Some(image);
        Ok(())
    }

    fn release(&mut self) {
        self.acquired = false;
        self.program = None;
        self.quad = None;
        self.viewport = None;
    }
}
