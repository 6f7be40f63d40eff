//! The seam between the render driver and a concrete graphics context.

use crate::error::DriverError;
use crate::program::ProgramSource;
use crate::quad::QuadVertex;
use crate::surface::BackingSize;
use crate::uniforms::FrameUniforms;

/// A graphics context the driver can bring up, draw into and tear down.
///
/// Calls arrive in a fixed order: `acquire`, `compile_program`,
/// `upload_quad`, `resize_viewport`, then any number of `draw` and
/// `resize_viewport` calls, then `release`.
pub trait GpuBackend {
    /// Obtain a context for a surface of the given backing size.
    fn acquire(&mut self, size: BackingSize) -> Result<(), DriverError>;

    /// Compile and link the two program stages.
    fn compile_program(&mut self, source: &ProgramSource) -> Result<(), DriverError>;

    /// Upload the static quad geometry.
    fn upload_quad(&mut self, vertices: &[QuadVertex]) -> Result<(), DriverError>;

    /// Resize the drawing buffer and viewport to the new backing size.
    fn resize_viewport(&mut self, size: BackingSize);

    /// Draw one frame with the given uniforms.
    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), DriverError>;

    /// Drop every resource obtained since `acquire`.
    fn release(&mut self);
}
