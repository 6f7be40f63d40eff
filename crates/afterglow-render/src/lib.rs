//! Render driver for the afterglow scene.
//!
//! [`RenderDriver`] runs the lifecycle (acquire, compile, upload, per-frame
//! draw, teardown) against any [`GpuBackend`] and [`FrameHost`].
//! [`WgpuBackend`] drives a real window surface and [`SoftwareBackend`]
//! renders through the CPU reference kernel.

pub mod backend;
pub mod driver;
pub mod error;
pub mod gpu;
pub mod host;
pub mod pipeline;
pub mod program;
pub mod quad;
pub mod software;
pub mod surface;
pub mod uniforms;
pub mod wgpu_backend;

pub use backend::GpuBackend;
pub use driver::{DriverState, FrameOutcome, RenderDriver};
pub use error::{DriverError, ShaderStage};
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use host::{FrameHost, FrameRequest};
pub use pipeline::ShadingPipeline;
pub use program::{CompiledProgram, FRAGMENT_SOURCE, ProgramSource, VERTEX_SOURCE};
pub use quad::{QUAD_VERTICES, QuadBuffer, QuadVertex};
pub use software::SoftwareBackend;
pub use surface::{BackingSize, MIN_SURFACE_DIMENSION, SurfaceResizeEvent, SurfaceWrapper};
pub use uniforms::FrameUniforms;
pub use wgpu_backend::WgpuBackend;
