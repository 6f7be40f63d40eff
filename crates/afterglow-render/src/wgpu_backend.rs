//! [`GpuBackend`] over a real wgpu surface.

use std::sync::Arc;

use winit::window::Window;

use crate::backend::GpuBackend;
use crate::error::DriverError;
use crate::gpu::{RenderContext, SurfaceError, init_render_context_blocking};
use crate::pipeline::ShadingPipeline;
use crate::program::{self, ProgramSource};
use crate::quad::{QuadBuffer, QuadVertex};
use crate::surface::BackingSize;
use crate::uniforms::FrameUniforms;

const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

pub struct WgpuBackend {
    window: Arc<Window>,
    vsync: bool,
    power_preference: wgpu::PowerPreference,
    context: Option<RenderContext>,
    pipeline: Option<ShadingPipeline>,
    quad: Option<QuadBuffer>,
}

impl WgpuBackend {
    pub fn new(window: Arc<Window>, vsync: bool, power_preference: wgpu::PowerPreference) -> Self {
        Self {
            window,
            vsync,
            power_preference,
            context: None,
            pipeline: None,
            quad: None,
        }
    }

    fn context_or_err(&self) -> Result<&RenderContext, DriverError> {
        self.context
            .as_ref()
            .ok_or_else(|| DriverError::ContextUnavailable("GPU context not acquired".to_string()))
    }
}

impl GpuBackend for WgpuBackend {
    fn acquire(&mut self, size: BackingSize) -> Result<(), DriverError> {
        let context = init_render_context_blocking(
            self.window.clone(),
            size,
            self.vsync,
            self.power_preference,
        )
        .map_err(|err| DriverError::ContextUnavailable(err.to_string()))?;
        self.context = Some(context);
        Ok(())
    }

    fn compile_program(&mut self, source: &ProgramSource) -> Result<(), DriverError> {
        // Validate first so wgpu never sees a module it would reject.
        let compiled = program::compile(source)?;
        let context = self.context_or_err()?;
        self.pipeline = Some(ShadingPipeline::new(
            &context.device,
            &compiled,
            context.surface_format,
        ));
        Ok(())
    }

    fn upload_quad(&mut self, vertices: &[QuadVertex]) -> Result<(), DriverError> {
        let context = self.context_or_err()?;
        self.quad = Some(QuadBuffer::new(&context.device, vertices));
        Ok(())
    }

    fn resize_viewport(&mut self, size: BackingSize) {
        if let Some(context) = self.context.as_mut() {
            context.resize(size);
        }
    }

    fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), DriverError> {
        let (Some(context), Some(pipeline), Some(quad)) =
            (self.context.as_ref(), self.pipeline.as_ref(), self.quad.as_ref())
        else {
            return Err(DriverError::ContextUnavailable(
                "draw issued before program and quad were ready".to_string(),
            ));
        };

        let frame = match context.get_current_texture() {
            Ok(frame) => frame,
            Err(SurfaceError::Timeout) => {
                log::warn!("Surface acquisition timed out, skipping frame");
                return Ok(());
            }
            Err(SurfaceError::Lost | SurfaceError::OutOfMemory) => {
                return Err(DriverError::SurfaceLost);
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        pipeline.update(&context.queue, uniforms);

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("afterglow-frame"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("afterglow-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            pipeline.draw(&mut pass, quad);
        }

        context.queue.submit([encoder.finish()]);
        self.window.pre_present_notify();
        frame.present();
        Ok(())
    }

    fn release(&mut self) {
        // Pipeline and quad reference the device, so drop them first.
        self.quad = None;
        self.pipeline = None;
        self.context = None;
    }
}
