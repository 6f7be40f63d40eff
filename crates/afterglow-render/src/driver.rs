//! Render driver lifecycle.
//!
//! [`RenderDriver`] owns one backend and one host and moves through
//! `Uninitialized -> Ready -> Running -> Stopped`, with `Failed` as a terminal
//! state reached from any step that cannot complete. All GPU handles live
//! behind the backend, so tearing the driver down releases them together.

use crate::backend::GpuBackend;
use crate::error::DriverError;
use crate::host::{FrameHost, FrameRequest};
use crate::program::ProgramSource;
use crate::quad::QUAD_VERTICES;
use crate::surface::{BackingSize, SurfaceResizeEvent, SurfaceWrapper};
use crate::uniforms::FrameUniforms;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Nothing acquired yet.
    Uninitialized,
    /// Context acquired and program compiled; no frames scheduled.
    Ready,
    /// A frame request is in flight.
    Running,
    /// Torn down by `stop`. May be started again.
    Stopped,
    /// Terminal. A fresh driver is needed.
    Failed,
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Not running, or no request was pending.
    Skipped,
}

pub struct RenderDriver<B: GpuBackend, H: FrameHost> {
    backend: B,
    host: H,
    program: ProgramSource,
    state: DriverState,
    surface: SurfaceWrapper,
    pending_frame: Option<FrameRequest>,
    resize_pending: bool,
    listening: bool,
    frames_drawn: u64,
}

impl<B: GpuBackend, H: FrameHost> RenderDriver<B, H> {
    /// A driver for the built-in sunset program.
    pub fn new(backend: B, host: H) -> Self {
        Self::with_program(backend, host, ProgramSource::afterglow())
    }

    pub fn with_program(backend: B, host: H, program: ProgramSource) -> Self {
        let (width, height) = host.client_size();
        let surface = SurfaceWrapper::new(width, height, host.device_pixel_ratio());
        Self {
            backend,
            host,
            program,
            state: DriverState::Uninitialized,
            surface,
            pending_frame: None,
            resize_pending: false,
            listening: false,
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Acquire the context and compile the program.
    ///
    /// On any failure the driver ends in `Failed` and never schedules a frame.
    pub fn init(&mut self) -> Result<(), DriverError> {
        match self.state {
            DriverState::Ready => return Ok(()),
            DriverState::Running => return Err(DriverError::AlreadyStarted),
            DriverState::Failed => {
                return Err(DriverError::InvalidState {
                    operation: "initialize",
                    state: self.state,
                });
            }
            DriverState::Uninitialized | DriverState::Stopped => {}
        }

        let (width, height) = self.host.client_size();
        self.surface = SurfaceWrapper::new(width, height, self.host.device_pixel_ratio());
        let size = self.surface.backing_size();

        if let Err(err) = self.backend.acquire(size) {
            log::error!("Failed to acquire render context: {err}");
            self.state = DriverState::Failed;
            return Err(err);
        }

        if let Err(err) = self.backend.compile_program(&self.program) {
            log::error!("{err}");
            self.backend.release();
            self.state = DriverState::Failed;
            return Err(err);
        }

        log::info!("Render driver ready at {}x{}", size.width, size.height);
        self.state = DriverState::Ready;
        Ok(())
    }

    /// Initialize if needed, upload the quad, attach listeners and request
    /// the first frame.
    pub fn start(&mut self) -> Result<(), DriverError> {
        match self.state {
            DriverState::Running => return Err(DriverError::AlreadyStarted),
            DriverState::Failed => {
                return Err(DriverError::InvalidState {
                    operation: "start",
                    state: self.state,
                });
            }
            DriverState::Uninitialized | DriverState::Stopped => self.init()?,
            DriverState::Ready => {}
        }

        if let Err(err) = self.backend.upload_quad(&QUAD_VERTICES) {
            log::error!("Failed to upload quad: {err}");
            self.fail();
            return Err(err);
        }
        self.backend.resize_viewport(self.surface.backing_size());

        self.host.attach_listeners();
        self.listening = true;
        self.pending_frame = Some(self.host.request_frame());
        self.state = DriverState::Running;
        log::debug!("Render driver running");
        Ok(())
    }

    /// Mark the surface dirty. Called from the host's resize and
    /// pixel-ratio listeners; the next frame picks it up.
    pub fn notify_resize(&mut self) {
        self.resize_pending = true;
    }

    /// Re-read client size and pixel ratio from the host. The viewport is
    /// resized only when the backing size actually changed.
    pub fn handle_resize(&mut self) -> Option<SurfaceResizeEvent> {
        let (width, height) = self.host.client_size();
        let ratio = self.host.device_pixel_ratio();
        let event = self.surface.handle_resize(width, height, ratio)?;

        if matches!(self.state, DriverState::Ready | DriverState::Running) {
            log::debug!(
                "Resizing viewport to {}x{} (ratio {})",
                event.backing.width,
                event.backing.height,
                event.device_pixel_ratio
            );
            self.backend.resize_viewport(event.backing);
        }
        Some(event)
    }

    /// Frame callback. `timestamp` is the host's display-refresh time in
    /// seconds and becomes the `time` uniform unchanged.
    pub fn frame(&mut self, timestamp: f64) -> Result<FrameOutcome, DriverError> {
        if self.state != DriverState::Running || self.pending_frame.take().is_none() {
            return Ok(FrameOutcome::Skipped);
        }

        if std::mem::take(&mut self.resize_pending) {
            self.handle_resize();
        }

        let uniforms = FrameUniforms::new(self.surface.backing_size(), timestamp as f32);
        if let Err(err) = self.backend.draw(&uniforms) {
            log::error!("Frame {} failed: {err}", self.frames_drawn);
            self.fail();
            return Err(err);
        }
        self.frames_drawn += 1;

        self.pending_frame = Some(self.host.request_frame());
        Ok(FrameOutcome::Drawn)
    }

    /// Cancel the pending frame, detach listeners and release the backend.
    ///
    /// A `Ready` driver already holds a context and compiled program from
    /// [`init`](Self::init), so it is released here as well and ends up
    /// `Stopped`. Does nothing in any other state.
    pub fn stop(&mut self) {
        if !matches!(self.state, DriverState::Ready | DriverState::Running) {
            return;
        }
        self.teardown();
        self.state = DriverState::Stopped;
        log::info!("Render driver stopped after {} frames", self.frames_drawn);
    }

    fn fail(&mut self) {
        self.teardown();
        self.state = DriverState::Failed;
    }

    fn teardown(&mut self) {
        if let Some(request) = self.pending_frame.take() {
            self.host.cancel_frame(request);
        }
        if self.listening {
            self.host.detach_listeners();
            self.listening = false;
        }
        self.resize_pending = false;
        self.backend.release();
    }

    pub fn backing_size(&self) -> BackingSize {
        self.surface.backing_size()
    }

    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<B: GpuBackend, H: FrameHost> Drop for RenderDriver<B, H> {
    fn drop(&mut self) {
        self.stop();
    }
}
