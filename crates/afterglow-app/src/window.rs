//! Window creation and event handling via winit.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]. It owns the render
//! driver and forwards redraws and resize notifications to it; [`WinitHost`]
//! is the driver's view of the window.

use std::sync::Arc;
use std::time::Instant;

use afterglow_config::{Config, PowerPreference};
use afterglow_render::{
    DriverError, FrameHost, FrameOutcome, FrameRequest, RenderDriver, WgpuBackend,
};
use tracing::{debug, error, info, instrument, trace};
use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::clock::{FrameClock, FrameStats};

pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ));
    if config.window.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

pub fn wgpu_power_preference(preference: PowerPreference) -> wgpu::PowerPreference {
    match preference {
        PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
        PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
    }
}

/// [`FrameHost`] over a winit window. Frame requests become redraw requests.
pub struct WinitHost {
    window: Arc<Window>,
    next_request: u64,
    listening: bool,
}

impl WinitHost {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_request: 0,
            listening: false,
        }
    }

    /// Whether resize events should reach the driver.
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl FrameHost for WinitHost {
    fn client_size(&self) -> (f64, f64) {
        let logical = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        (logical.width, logical.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.scale_factor()
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_request += 1;
        self.window.request_redraw();
        FrameRequest(self.next_request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        // winit cannot retract a redraw; the driver drops it when it arrives.
        trace!(request = request.0, "Frame request cancelled");
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
    }
}

type WindowDriver = RenderDriver<WgpuBackend, WinitHost>;

pub struct AppState {
    pub config: Config,
    pub window: Option<Arc<Window>>,
    driver: Option<WindowDriver>,
    clock: FrameClock,
    stats: FrameStats,
    failure: Option<DriverError>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let clock = FrameClock::new(config.render.time_scale, config.render.start_time);
        Self {
            config,
            window: None,
            driver: None,
            clock,
            stats: FrameStats::new(Instant::now()),
            failure: None,
        }
    }

    /// The error that ended the event loop, if any.
    pub fn failure(&self) -> Option<&DriverError> {
        self.failure.as_ref()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DriverError) {
        error!("Renderer failed: {err}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(driver) = self.driver.as_mut() {
            driver.stop();
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(driver) = self.driver.as_mut() else {
            return;
        };
        match driver.frame(self.clock.seconds()) {
            Ok(FrameOutcome::Drawn) => {
                if let Some(fps) = self.stats.record(Instant::now()) {
                    debug!(
                        "{fps:.1} fps ({} frames total)",
                        self.stats.total_frames()
                    );
                }
            }
            Ok(FrameOutcome::Skipped) => {}
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.driver.is_some() {
            return;
        }

        let window = match event_loop.create_window(window_attributes_from_config(&self.config)) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        info!(
            "Window created: {}x{} (scale: {:.2})",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let backend = WgpuBackend::new(
            window.clone(),
            self.config.window.vsync,
            wgpu_power_preference(self.config.render.power_preference),
        );
        let mut driver = RenderDriver::new(backend, WinitHost::new(window.clone()));
        self.window = Some(window);

        match driver.start() {
            Ok(()) => {
                info!("Renderer started");
                self.driver = Some(driver);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.shutdown(event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(driver) = self.driver.as_mut()
                    && driver.host().is_listening()
                {
                    driver.notify_resize();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release GPU resources before the window goes away.
        self.driver = None;
    }
}

/// Open the window and run until it closes.
#[instrument(skip_all)]
pub fn run(config: Config) -> Result<AppState, EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = AppState::new(config);
    event_loop.run_app(&mut app)?;
    Ok(app)
}
