use std::cell::RefCell;
use std::rc::Rc;

use afterglow_render::{
    BackingSize, DriverError, DriverState, FrameHost, FrameOutcome, FrameRequest,
    ProgramSource, RenderDriver, ShaderStage, SoftwareBackend, VERTEX_SOURCE,
};
use afterglow_scene::{FrameParams, frag_coord, shade_pixel};

#[derive(Debug, Default)]
struct HostLog {
    client: (f64, f64),
    ratio: f64,
    next_request: u64,
    requested: Vec<FrameRequest>,
    cancelled: Vec<FrameRequest>,
    listening: bool,
    attach_count: usize,
}

#[derive(Clone)]
struct RecordingHost(Rc<RefCell<HostLog>>);

impl RecordingHost {
    fn new(width: f64, height: f64, ratio: f64) -> Self {
        Self(Rc::new(RefCell::new(HostLog {
            client: (width, height),
            ratio,
            ..Default::default()
        })))
    }

    fn set_client(&self, width: f64, height: f64, ratio: f64) {
        let mut log = self.0.borrow_mut();
        log.client = (width, height);
        log.ratio = ratio;
    }

    fn log(&self) -> std::cell::Ref<'_, HostLog> {
        self.0.borrow()
    }
}

impl FrameHost for RecordingHost {
    fn client_size(&self) -> (f64, f64) {
        self.0.borrow().client
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.0.borrow().ratio
    }

    fn request_frame(&mut self) -> FrameRequest {
        let mut log = self.0.borrow_mut();
        log.next_request += 1;
        let request = FrameRequest(log.next_request);
        log.requested.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.0.borrow_mut().cancelled.push(request);
    }

    fn attach_listeners(&mut self) {
        let mut log = self.0.borrow_mut();
        log.listening = true;
        log.attach_count += 1;
    }

    fn detach_listeners(&mut self) {
        self.0.borrow_mut().listening = false;
    }
}

const BROKEN_FRAGMENT: &str = r#"
    struct FrameUniforms {
        resolution: vec2<f32>,
        time: f32,
        _padding: f32,
    }

    @group(0) @binding(0) var<uniform> frame: FrameUniforms;

    @fragment
    fn fs_main(@builtin(position) pos: vec4<f32>) -> @location(0) vec4<f32> {
        return vec4<f32>(sunset_tint * frame.time, 1.0);
    }
"#;

fn small_driver() -> (RenderDriver<SoftwareBackend, RecordingHost>, RecordingHost) {
    let host = RecordingHost::new(40.0, 30.0, 1.0);
    let driver = RenderDriver::new(SoftwareBackend::with_threads(2), host.clone());
    (driver, host)
}

#[test]
fn start_enters_running_and_requests_first_frame() {
    let (mut driver, host) = small_driver();
    assert_eq!(driver.state(), DriverState::Uninitialized);

    driver.start().unwrap();

    assert_eq!(driver.state(), DriverState::Running);
    assert!(driver.backend().has_program());
    assert!(driver.backend().has_quad());
    assert_eq!(driver.backend().viewport(), Some(BackingSize::new(40, 30)));
    assert!(host.log().listening);
    assert_eq!(host.log().requested, [FrameRequest(1)]);
}

#[test]
fn each_frame_draws_and_requests_the_next() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();

    assert_eq!(driver.frame(0.5).unwrap(), FrameOutcome::Drawn);
    assert_eq!(driver.frame(0.516).unwrap(), FrameOutcome::Drawn);

    assert_eq!(driver.frames_drawn(), 2);
    assert_eq!(host.log().requested.len(), 3);
    assert_eq!(driver.pending_frame(), Some(FrameRequest(3)));
}

#[test]
fn drawn_frame_matches_reference_kernel() {
    let (mut driver, _host) = small_driver();
    driver.start().unwrap();
    driver.frame(3.25).unwrap();

    let frame = driver.backend().last_frame().unwrap();
    let params = FrameParams::new(3.25, 40, 30);
    for (x, y) in [(0, 0), (20, 15), (39, 29)] {
        let expected = shade_pixel(frag_coord(x, y, 30), &params);
        assert_eq!(frame.pixel(x, y), Some(expected));
    }
}

#[test]
fn stop_cancels_pending_frame_and_is_idempotent() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();
    driver.frame(0.0).unwrap();

    driver.stop();
    driver.stop();

    assert_eq!(driver.state(), DriverState::Stopped);
    assert_eq!(host.log().cancelled, [FrameRequest(2)]);
    assert!(!host.log().listening);
    assert!(!driver.backend().has_program());
    assert_eq!(driver.frame(1.0).unwrap(), FrameOutcome::Skipped);
}

#[test]
fn dropping_a_running_driver_stops_it() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();
    drop(driver);

    assert_eq!(host.log().cancelled, [FrameRequest(1)]);
    assert!(!host.log().listening);
}

#[test]
fn second_start_is_rejected() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();

    assert!(matches!(driver.start(), Err(DriverError::AlreadyStarted)));
    assert_eq!(driver.state(), DriverState::Running);
    assert_eq!(host.log().attach_count, 1);
    assert_eq!(host.log().requested.len(), 1);
}

#[test]
fn undeclared_symbol_fails_compile_and_never_runs() {
    let host = RecordingHost::new(40.0, 30.0, 1.0);
    let program = ProgramSource::new(VERTEX_SOURCE, BROKEN_FRAGMENT);
    let mut driver = RenderDriver::with_program(SoftwareBackend::new(), host.clone(), program);

    match driver.start() {
        Err(DriverError::ProgramCompile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(log.contains("sunset_tint"), "log: {log}");
        }
        other => panic!("expected compile failure, got {other:?}"),
    }

    assert_eq!(driver.state(), DriverState::Failed);
    assert!(host.log().requested.is_empty());
    assert_eq!(host.log().attach_count, 0);
    assert!(!driver.backend().has_program());
    assert_eq!(driver.frame(0.0).unwrap(), FrameOutcome::Skipped);
}

#[test]
fn missing_context_is_reported() {
    let host = RecordingHost::new(40.0, 30.0, 1.0);
    let mut driver = RenderDriver::new(SoftwareBackend::unavailable(), host.clone());

    assert!(matches!(
        driver.start(),
        Err(DriverError::ContextUnavailable(_))
    ));
    assert_eq!(driver.state(), DriverState::Failed);
    assert!(host.log().requested.is_empty());
}

#[test]
fn surface_loss_fails_the_driver_and_releases_resources() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();
    driver.frame(0.0).unwrap();

    driver.backend_mut().lose_context();
    assert!(matches!(driver.frame(0.016), Err(DriverError::SurfaceLost)));

    assert_eq!(driver.state(), DriverState::Failed);
    assert!(!driver.backend().has_program());
    assert!(!driver.backend().has_quad());
    assert!(!host.log().listening);
    assert_eq!(driver.pending_frame(), None);
    assert!(matches!(
        driver.start(),
        Err(DriverError::InvalidState { .. })
    ));
}

#[test]
fn resize_with_unchanged_inputs_leaves_viewport_alone() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();
    let updates = driver.backend().viewport_updates();

    host.set_client(64.0, 48.0, 1.0);
    assert!(driver.handle_resize().is_some());
    assert_eq!(driver.backend().viewport_updates(), updates + 1);

    assert!(driver.handle_resize().is_none());
    assert!(driver.handle_resize().is_none());
    assert_eq!(driver.backend().viewport_updates(), updates + 1);
    assert_eq!(driver.backing_size(), BackingSize::new(64, 48));
}

#[test]
fn fractional_pixel_ratio_rounds_backing_size() {
    let (mut driver, host) = small_driver();
    driver.start().unwrap();

    host.set_client(33.0, 21.0, 1.5);
    driver.notify_resize();
    driver.frame(0.0).unwrap();

    assert_eq!(driver.backing_size(), BackingSize::new(50, 32));
    assert_eq!(driver.backend().viewport(), Some(BackingSize::new(50, 32)));
    let frame = driver.backend().last_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (50, 32));
}
