//! The seam between the render driver and its hosting environment.

/// Handle for a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Source of surface size, pixel ratio, frame callbacks and resize
/// notifications.
pub trait FrameHost {
    /// Client size in logical units.
    fn client_size(&self) -> (f64, f64);

    /// Device pixels per logical unit.
    fn device_pixel_ratio(&self) -> f64;

    /// Schedule one frame callback. The host later calls
    /// `RenderDriver::frame` with a timestamp.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancel a callback returned by `request_frame`.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Start delivering resize notifications to the driver.
    fn attach_listeners(&mut self);

    /// Stop delivering resize notifications.
    fn detach_listeners(&mut self);
}
