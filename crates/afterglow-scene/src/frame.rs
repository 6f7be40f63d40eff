//! Per-frame inputs.

/// Layer scroll runs at this fraction of wall-clock time. Birds use raw time.
pub const SCROLL_TIME_SCALE: f32 = 0.125;

/// Surface size in device pixels. Both dimensions are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution, clamping zero dimensions to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// The two scalars every pixel evaluation depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// Seconds on a monotonic clock with arbitrary origin.
    pub time: f32,
    /// Output size in device pixels.
    pub resolution: Resolution,
}

impl FrameParams {
    pub fn new(time: f32, width: u32, height: u32) -> Self {
        Self {
            time,
            resolution: Resolution::new(width, height),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.resolution.aspect()
    }

    /// Slowed clock driving the mountain scroll.
    pub fn scroll_time(&self) -> f32 {
        self.time * SCROLL_TIME_SCALE
    }
}
