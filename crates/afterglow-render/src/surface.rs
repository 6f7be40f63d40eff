//! Backing-store sizing for the render surface.
//!
//! Hosts report a client size in logical units plus a device pixel ratio. The
//! surface is sized `round(client * ratio)` per axis so the `resolution`
//! uniform always matches the real pixel grid, including under fractional
//! scaling.

/// Minimum backing dimension (prevents zero-size surfaces).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Backing-store size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_SURFACE_DIMENSION),
            height: height.max(MIN_SURFACE_DIMENSION),
        }
    }

    /// `round(client * device_pixel_ratio)` per axis, clamped to at least 1.
    pub fn from_client(client_width: f64, client_height: f64, device_pixel_ratio: f64) -> Self {
        Self::new(
            scale_dimension(client_width, device_pixel_ratio),
            scale_dimension(client_height, device_pixel_ratio),
        )
    }
}

fn scale_dimension(client: f64, device_pixel_ratio: f64) -> u32 {
    let scaled = (client * device_pixel_ratio).round();
    if scaled.is_finite() && scaled > 0.0 {
        scaled.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Produced when the backing size changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceResizeEvent {
    /// New backing size in device pixels.
    pub backing: BackingSize,
    /// Client width in logical units.
    pub client_width: f64,
    /// Client height in logical units.
    pub client_height: f64,
    /// Device pixels per logical unit.
    pub device_pixel_ratio: f64,
}

/// Tracks client size, pixel ratio and the derived backing size.
#[derive(Clone, Debug)]
pub struct SurfaceWrapper {
    backing: BackingSize,
    client_width: f64,
    client_height: f64,
    device_pixel_ratio: f64,
}

impl SurfaceWrapper {
    /// A zero initial size (common before a compositor assigns one) still
    /// yields a 1x1 backing store.
    pub fn new(client_width: f64, client_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            backing: BackingSize::from_client(client_width, client_height, device_pixel_ratio),
            client_width,
            client_height,
            device_pixel_ratio,
        }
    }

    /// Recompute the backing size. Returns an event only if it changed, so
    /// repeated calls with the same inputs never touch the viewport.
    pub fn handle_resize(
        &mut self,
        client_width: f64,
        client_height: f64,
        device_pixel_ratio: f64,
    ) -> Option<SurfaceResizeEvent> {
        self.client_width = client_width;
        self.client_height = client_height;
        self.device_pixel_ratio = device_pixel_ratio;

        let backing = BackingSize::from_client(client_width, client_height, device_pixel_ratio);
        if backing == self.backing {
            return None;
        }
        self.backing = backing;

        Some(SurfaceResizeEvent {
            backing,
            client_width,
            client_height,
            device_pixel_ratio,
        })
    }

    pub fn backing_size(&self) -> BackingSize {
        self.backing
    }

    pub fn client_size(&self) -> (f64, f64) {
        (self.client_width, self.client_height)
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_size_rounds_fractional_scale() {
        assert_eq!(
            BackingSize::from_client(1001.0, 601.0, 1.25),
            BackingSize::new(1251, 751)
        );
        assert_eq!(
            BackingSize::from_client(333.0, 200.0, 1.5),
            BackingSize::new(500, 300)
        );
    }

    #[test]
    fn test_zero_size_surface_handled_gracefully() {
        let mut wrapper = SurfaceWrapper::new(0.0, 0.0, 2.0);
        assert_eq!(wrapper.backing_size(), BackingSize::new(1, 1));

        let event = wrapper.handle_resize(960.0, 540.0, 2.0).unwrap();
        assert_eq!(event.backing, BackingSize::new(1920, 1080));
    }

    #[test]
    fn test_no_event_on_same_inputs() {
        let mut wrapper = SurfaceWrapper::new(800.0, 600.0, 1.0);
        assert!(wrapper.handle_resize(800.0, 600.0, 1.0).is_none());
        assert!(wrapper.handle_resize(800.0, 600.0, 1.0).is_none());
        assert_eq!(wrapper.backing_size(), BackingSize::new(800, 600));
    }

    #[test]
    fn test_ratio_change_resizes_backing() {
        let mut wrapper = SurfaceWrapper::new(800.0, 600.0, 1.0);
        let event = wrapper.handle_resize(800.0, 600.0, 2.0).unwrap();
        assert_eq!(event.backing, BackingSize::new(1600, 1200));
        assert_eq!(event.device_pixel_ratio, 2.0);
        assert_eq!(wrapper.device_pixel_ratio(), 2.0);
    }

    #[test]
    fn test_change_that_rounds_to_same_size_is_ignored() {
        let mut wrapper = SurfaceWrapper::new(800.0, 600.0, 1.0);
        assert!(wrapper.handle_resize(800.2, 599.9, 1.0).is_none());
        assert_eq!(wrapper.client_size(), (800.2, 599.9));
    }

    #[test]
    fn test_degenerate_inputs_clamp_to_one() {
        assert_eq!(
            BackingSize::from_client(-5.0, f64::NAN, 1.0),
            BackingSize::new(1, 1)
        );
    }

    #[test]
    fn test_successive_resizes() {
        let mut wrapper = SurfaceWrapper::new(800.0, 600.0, 1.0);
        wrapper.handle_resize(1024.0, 768.0, 1.0);
        assert_eq!(wrapper.backing_size(), BackingSize::new(1024, 768));
        wrapper.handle_resize(1280.0, 720.0, 1.5);
        assert_eq!(wrapper.backing_size(), BackingSize::new(1920, 1080));
    }
}
