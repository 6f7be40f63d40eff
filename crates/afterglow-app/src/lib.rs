//! The afterglow viewer: a winit window driven by the render driver, plus a
//! headless snapshot command.

pub mod clock;
pub mod platform;
pub mod snapshot;
pub mod window;
