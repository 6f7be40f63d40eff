//! Render driver failure kinds.

use std::fmt;

use crate::driver::DriverState;

/// Programmable pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Errors surfaced by the render driver and its backends.
///
/// None of these are retried. A compile or link failure needs new source, and a
/// lost surface needs the caller to build a fresh driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// No GPU context could be obtained for the target surface.
    #[error("GPU context unavailable: {0}")]
    ContextUnavailable(String),

    /// A program stage failed to parse or validate.
    #[error("{stage} program failed to compile:\n{log}")]
    ProgramCompile { stage: ShaderStage, log: String },

    /// Both stages compiled but do not form a usable program.
    #[error("program failed to link: {log}")]
    ProgramLink { log: String },

    /// The context was invalidated after a successful start.
    #[error("render surface lost")]
    SurfaceLost,

    /// `start` was called on a driver that is already running.
    #[error("render driver already started")]
    AlreadyStarted,

    /// An operation was attempted in a state that does not allow it.
    #[error("cannot {operation} while driver is {state:?}")]
    InvalidState {
        operation: &'static str,
        state: DriverState,
    },
}
