//! Crate-level error types.

use std::fmt;

use crate::gpu::context::RenderContextError;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to load a model file.
    ModelLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for VantageError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
