//! Error type shared by the window registry, configuration and runner.
//!
//! The pointer path itself never fails: stray or malformed input is ignored.
//! These errors cover direct API misuse and the outer shell.

use std::io;

use thiserror::Error;

use crate::constants::VIEWPORT_ERROR_CODE;
use crate::window::WindowId;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("viewport {width}x{height} is smaller than the required {min_width}x{min_height}")]
    ViewportTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("window {0} is already mounted")]
    DuplicateWindow(WindowId),
    #[error("window {0} is not mounted")]
    UnknownWindow(WindowId),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DesktopError {
    /// Short machine-readable code shown by the error view.
    pub fn code(&self) -> &'static str {
        match self {
            DesktopError::ViewportTooSmall { .. } => VIEWPORT_ERROR_CODE,
            DesktopError::DuplicateWindow(_) => "DUPLICATE_WINDOW",
            DesktopError::UnknownWindow(_) => "UNKNOWN_WINDOW",
            DesktopError::InvalidConfig(_) => "INVALID_CONFIG",
            DesktopError::Io(_) => "IO_ERROR",
        }
    }

    /// Human-readable cause shown under the code.
    pub fn cause(&self) -> String {
        match self {
            DesktopError::ViewportTooSmall {
                min_width,
                min_height,
                ..
            } => format!(
                "{self}. Enlarge the terminal to at least {min_width} columns by {min_height} rows."
            ),
            other => other.to_string(),
        }
    }
}

impl From<DesktopError> for io::Error {
    fn from(err: DesktopError) -> Self {
        match err {
            DesktopError::Io(inner) => inner,
            other => io::Error::other(other),
        }
    }
}
