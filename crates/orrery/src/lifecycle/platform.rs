//! Platform fullscreen capability.

use thiserror::Error;

/// Why a fullscreen request did not go through. Never user-facing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The platform has no fullscreen API.
    #[error("fullscreen is not supported")]
    Unsupported,

    /// The platform refused the request.
    #[error("fullscreen request denied: {0}")]
    Denied(String),
}

/// Fullscreen API of the hosting platform. All requests are best-effort.
pub trait FullscreenPlatform {
    /// Whether the view is currently in platform fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Ask to enter fullscreen. Completion is reported later through
    /// the fullscreen-change notification, not through this call.
    fn request_fullscreen(&mut self) -> Result<(), PlatformError>;

    /// Ask to leave fullscreen.
    fn exit_fullscreen(&mut self) -> Result<(), PlatformError>;
}

/// Platform without fullscreen support (native hosts, tests, server-side previews).
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPlatform;

impl FullscreenPlatform for HeadlessPlatform {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&mut self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }
}
