//! Browser fullscreen through the DOM Fullscreen API.

use orrery::{FullscreenPlatform, PlatformError};

/// Fullscreens the whole document. Completion arrives through the
/// `fullscreenchange` event, which JS forwards to `explorer_fullscreen_changed`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    fn document() -> Result<web_sys::Document, PlatformError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PlatformError::Unsupported)
    }
}

impl FullscreenPlatform for BrowserPlatform {
    fn is_fullscreen(&self) -> bool {
        Self::document()
            .map(|d| d.fullscreen_element().is_some())
            .unwrap_or(false)
    }

    fn request_fullscreen(&mut self) -> Result<(), PlatformError> {
        let root = Self::document()?
            .document_element()
            .ok_or(PlatformError::Unsupported)?;
        root.request_fullscreen()
            .map_err(|e| PlatformError::Denied(format!("{:?}", e)))
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlatformError> {
        let document = Self::document()?;
        if document.fullscreen_element().is_some() {
            document.exit_fullscreen();
        }
        Ok(())
    }
}
