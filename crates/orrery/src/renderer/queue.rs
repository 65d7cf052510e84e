use serde::Serialize;

use crate::core::zoom::ZoomPercent;
use crate::renderer::handle::{FlyTarget, RendererHandle};

/// A command for a renderer living on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RendererCommand {
    SetZoom { percent: ZoomPercent },
    FlyTo { target: FlyTarget },
}

/// A renderer handle that buffers commands.
/// Rust pushes commands as the coordinator issues them; JS drains them each frame.
pub struct CommandQueue {
    commands: Vec<RendererCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(8),
        }
    }

    /// Drain all pending commands.
    pub fn drain(&mut self) -> Vec<RendererCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drain all pending commands as a JSON array.
    pub fn drain_json(&mut self) -> String {
        let commands = self.drain();
        match serde_json::to_string(&commands) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("dropping {} renderer commands: {}", commands.len(), e);
                "[]".to_string()
            }
        }
    }

    /// Iterate over pending commands without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &RendererCommand> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererHandle for CommandQueue {
    fn set_zoom(&mut self, percent: ZoomPercent) {
        self.commands.push(RendererCommand::SetZoom { percent });
    }

    fn fly_to(&mut self, target: &FlyTarget) {
        self.commands.push(RendererCommand::FlyTo {
            target: target.clone(),
        });
    }
}
