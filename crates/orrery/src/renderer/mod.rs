pub mod handle;
pub mod queue;
pub mod zoom_map;

pub use handle::{FlyTarget, RendererEvent, RendererHandle, RendererKind};
pub use queue::{CommandQueue, RendererCommand};
