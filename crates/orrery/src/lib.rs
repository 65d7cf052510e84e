pub mod api;
pub mod core;
pub mod catalog;
pub mod device;
pub mod lifecycle;
pub mod renderer;
pub mod coordinator;
pub mod bridge;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::error::{CatalogError, CoordinatorError, Result};
pub use api::explorer::{Explorer, ExplorerConfig};
pub use api::types::{BodyId, Cursor, DeviceClass, PanelVisibility, ViewMode};
pub use catalog::manifest::{BodyDescriptor, BodyKind, CatalogManifest, LocationDescriptor};
pub use catalog::registry::{Body, Catalog, GeoPoint, Location};
pub use core::timer::TimerQueue;
pub use core::zoom::ZoomPercent;
pub use device::{DeviceClassifier, DeviceSignals, Viewport};
pub use lifecycle::{
    ActivationLifecycle, ActivationPhase, FullscreenPlatform, HeadlessPlatform, PlatformError,
};
pub use renderer::{CommandQueue, FlyTarget, RendererCommand, RendererEvent, RendererHandle, RendererKind};
pub use renderer::zoom_map;
pub use coordinator::{InteractionState, PresentationSnapshot, ViewCoordinator};
pub use bridge::protocol::{SnapshotFrame, SNAPSHOT_FLOATS};
pub use input::Intent;
pub use extensions::Easing;
