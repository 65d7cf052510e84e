pub mod activation;
pub mod platform;

pub use activation::{ActivationLifecycle, ActivationPhase, TransitionToken, DORMANT_PROMINENCE};
pub use platform::{FullscreenPlatform, HeadlessPlatform, PlatformError};
