pub mod classifier;

pub use classifier::{classify, DeviceClassifier, DeviceSignals, Viewport};
