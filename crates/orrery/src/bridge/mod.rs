pub mod protocol;

pub use protocol::{SnapshotFrame, SNAPSHOT_FLOATS};
