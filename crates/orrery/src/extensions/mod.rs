// extensions/mod.rs
//
// Presentation helpers that sit beside the coordinator core.

pub mod easing;

pub use easing::{Easing, lerp, ease};
