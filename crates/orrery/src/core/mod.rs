pub mod timer;
pub mod zoom;
