pub mod error;
pub mod explorer;
pub mod types;
