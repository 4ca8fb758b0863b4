//! Data models module
//!
//! Defines the inference wire format and the companion service bodies

pub mod generate;
pub mod inference;

pub use generate::*;
pub use inference::*;
