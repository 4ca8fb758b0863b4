//! Utilities module
//!
//! Contains error handling, code block extraction and logging helpers

pub mod error;
pub mod extract;
pub mod logging;
