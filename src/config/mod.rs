//! Configuration management module
//!
//! Responsible for loading and validating application configuration from environment variables and `.env` files

pub mod settings;

pub use settings::{InferenceConfig, Settings};
