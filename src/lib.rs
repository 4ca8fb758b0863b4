//! LLM-backed test automation code generator
//!
//! Provides code-generation prompt templates, a thin client for a hosted
//! model endpoint, and a small HTTP companion service tying them together

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod prompts;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::inference::InferenceResponse;
pub use prompts::{escape_code_blocks, get_prompt, PromptType, CODE_GENERATOR_TYPES};
pub use services::InferenceClient;
pub use utils::error::{AppError, AppResult};
pub use utils::extract::extract_block;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
