//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Default inference endpoint base; the model id and `/invoke` are appended
pub const DEFAULT_BASE_URL: &str = "https://bedrock-runtime.us-east-1.amazonaws.com/model/";

/// Model used when a request does not name one
pub const DEFAULT_MODEL: &str = "openai.gpt-oss-20b-1:0";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Inference endpoint configuration
    pub inference: InferenceConfig,
    /// Request configuration
    pub request: RequestConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Inference endpoint configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Bearer credential
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Endpoint base URL
    pub base_url: String,
    /// Model used when the caller does not pick one
    pub default_model: String,
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("default_model", &self.default_model)
            .finish()
    }
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Maximum request size in bytes
    pub max_request_size: usize,
    /// Upper bound for one upstream call, in seconds
    pub timeout: u64,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for CORS
    pub allowed_origins: Vec<String>,
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let settings = Self {
            server: ServerConfig {
                host: get("SERVER_HOST", "127.0.0.1"),
                port: get("SERVER_PORT", "8765")
                    .parse()
                    .context("Invalid port number")?,
            },
            inference: InferenceConfig {
                api_key: lookup("INFERENCE_API_KEY")
                    .context("INFERENCE_API_KEY environment variable not set")?,
                base_url: get("INFERENCE_BASE_URL", DEFAULT_BASE_URL),
                default_model: get("INFERENCE_DEFAULT_MODEL", DEFAULT_MODEL),
            },
            request: RequestConfig {
                max_request_size: get("MAX_REQUEST_SIZE", "10485760")
                    .parse()
                    .context("Invalid maximum request size")?,
                timeout: get("REQUEST_TIMEOUT", "120")
                    .parse()
                    .context("Invalid request timeout")?,
            },
            security: SecurityConfig {
                allowed_origins: get("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                cors_enabled: get("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get("RUST_LOG", "info"),
                format: get("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if self.inference.api_key.is_empty() {
            anyhow::bail!("Inference API key cannot be empty");
        }

        if self.inference.api_key.contains(char::is_whitespace) {
            anyhow::bail!("Inference API key cannot contain whitespace characters");
        }

        if !self.inference.base_url.starts_with("http") {
            anyhow::bail!("Invalid inference base URL format, should start with 'http'");
        }

        if self.inference.default_model.trim().is_empty() {
            anyhow::bail!("Default model cannot be empty");
        }

        if self.request.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        validate_log_filter(&self.logging.level)?;

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether CORS should allow any origin
    pub fn allows_any_origin(&self) -> bool {
        self.security.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Accept `RUST_LOG` filters such as `info` or `aitestgen=debug,tower_http=info`
///
/// Every directive must end in a level name.
fn validate_log_filter(filter: &str) -> Result<()> {
    const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

    EnvFilter::try_new(filter).with_context(|| format!("Invalid log level: {}", filter))?;

    for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let level = directive.rsplit('=').next().unwrap_or(directive);
        if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            anyhow::bail!("Invalid log level: {}", filter);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[("INFERENCE_API_KEY", "abc123")])).unwrap();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8765);
        assert_eq!(settings.inference.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.inference.default_model, DEFAULT_MODEL);
        assert_eq!(settings.request.timeout, 120);
        assert!(settings.allows_any_origin());
    }

    #[test]
    fn test_api_key_is_not_serialized() {
        let settings = Settings::from_lookup(lookup_from(&[("INFERENCE_API_KEY", "secret-key")])).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret-key"));
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let settings = Settings::from_lookup(lookup_from(&[("INFERENCE_API_KEY", "super-secret-token")])).unwrap();

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("***"));
        assert!(!format!("{:?}", settings.inference).contains("super-secret-token"));
    }

    #[test]
    fn test_log_filter_directives() {
        assert!(validate_log_filter("debug").is_ok());
        assert!(validate_log_filter("aitestgen=debug,tower_http=info").is_ok());
        assert!(validate_log_filter("warn,aitestgen=TRACE").is_ok());
        assert!(validate_log_filter("verbose").is_err());
        assert!(validate_log_filter("aitestgen=loud").is_err());
    }
}
