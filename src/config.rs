//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! the greeting payload, identity header handling, HTTP caching, logging and
//! default paths. `AppConfig` is the root configuration struct containing all settings.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

// =============================================================================
// Greeting / Identity Constants
// =============================================================================

/// Fixed message returned by the greeting endpoint
pub const GREETING_MESSAGE: &str = "Hello from the AWS-native DevSecOps demo platform";

/// Header set by the ALB after completing the OIDC flow
pub const IDENTITY_HEADER: &str = "x-amzn-oidc-identity";

/// Longest sanitized identity echoed back to the caller
pub const MAX_IDENTITY_LEN: usize = 256;

// =============================================================================
// HTTP Constants
// =============================================================================

/// Responses carry caller identity or probe state and must never be cached
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Header carrying the per-request correlation ID back to the caller
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Trace header injected by the ALB, recorded on the request span when present
pub const AMZN_TRACE_ID_HEADER: &str = "x-amzn-trace-id";

/// Path of the OpenAPI document
pub const API_DOCS_PATH: &str = "/v3/api-docs";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "devsecops_demo=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default time allowed for in-flight requests to drain on shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// OpenAPI document metadata
    pub api_docs: ApiDocsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for open connections after SIGTERM/SIGINT
    pub shutdown_timeout_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            shutdown_timeout_seconds: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl HttpServerConfig {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host or http.port: {}", e))
            })
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Parsed log format. Returns `None` for unrecognized values so the caller
    /// can warn once the subscriber is up.
    pub fn log_format(&self) -> Option<LogFormat> {
        match self.format.to_ascii_lowercase().as_str() {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Metadata published in the OpenAPI document
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiDocsConfig {
    /// Mount the document route at all
    pub enabled: bool,
    pub title: String,
    pub description: String,
    pub contact_name: String,
    /// Where the ALB completes the OIDC flow
    pub openid_connect_url: String,
}

impl Default for ApiDocsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "DevSecOps Demo API".to_string(),
            description: "REST endpoints exposed by the AWS-native DevSecOps demo application."
                .to_string(),
            contact_name: "Platform Team".to_string(),
            openid_connect_url: "/oauth2/idpresponse".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `path` if given, otherwise from [`DEFAULT_CONFIG_PATH`] when it
    /// exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }
        if self.http.shutdown_timeout_seconds == 0 {
            return Err(ConfigError::Validation(
                "http.shutdown_timeout_seconds must be non-zero".to_string(),
            ));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
