//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::Variant;

/// Root configuration for the demo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route profile and request handling settings.
    pub app: AppConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:4567").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4567".to_string(),
        }
    }
}

/// Which route table to serve and how request bodies are handled.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Route profile, fixed for the process lifetime.
    pub variant: Variant,

    /// Largest request body accepted, in bytes.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "hello_routes=info,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4567");
        assert_eq!(config.app.variant, Variant::Plain);
        assert_eq!(config.app.max_body_bytes, 1024 * 1024);
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_sections() {
        let config: DemoConfig = toml::from_str(
            r#"
            [app]
            variant = "greeting"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.variant, Variant::Greeting);
        // Unset fields in a present section still default
        assert_eq!(config.app.max_body_bytes, 1024 * 1024);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.listener.bind_address, "127.0.0.1:4567");
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result: Result<DemoConfig, _> = toml::from_str("[app]\nvariant = \"shout\"\n");
        assert!(result.is_err());
    }
}
