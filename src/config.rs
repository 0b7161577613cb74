//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            cors_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides
    ///
    /// `PORT` wins over any configured port; an unparsable value is ignored
    /// with a warning.
    pub fn apply_env(mut self) -> Self {
        if let Ok(value) = std::env::var("PORT") {
            match value.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", value),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert!(config.cors_enabled);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000\ncors_enabled = false").unwrap();

        let config = ServerConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.cors_enabled);
        // unspecified keys keep their defaults
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_from_file_missing() {
        assert!(ServerConfig::from_file("/nonexistent/config.toml").is_err());
    }

    #[test]
    fn test_apply_env_port() {
        // PORT is process-global, so the set/invalid/unset cases share one test
        std::env::set_var("PORT", "8123");
        let config = ServerConfig::default().apply_env();
        assert_eq!(config.port, 8123);

        std::env::set_var("PORT", "not-a-port");
        let config = ServerConfig::default().apply_env();
        assert_eq!(config.port, 5000);

        std::env::remove_var("PORT");
        let config = ServerConfig::default().apply_env();
        assert_eq!(config.port, 5000);
    }
}
