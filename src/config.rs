//! Configuration management for the `TripPlanner` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripPlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripPlanner` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripPlannerConfig {
    /// Generative model configuration
    pub model: ModelConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Settings for the itinerary client side
    pub client: ClientConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Generative model (Vertex AI) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Cloud project identifier
    pub project: String,
    /// Deployment region, e.g. `us-central1`
    pub region: String,
    /// Model name, e.g. `gemini-2.5-flash`
    pub model_name: String,
    /// Override for the API host; derived from the region when unset
    pub base_url: Option<String>,
    /// OAuth bearer token sent with every model call
    pub access_token: Option<String>,
    /// Request timeout in seconds; the HTTP client default applies when unset
    pub timeout_seconds: Option<u32>,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Itinerary client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the itinerary backend
    pub backend_url: String,
    /// Key for the destination autocomplete widget; not used by the backend
    pub maps_api_key: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

// Default value functions
fn default_model_project() -> String {
    "tripplanner-472108".to_string()
}

fn default_model_region() -> String {
    "us-central1".to_string()
}

fn default_model_name() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    3001
}

fn default_backend_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            project: default_model_project(),
            region: default_model_region(),
            model_name: default_model_name(),
            base_url: None,
            access_token: None,
            timeout_seconds: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            maps_api_key: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ModelConfig {
    /// API host for the configured region, or the override when set
    #[must_use]
    pub fn api_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.region),
        }
    }

    /// Full `generateContent` endpoint for the configured model
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.api_base_url(),
            self.project,
            self.region,
            self.model_name
        )
    }
}

impl TripPlannerConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRIPPLANNER__MODEL__PROJECT
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripPlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.model.project.is_empty() {
            self.model.project = default_model_project();
        }
        if self.model.region.is_empty() {
            self.model.region = default_model_region();
        }
        if self.model.model_name.is_empty() {
            self.model.model_name = default_model_name();
        }
        if self.model.timeout_seconds == Some(0) {
            self.model.timeout_seconds = None;
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.client.backend_url.is_empty() {
            self.client.backend_url = default_backend_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_model()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate model settings
    fn validate_model(&self) -> Result<()> {
        if let Some(timeout) = self.model.timeout_seconds {
            if timeout > 300 {
                return Err(TripPlannerError::config(
                    "Model request timeout cannot exceed 300 seconds",
                )
                .into());
            }
        }

        if let Some(token) = &self.model.access_token {
            if token.trim().is_empty() {
                return Err(TripPlannerError::config(
                    "Model access token cannot be empty if provided. Either remove it or provide a valid token.",
                )
                .into());
            }
        }

        let ids = [
            ("project", &self.model.project),
            ("region", &self.model.region),
            ("model name", &self.model.model_name),
        ];
        for (name, value) in ids {
            if value.contains('/') || value.chars().any(char::is_whitespace) {
                return Err(TripPlannerError::config(format!(
                    "Model {name} '{value}' must not contain slashes or whitespace"
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("Model API base URL", self.model.base_url.as_deref()),
            ("Backend URL", Some(self.client.backend_url.as_str())),
        ];
        for (name, url) in urls {
            if let Some(url) = url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(TripPlannerError::config(format!(
                        "{name} must be a valid HTTP or HTTPS URL"
                    ))
                    .into());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TripPlannerConfig::default();
        assert_eq!(config.model.project, "tripplanner-472108");
        assert_eq!(config.model.region, "us-central1");
        assert_eq!(config.model.model_name, "gemini-2.5-flash");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.logging.level, "info");
        assert!(config.model.timeout_seconds.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_from_region() {
        let config = ModelConfig::default();
        assert_eq!(
            config.endpoint(),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/tripplanner-472108/locations/us-central1/publishers/google/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_with_base_url_override() {
        let config = ModelConfig {
            base_url: Some("http://127.0.0.1:9000/".to_string()),
            ..ModelConfig::default()
        };
        assert!(
            config
                .endpoint()
                .starts_with("http://127.0.0.1:9000/v1/projects/")
        );
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripPlannerConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = TripPlannerConfig::default();
        config.model.timeout_seconds = Some(500);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_backend_url() {
        let mut config = TripPlannerConfig::default();
        config.client.backend_url = "localhost:3001".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_project() {
        let mut config = TripPlannerConfig::default();
        config.model.project = "my project".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TripPlannerConfig::default();
        config.model.region = String::new();
        config.server.port = 0;
        config.model.timeout_seconds = Some(0);
        config.apply_defaults();
        assert_eq!(config.model.region, "us-central1");
        assert_eq!(config.server.port, 3001);
        assert!(config.model.timeout_seconds.is_none());
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "[model]\nproject = \"demo-project\"\nregion = \"europe-west4\"\ntimeout_seconds = 45\n\n[server]\nport = 8080"
        )
        .unwrap();

        let config = TripPlannerConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.model.project, "demo-project");
        assert_eq!(config.model.region, "europe-west4");
        assert_eq!(config.model.model_name, "gemini-2.5-flash");
        assert_eq!(config.model.timeout_seconds, Some(45));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TripPlannerConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("tripplanner"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
