//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PHYSLAB_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use physlab_tutor::GeminiBackend;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Chat tutor configuration
    #[serde(default)]
    pub tutor: TutorConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            tutor: TutorConfig::default(),
            debug: DebugConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PHYSLAB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PHYSLAB_TUTOR__MODEL=test -> tutor.model = "test"
        figment = figment.merge(Env::prefixed("PHYSLAB_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seconds of simulated time per tick; the embedding display loop
    /// usually matches its refresh interval
    pub tick_dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { tick_dt: 0.016 }
    }
}

/// Chat tutor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorConfig {
    /// API key for the hosted endpoint; absent means the tutor answers
    /// with its no-credential fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Response length cap
    pub max_output_tokens: u32,
    /// Endpoint base URL
    pub endpoint: String,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GeminiBackend::DEFAULT_MODEL.to_string(),
            temperature: GeminiBackend::DEFAULT_TEMPERATURE,
            max_output_tokens: GeminiBackend::DEFAULT_MAX_OUTPUT_TOKENS,
            endpoint: GeminiBackend::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl TutorConfig {
    /// Build the REST client these settings describe
    pub fn backend(&self) -> GeminiBackend {
        GeminiBackend::new(self.api_key.clone())
            .with_model(self.model.clone())
            .with_endpoint(self.endpoint.clone())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
