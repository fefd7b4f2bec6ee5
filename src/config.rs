use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main planner configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    /// Settings for the local Ollama server
    #[serde(default)]
    pub ollama: OllamaConfig,
}

/// Configuration for the local Ollama inference server
#[derive(Debug, Deserialize, Clone)]
pub struct OllamaConfig {
    /// Base URL of the server, without the `/api/generate` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier (e.g., "llama3.2", "mistral")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum number of tokens to generate
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            num_predict: default_num_predict(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
pub(crate) fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

pub(crate) fn default_model() -> String {
    "llama3.2".to_string()
}

pub(crate) fn default_temperature() -> f32 {
    0.7
}

pub(crate) fn default_num_predict() -> u32 {
    400
}

pub(crate) fn default_timeout() -> u64 {
    45
}

impl PlannerConfig {
    /// Load configuration from `config.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FRIDGE_CHEF__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FRIDGE_CHEF__OLLAMA__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Same as [`PlannerConfig::load`] but reads the given file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        // Optional config file (can be missing)
        None => File::with_name("config").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: FRIDGE_CHEF__OLLAMA__MODEL
        .add_source(
            Environment::with_prefix("FRIDGE_CHEF")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
