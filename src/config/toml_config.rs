use crate::core::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_COMICS_API: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub comics: ComicsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComicsConfig {
    #[serde(default = "default_comics_api")]
    pub api_base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_comics_api() -> String {
    DEFAULT_COMICS_API.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for ComicsConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_comics_api(),
            request_timeout_seconds: default_timeout(),
        }
    }
}

impl StorefrontConfig {
    /// Load from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown vars are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            StorefrontError::ConfigValidationError {
                field: "environment".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for StorefrontConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind
    }

    fn comics_api_base_url(&self) -> &str {
        &self.comics.api_base_url
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.comics.request_timeout_seconds
    }
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("server.bind", &self.server.bind)?;
        validation::validate_url("comics.api_base_url", &self.comics.api_base_url)?;
        validation::validate_positive_number(
            "comics.request_timeout_seconds",
            self.comics.request_timeout_seconds,
            1,
        )?;
        Ok(())
    }
}
