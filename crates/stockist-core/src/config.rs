//! Configuration types for stockist.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file
//! (`--config FILE`, or `$XDG_CONFIG_HOME/stockist/config.toml` when present),
//! and `STOCKIST_*` environment variables (`STOCKIST_SERVER__BIND=0.0.0.0:8080`).
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::normalizer::DEFAULT_FALLBACK_KEY;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind            = "127.0.0.1:5000"
allowed_origins = [
    "https://sherrys-wholesalers.com",
    "https://www.sherrys-wholesalers.com",
    "http://localhost:3000",
    "http://localhost:5173",
]

[normalizer]
fallback_key = "note"
"#;

const ENV_PREFIX: &str = "STOCKIST";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Browser origins allowed by CORS. Entries that are not valid header
    /// values are skipped with a warning when the server starts.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_bind() -> String { "127.0.0.1:5000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            allowed_origins: Vec::new(),
        }
    }
}

/// `[normalizer]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizerConfig {
    /// Key for specification text that holds no `key: value` pairs.
    #[serde(default = "default_fallback_key")]
    pub fallback_key: String,
}

fn default_fallback_key() -> String { DEFAULT_FALLBACK_KEY.to_string() }

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            fallback_key: default_fallback_key(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicit `path` must exist; the default user file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let user_file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.normalizer.fallback_key.trim().is_empty() {
            anyhow::bail!("normalizer.fallback_key must not be blank");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("stockist")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
