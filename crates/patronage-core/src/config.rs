//! Configuration types for patronage.
//!
//! [`Config::load`] layers a user file on top of the embedded defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[mongodb]
host       = "localhost"
port       = 27017
database   = "patronage"
collection = "data"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration. Only the store commands need it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mongodb: MongoConfig,
}

/// `[mongodb]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MongoConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_host() -> String { "localhost".to_string() }
fn default_port() -> u16 { 27017 }
fn default_database() -> String { "patronage".to_string() }
fn default_collection() -> String { "data".to_string() }

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            collection: default_collection(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path`, layered on top of the built-in defaults.
    ///
    /// The format follows the extension: `.toml`, `.json`, `.yaml`/`.yml`.
    /// Anything else is read as INI, e.g. a `patronage.cfg` with a
    /// `[mongodb]` section.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(file_format(path)))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
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
}

fn file_format(path: &Path) -> config::FileFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("toml") => config::FileFormat::Toml,
        Some("json") => config::FileFormat::Json,
        Some("yaml") | Some("yml") => config::FileFormat::Yaml,
        _ => config::FileFormat::Ini,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
