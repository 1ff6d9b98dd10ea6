//! Configuration types for college-info.
//!
//! [`Config::load`] layers, in order: the embedded defaults, a TOML file
//! (`$XDG_CONFIG_HOME/college-info/config.toml`, or an explicit path), and
//! `COLLEGE_INFO__*` environment variables. [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).

use anyhow::ensure;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind      = "127.0.0.1:8000"
log_level = "info"

[listing]
default_limit = 10
max_limit     = 100

[news]
default_limit = 10
max_limit     = 50

[search]
min_len = 2
max_len = 100
"#;

const ENV_PREFIX: &str = "COLLEGE_INFO";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_listing")]
    pub listing: PageLimits,
    #[serde(default = "default_news")]
    pub news: PageLimits,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bind() -> SocketAddr { SocketAddr::from(([127, 0, 0, 1], 8000)) }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            log_level: default_log_level(),
        }
    }
}

/// `[listing]` and `[news]` sections: page size applied when `limit` is
/// omitted, and the largest accepted `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

fn default_listing() -> PageLimits { PageLimits { default_limit: 10, max_limit: 100 } }
fn default_news() -> PageLimits { PageLimits { default_limit: 10, max_limit: 50 } }

/// `[search]` section: accepted length of free-text search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

fn default_min_len() -> usize { 2 }
fn default_max_len() -> usize { 100 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// XDG default path is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
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

    /// Reject limits the HTTP layer could never satisfy.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, limits) in [("listing", &self.listing), ("news", &self.news)] {
            ensure!(
                limits.default_limit >= 1 && limits.default_limit <= limits.max_limit,
                "[{name}] default_limit must be between 1 and max_limit ({})",
                limits.max_limit
            );
        }
        ensure!(
            self.search.min_len <= self.search.max_len,
            "[search] min_len must not exceed max_len"
        );
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
        .join("college-info")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
