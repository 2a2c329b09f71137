//! Application configuration.

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Link tooling configuration.
    #[serde(default)]
    pub links: LinksConfig,
    /// Hashtag generator configuration.
    #[serde(default)]
    pub hashtags: HashtagsConfig,
    /// Simulated latency for the service layer.
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Link shortener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    /// Domain placed in front of every short-link slug.
    #[serde(default = "default_short_domain")]
    pub short_domain: String,
    /// Length of randomly generated slugs.
    #[serde(default = "default_slug_length")]
    pub slug_length: usize,
}

/// Hashtag generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HashtagsConfig {
    /// Maximum number of hashtags a user may select.
    ///
    /// Values above the hard cap of the selection helper are clamped.
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

/// Artificial delays applied before the pure functions run.
///
/// These only exist so a UI can show its loading state; zero disables them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatencyConfig {
    /// Delay before hashtag generation, in milliseconds.
    #[serde(default)]
    pub hashtag_ms: u64,
    /// Delay before link shortening, in milliseconds.
    #[serde(default)]
    pub shorten_ms: u64,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            short_domain: default_short_domain(),
            slug_length: default_slug_length(),
        }
    }
}

impl Default for HashtagsConfig {
    fn default() -> Self {
        Self {
            max_selected: default_max_selected(),
        }
    }
}

fn default_short_domain() -> String {
    "short.link".to_string()
}

const fn default_slug_length() -> usize {
    crate::id::DEFAULT_SLUG_LENGTH
}

const fn default_max_selected() -> usize {
    30
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present, via `dotenvy`)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `SOCIALDESK_ENV`)
    /// 4. Environment variables with `SOCIALDESK__` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let env = std::env::var("SOCIALDESK_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SOCIALDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        tracing::info!(
            env = %env,
            short_domain = %config.links.short_domain,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix("SOCIALDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
