//! Service configuration.
//!
//! TOML-based configuration with layered precedence:
//! - Bundled defaults (include_str! from wikicomic.toml)
//! - User overrides (~/.config/wikicomic/wikicomic.toml, then ./wikicomic.toml)
//! - Environment variables (WIKICOMIC__SERVER__PORT and friends)

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use wikicomic_error::{ConfigError, WikicomicResult};

/// HTTP listener and media settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSection {
    /// Address to bind the listener to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the listener to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory panel images are written to and served from.
    #[serde(default = "default_media_root")]
    pub media_root: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_media_root() -> String {
    "media".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            media_root: default_media_root(),
        }
    }
}

/// Generation concurrency settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationSection {
    /// Simultaneous generation runs; further requests queue.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    wikicomic_pipeline::DEFAULT_MAX_CONCURRENT
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// Article search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchSection {
    /// Maximum article titles returned per search.
    #[serde(default = "default_search_limit")]
    pub limit: u32,
}

fn default_search_limit() -> u32 {
    15
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
        }
    }
}

/// Model selection for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderSection {
    /// Model identifier sent to the provider.
    pub model: String,
}

/// Model selection for all providers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProvidersSection {
    /// Groq chat completion settings.
    #[serde(default = "default_groq")]
    pub groq: ProviderSection,

    /// Gemini image generation settings.
    #[serde(default = "default_gemini")]
    pub gemini: ProviderSection,
}

fn default_groq() -> ProviderSection {
    ProviderSection {
        model: wikicomic_models::DEFAULT_CHAT_MODEL.to_string(),
    }
}

fn default_gemini() -> ProviderSection {
    ProviderSection {
        model: wikicomic_models::DEFAULT_IMAGE_MODEL.to_string(),
    }
}

impl Default for ProvidersSection {
    fn default() -> Self {
        Self {
            groq: default_groq(),
            gemini: default_gemini(),
        }
    }
}

/// Top-level WikiComic service configuration.
///
/// # Example
///
/// ```no_run
/// use wikicomic_server::ServiceConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServiceConfig::load()?;
/// println!("Listening on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ServiceConfig {
    /// HTTP listener and media settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Generation concurrency settings.
    #[serde(default)]
    pub generation: GenerationSection,

    /// Article search settings.
    #[serde(default)]
    pub search: SearchSection,

    /// Provider model selection.
    #[serde(default)]
    pub providers: ProvidersSection,
}

impl ServiceConfig {
    /// Load configuration from a specific file path.
    ///
    /// Missing sections fall back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> WikicomicResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Load configuration with precedence: env > user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (wikicomic.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/wikicomic/wikicomic.toml)
    /// 3. User config in current directory (./wikicomic.toml)
    /// 4. Environment variables (WIKICOMIC__SERVER__PORT, ...)
    ///
    /// User config files are optional and will be silently skipped if not found.
    #[instrument]
    pub fn load() -> WikicomicResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../wikicomic.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/wikicomic/wikicomic.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional)
        builder = builder.add_source(File::with_name("wikicomic").required(false));

        // Environment variables win over every file source
        builder = builder.add_source(Environment::with_prefix("WIKICOMIC").separator("__"));

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// The host:port string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_deserialize() {
        const DEFAULT_CONFIG: &str = include_str!("../../../wikicomic.toml");

        let config: ServiceConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.media_root, "media");
        assert_eq!(config.generation.max_concurrent, 4);
        assert_eq!(config.search.limit, 15);
        assert_eq!(config.providers.groq.model, "llama3-8b-8192");
        assert_eq!(
            config.providers.gemini.model,
            "gemini-2.0-flash-exp-image-generation"
        );
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wikicomic.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = ServiceConfig::from_file(&path).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.generation.max_concurrent, 4);
        assert_eq!(config.search.limit, 15);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = ServiceConfig::from_file("/definitely/not/here/wikicomic.toml");
        assert!(result.is_err());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }
}
