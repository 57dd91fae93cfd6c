//! Configuration management for sentiment-api using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::{ClassifierKind, RemoteConfig};
use crate::services::DEFAULT_MAX_CHARS;

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Address the HTTP server binds to (host:port).
    pub bind: String,
    /// Maximum characters per analyzed text.
    pub max_chars: usize,
    /// Classifier backend.
    pub classifier: ClassifierKind,
    /// Remote classifier connection, used when `classifier` is remote.
    pub remote: RemoteConfig,
    /// Enable a permissive CORS layer.
    pub cors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_chars: DEFAULT_MAX_CHARS,
            classifier: ClassifierKind::default(),
            remote: RemoteConfig::default(),
            cors: false,
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
    /// Classifier backend name: "lexicon" or "remote".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Remote classifier settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<bool>,

    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers sentiment-api config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("sentiment-api").await {
            Ok(pref_config) => Self::from_prefer(&pref_config),
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Extract known keys from a discovered prefer config using dot notation.
    fn from_prefer(pref_config: &prefer::Config) -> Self {
        let remote = pref_config.has_key("remote").then(|| {
            let defaults = RemoteConfig::default();
            RemoteConfig {
                url: pref_config.get("remote.url").ok(),
                api_token: pref_config.get("remote.api_token").ok(),
                timeout_secs: pref_config
                    .get("remote.timeout_secs")
                    .unwrap_or(defaults.timeout_secs),
            }
        });

        Config {
            bind: pref_config.get("bind").ok(),
            max_chars: pref_config.get("max_chars").ok(),
            classifier: pref_config.get("classifier").ok(),
            remote,
            cors: pref_config.get("cors").ok(),
            source_path: pref_config.source_path().cloned(),
        }
    }

    /// Load configuration from a specific JSON file.
    pub async fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply configuration to settings. Unknown classifier names are rejected.
    pub fn apply_to_settings(&self, settings: &mut Settings) -> anyhow::Result<()> {
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(max_chars) = self.max_chars {
            settings.max_chars = max_chars;
        }
        if let Some(ref name) = self.classifier {
            settings.classifier = ClassifierKind::from_str(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown classifier '{}'", name))?;
        }
        if let Some(ref remote) = self.remote {
            settings.remote = remote.clone();
        }
        if let Some(cors) = self.cors {
            settings.cors = cors;
        }
        Ok(())
    }
}

/// Command-line overrides. Each `Some` wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
    pub max_chars: Option<usize>,
    pub classifier: Option<ClassifierKind>,
    pub remote_url: Option<String>,
    pub remote_token: Option<String>,
    pub cors: bool,
}

impl LoadOptions {
    fn apply_to_settings(self, settings: &mut Settings) {
        if let Some(bind) = self.bind {
            settings.bind = bind;
        }
        if let Some(max_chars) = self.max_chars {
            settings.max_chars = max_chars;
        }
        if let Some(kind) = self.classifier {
            settings.classifier = kind;
        }
        if let Some(url) = self.remote_url {
            settings.remote.url = Some(url);
        }
        if let Some(token) = self.remote_token {
            settings.remote.api_token = Some(token);
        }
        if self.cors {
            settings.cors = true;
        }
    }
}

/// Load settings: defaults, then config file, then command-line overrides.
pub async fn load_settings_with_options(options: LoadOptions) -> anyhow::Result<Settings> {
    let config = match &options.config_path {
        Some(path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    if let Some(ref path) = config.source_path {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings)?;
    options.apply_to_settings(&mut settings);

    Ok(settings)
}
