use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nesting depth used when the config file doesn't set `max_depth`.
pub const DEFAULT_MAX_DEPTH: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Display labels for `<!here>`, `<!channel>` and `<!everyone>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub here: String,
    pub channel: String,
    pub everyone: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            here: "@here".to_string(),
            channel: "@channel".to_string(),
            everyone: "@everyone".to_string(),
        }
    }
}

/// Contents of `~/.config/slack-mrkdwn/config.toml`. Every field is
/// optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emphasis nested deeper than this keeps its delimiters as text.
    pub max_depth: usize,
    /// Channel export opened when no path is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    /// Show `text (url)` for links in plain-text output.
    pub show_link_urls: bool,
    pub labels: Labels,
    /// Custom workspace emoji, shortcode to glyph.
    pub emoji: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            export_path: None,
            show_link_urls: false,
            labels: Labels::default(),
            emoji: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Reads the config file at `config_path`. A missing file is not an
    /// error: it yields `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.is_file() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Self::from_toml(&content)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    /// Parses config file contents, expanding `~` and environment variables
    /// in `export_path`. A path that fails to expand is kept as written.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if let Some(path) = config.export_path.take() {
            config.export_path = Some(Self::expand_path(&path).unwrap_or(path));
        }
        Ok(config)
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads the config file, or the defaults when there is none.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config file at {}", config_path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    fn config_dir() -> PathBuf {
        PathBuf::from(shellexpand::tilde("~/.config/slack-mrkdwn").as_ref())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let raw = path.to_string_lossy();
        shellexpand::full(&raw)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
