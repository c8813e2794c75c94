use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikitree_engine::ParseOptions;

const WIKI_PAGES: &str = "https://raw.githubusercontent.com/hyprwm/hyprland-wiki/main/pages/Configuring";

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

/// The documents to fetch and the name of the tree they are merged into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_root_name")]
    pub root_name: String,
    #[serde(rename = "source", default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

/// One document and how to parse it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `http(s)://` URL or local path.
    pub url: String,
    pub start_marker: String,
    #[serde(default)]
    pub skip_prefixes: Vec<String>,
    #[serde(default)]
    pub first_table_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic_name: Option<String>,
}

impl SourceConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            start_marker: self.start_marker.clone(),
            skip_prefixes: self.skip_prefixes.clone(),
            first_table_only: self.first_table_only,
            synthetic_name: self.synthetic_name.clone(),
        }
    }

    fn is_remote(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }

    fn layout_page(page: &str, name: &str) -> Self {
        Self {
            url: format!("{WIKI_PAGES}/{page}"),
            start_marker: "# Config".to_string(),
            skip_prefixes: Vec::new(),
            first_table_only: true,
            synthetic_name: Some(name.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            sources: default_sources(),
        }
    }
}

fn default_root_name() -> String {
    "Hyprland Wiki Variables".to_string()
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            url: format!("{WIKI_PAGES}/Variables.md"),
            start_marker: "# Sections".to_string(),
            skip_prefixes: vec!["## More".to_string(), "## Per-device".to_string()],
            first_table_only: false,
            synthetic_name: None,
        },
        SourceConfig::layout_page("Dwindle-Layout.md", "Dwindle Layout"),
        SourceConfig::layout_page("Master-Layout.md", "Master Layout"),
    ]
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in local source paths
        for source in config.sources.iter_mut().filter(|s| !s.is_remote()) {
            if let Some(expanded) = Self::expand_path(Path::new(&source.url)) {
                source.url = expanded.to_string_lossy().into_owned();
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/wikitree");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
