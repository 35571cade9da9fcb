//! Configuration file support for mention-picker.
//!
//! Configuration is loaded from `~/.config/mention-picker/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/mention-picker/config.toml
//! catalog = "~/.config/mention-picker/providers.toml"
//! menu_height = 12
//!
//! [labels]
//! "models.pinned" = "Favorites"
//! "provider.openai" = "OpenAI (work)"
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::i18n::Translator;

const DEFAULT_MENU_HEIGHT: usize = 16;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Provider catalog file
    pub catalog: Option<PathBuf>,

    /// Settings file holding pinned models
    pub settings_path: Option<PathBuf>,

    /// Maximum number of rows shown by the mention dropdown
    pub menu_height: Option<usize>,

    /// Label overrides keyed by translation key
    pub labels: HashMap<String, String>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mention-picker")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, settings_path: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog = catalog;
        }
        if settings_path.is_some() {
            self.settings_path = settings_path;
        }
        self
    }

    /// Catalog path, falling back to the environment variable.
    ///
    /// `None` selects the built-in catalog.
    pub fn catalog(&self) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| std::env::var("MENTION_PICKER_CATALOG").ok().map(PathBuf::from))
    }

    pub fn settings_path(&self) -> PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("settings.json"))
    }

    pub fn menu_height(&self) -> usize {
        self.menu_height.unwrap_or(DEFAULT_MENU_HEIGHT).max(1)
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.labels.clone())
    }
}
